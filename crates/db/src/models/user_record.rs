//! Mapping from stored user documents to export records.

use mongodb::bson::{doc, Bson, Document};
use roster_core::export::{format_iso, RawRecord, Registration};
use roster_core::types::Timestamp;

/// Field names fetched from each user document.
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FULLNAME: &str = "fullname";
pub const FIELD_WHATSAPP: &str = "whatsapp";
pub const FIELD_REGISTRATION: &str = "registration";

/// Query projection: the four exported fields, never `_id`.
pub fn projection() -> Document {
    doc! {
        "email": 1,
        "fullname": 1,
        "whatsapp": 1,
        "registration": 1,
        "_id": 0,
    }
}

/// Build a [`RawRecord`] from a projected user document.
///
/// Text fields keep string values as-is. Any other non-null value is
/// rendered with [`bson_display_string`] so the row stays all-string.
pub fn raw_record_from_document(doc: &Document) -> RawRecord {
    RawRecord {
        email: text_field(doc, FIELD_EMAIL),
        fullname: text_field(doc, FIELD_FULLNAME),
        whatsapp: text_field(doc, FIELD_WHATSAPP),
        registration: registration_from_bson(doc.get(FIELD_REGISTRATION)),
    }
}

fn text_field(doc: &Document, key: &str) -> Option<String> {
    match doc.get(key) {
        None | Some(Bson::Null) => None,
        Some(Bson::String(s)) => Some(s.clone()),
        Some(Bson::DateTime(dt)) => Some(match timestamp_from_bson(dt) {
            Some(ts) => format_iso(&ts),
            None => dt.to_string(),
        }),
        Some(other) => Some(bson_display_string(other)),
    }
}

/// `None` when the stored millisecond value is outside chrono's range.
fn timestamp_from_bson(dt: &mongodb::bson::DateTime) -> Option<Timestamp> {
    chrono::DateTime::from_timestamp_millis(dt.timestamp_millis())
}

/// Classify a stored `registration` value.
///
/// Order matters: date-time first, then null/missing/empty, then everything
/// else is stringified (so `0` and `false` are kept, not blanked).
pub fn registration_from_bson(value: Option<&Bson>) -> Registration {
    match value {
        Some(Bson::DateTime(dt)) => match timestamp_from_bson(dt) {
            Some(ts) => Registration::Timestamp(ts),
            None => Registration::Other(dt.to_string()),
        },
        None | Some(Bson::Null) => Registration::Absent,
        Some(Bson::String(s)) if s.is_empty() => Registration::Empty,
        Some(other) => Registration::Other(bson_display_string(other)),
    }
}

/// Generic string form of a BSON value.
///
/// Scalars render the way a dynamic-language `str()` would (`True`, `1.0`,
/// `nan`). Documents, arrays and other structured values fall back to
/// relaxed Extended JSON.
pub fn bson_display_string(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        Bson::Double(n) => float_display_string(*n),
        Bson::Boolean(true) => "True".to_string(),
        Bson::Boolean(false) => "False".to_string(),
        Bson::Null => "None".to_string(),
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::Decimal128(d) => d.to_string(),
        other => relaxed_json_string(other),
    }
}

/// Shortest round-trip digits, laid out like a Python float repr:
/// scientific notation when the decimal exponent is below -4 or at least 16
/// (`1e+16`, `1.5e-05`), fixed notation with at least one fractional digit
/// otherwise (`1.0`, `0.0001`).
fn float_display_string(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{n:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let fixed = n.to_string();
    if fixed.contains('.') {
        fixed
    } else {
        format!("{fixed}.0")
    }
}

fn relaxed_json_string(value: &Bson) -> String {
    let json_value = value.clone().into_relaxed_extjson();
    serde_json::to_string(&json_value).unwrap_or_default()
}
