//! Record normalization for the users export.
//!
//! A [`RawRecord`] is the typed view of one fetched document. Each record is
//! normalized into a [`NormalizedRow`] of four strings, and the rows are
//! gathered into an [`ExportDocument`] in fetch order.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Column header, in output order.
pub const COLUMNS: [&str; 4] = ["email", "fullname", "whatsapp", "registration"];

/// Name of the single worksheet in the exported workbook.
pub const SHEET_NAME: &str = "users";

/// Download file name used in the `Content-Disposition` header.
pub const FILE_NAME: &str = "users.xlsx";

/// MIME type of an Office Open XML workbook.
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// The stored `registration` value, classified by kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Registration {
    /// Field missing or stored as null.
    #[default]
    Absent,
    /// Stored as the empty string.
    Empty,
    /// Stored as a date-time.
    Timestamp(Timestamp),
    /// Any other value, already rendered in its generic string form.
    Other(String),
}

impl Registration {
    /// Render the value as the exported cell text.
    ///
    /// Date-times become ISO-8601 strings, absent and empty values become
    /// `""`, and anything else keeps its string form (so `Other("")` is
    /// still `""`, and `Other("0")` is `"0"`, not empty).
    pub fn to_cell(&self) -> String {
        match self {
            Registration::Absent | Registration::Empty => String::new(),
            Registration::Timestamp(ts) => format_iso(ts),
            Registration::Other(text) => text.clone(),
        }
    }
}

/// Format a timestamp as a naive ISO-8601 string.
///
/// Whole seconds render as `YYYY-MM-DDTHH:MM:SS`; anything finer adds six
/// fractional digits (`.ffffff`).
pub fn format_iso(ts: &Timestamp) -> String {
    if ts.timestamp_subsec_micros() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

// ---------------------------------------------------------------------------
// Records and rows
// ---------------------------------------------------------------------------

/// One fetched user document, restricted to the exported fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub email: Option<String>,
    pub fullname: Option<String>,
    pub whatsapp: Option<String>,
    pub registration: Registration,
}

/// A fixed-shape export row. Every field is always a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRow {
    pub email: String,
    pub fullname: String,
    pub whatsapp: String,
    pub registration: String,
}

impl NormalizedRow {
    /// Normalize a raw record, substituting `""` for anything missing.
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            email: record.email.clone().unwrap_or_default(),
            fullname: record.fullname.clone().unwrap_or_default(),
            whatsapp: record.whatsapp.clone().unwrap_or_default(),
            registration: record.registration.to_cell(),
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.email,
            &self.fullname,
            &self.whatsapp,
            &self.registration,
        ]
    }
}

impl From<RawRecord> for NormalizedRow {
    fn from(record: RawRecord) -> Self {
        Self::from_record(&record)
    }
}

// ---------------------------------------------------------------------------
// Export document
// ---------------------------------------------------------------------------

/// The full set of rows to export, in fetch order, under [`COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    rows: Vec<NormalizedRow>,
}

impl ExportDocument {
    /// Normalize every record, keeping input order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        Self {
            rows: records.into_iter().map(NormalizedRow::from).collect(),
        }
    }

    pub fn header(&self) -> &'static [&'static str; 4] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
