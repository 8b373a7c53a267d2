//! Domain types and pure logic for the users spreadsheet export.
//!
//! Nothing in this crate performs I/O: records come in already fetched,
//! bytes go out ready to be served.

pub mod error;
pub mod export;
pub mod spreadsheet;
pub mod types;
