//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept a `&Collection<Document>` as the first argument.

pub mod user_record_repo;

pub use user_record_repo::UserRecordRepo;
