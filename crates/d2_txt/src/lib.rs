//! This library reads the tab-delimited data files (`MonStats.txt`, `Levels.txt`, ...) that
//! *Diablo II* ships alongside its binary assets.
//!
//! Each file starts with a header row naming the columns; every following row is one record.
//! Column names and field values are surrounded by stray whitespace in several of the stock
//! files, so both are trimmed. A row whose field count differs from the header is treated as
//! a malformed file rather than being skipped.

pub mod error;
pub mod read;

pub use read::{read_records, read_records_path, Record};
