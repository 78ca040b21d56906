//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// A key or value string never reached a NUL terminator
    #[error("string at offset {offset:#x} is missing its NUL terminator")]
    UnterminatedString {
        /// Offset of the first byte of the runaway string
        offset: u32,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
