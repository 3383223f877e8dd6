//! Custom error types for the injord-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every fatal parse failure maps to exactly one variant; a failed parse
/// never yields a partial telegram. Trailing bytes after a complete parse
/// are a non-fatal notice and are reported through
/// [`TelegramReader::trailing_bytes`](crate::TelegramReader::trailing_bytes),
/// not through this type.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// An error originating from I/O operations (file-based entry point only).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The supplied buffer contained no bytes at all.
    #[error("empty input: the telegram buffer contains no bytes")]
    EmptyInput,

    /// One of the four routing discriminants in the common header did not
    /// match the injection-order telegram signature.
    #[error("header validation failed: {field} must be {expected:?}, got {actual:?}")]
    HeaderValidation {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// A field or sub-record read requested more bytes than remained.
    #[error("truncated telegram: needed {requested} bytes at offset {offset}, only {available} remain")]
    Truncated {
        requested: usize,
        available: usize,
        offset: usize,
    },

    /// A numeric field held non-blank text that does not parse as a number.
    #[error("invalid numeric field {field}: {text:?}")]
    InvalidNumber { field: &'static str, text: String },
}

/// A convenience `Result` type alias using the crate's `TelegramError` type.
pub type Result<T> = std::result::Result<T, TelegramError>;
