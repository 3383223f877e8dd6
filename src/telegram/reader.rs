//! High-level entry point for reading injection-order telegram files.

use std::fs;
use std::path::Path;

use log::info;

use super::decode::FieldDecoder;
use super::format;
use super::types::error::Result;
use super::types::models::{Telegram, TelegramSummary};
use super::utils;

/// The main reader for injection-order telegrams.
///
/// Owns the decoded tree plus the trailing-byte count of the parse that
/// produced it. The raw buffer is not retained: partial or streaming input
/// is not supported, so the whole telegram is read (or supplied) up front,
/// decoded in one pass, and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TelegramReader {
    telegram: Telegram,
    trailing_bytes: usize,
}

impl TelegramReader {
    /// Read and decode a telegram file from the given path.
    ///
    /// The file is read fully into memory before parsing begins.
    ///
    /// # Arguments
    /// * `path` - File path to the raw telegram
    /// * `encoding_label` - Optional WHATWG label overriding the default
    ///   Shift_JIS text encoding (e.g. `"euc-jp"`)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The buffer is empty
    /// - The header discriminants do not match an injection-order telegram
    /// - Any field or repeating-group element runs past the end of the buffer
    pub fn from_path(path: impl AsRef<Path>, encoding_label: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening telegram file: {}", path.display());
        let bytes = fs::read(path)?;
        Self::from_bytes(&bytes, encoding_label)
    }

    /// Decode a telegram from an in-memory byte buffer.
    ///
    /// Same contract as [`from_path`](Self::from_path) without the file read.
    /// The buffer is borrowed only for the duration of this call.
    pub fn from_bytes(bytes: &[u8], encoding_label: Option<&str>) -> Result<Self> {
        let encoding = encoding_label
            .map(utils::parse_encoding)
            .unwrap_or(encoding_rs::SHIFT_JIS);
        let decoder = FieldDecoder::new(encoding);
        let (telegram, trailing_bytes) = format::parse(bytes, &decoder)?;
        Ok(Self {
            telegram,
            trailing_bytes,
        })
    }

    /// The decoded telegram tree.
    pub fn telegram(&self) -> &Telegram {
        &self.telegram
    }

    /// Consume the reader, yielding the decoded tree.
    pub fn into_telegram(self) -> Telegram {
        self.telegram
    }

    /// Number of bytes that remained after the last section.
    ///
    /// Non-zero means the sender appended data the telegram structure does
    /// not account for; the parse succeeds regardless.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// Extract the scalar summary record (document id/version, order
    /// number/date, patient id/name).
    pub fn summary(&self) -> TelegramSummary {
        self.telegram.summary()
    }

    /// Serialize the full tree to compact JSON.
    ///
    /// Blank fields serialize as JSON `null` with their keys present; this
    /// is the single boundary where the null sentinel maps to the target
    /// format.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.telegram)
    }

    /// Serialize the full tree to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.telegram)
    }
}
