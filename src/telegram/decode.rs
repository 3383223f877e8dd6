//! Fixed-width field decoding and repeating-group reading.
//!
//! All field content in this telegram format is text, including numbers:
//! a numeric field is a fixed-width run of ASCII digits padded with spaces.
//! Decoding therefore always goes through the legacy text encoding first,
//! and the numeric helpers differ only in how they treat an all-padding
//! field (the null sentinel).

use encoding_rs::Encoding;
use log::trace;

use super::cursor::ByteCursor;
use super::types::error::{Result, TelegramError};

/// Decodes fixed-width byte slices using one legacy text encoding.
///
/// Invalid byte sequences are replaced with U+FFFD rather than failing, so a
/// single mojibake field never aborts a parse. Padding (ASCII whitespace and
/// the ideographic space U+3000) is trimmed from both ends; a field that was
/// entirely padding decodes to `None`.
#[derive(Debug, Clone, Copy)]
pub struct FieldDecoder {
    encoding: &'static Encoding,
}

impl FieldDecoder {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// The encoding this decoder was constructed with.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decode a raw slice to trimmed text, `None` if blank.
    pub fn text(&self, bytes: &[u8]) -> Option<String> {
        let (decoded, _, _) = self.encoding.decode(bytes);
        let trimmed = decoded.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Consume `width` bytes from the cursor and decode them as text.
    pub fn text_field(&self, cur: &mut ByteCursor<'_>, width: usize) -> Result<Option<String>> {
        Ok(self.text(cur.advance(width)?))
    }

    /// Consume a measurement/quantity field: blank coerces to `0.0`.
    pub fn f64_field(
        &self,
        cur: &mut ByteCursor<'_>,
        width: usize,
        field: &'static str,
    ) -> Result<f64> {
        match self.text_field(cur, width)? {
            None => Ok(0.0),
            Some(text) => text
                .parse::<f64>()
                .map_err(|_| TelegramError::InvalidNumber { field, text }),
        }
    }

    /// Consume an identifier-class numeric field: blank stays `None`.
    pub fn u32_field(
        &self,
        cur: &mut ByteCursor<'_>,
        width: usize,
        field: &'static str,
    ) -> Result<Option<u32>> {
        match self.text_field(cur, width)? {
            None => Ok(None),
            Some(text) => text
                .parse::<u32>()
                .map(Some)
                .map_err(|_| TelegramError::InvalidNumber { field, text }),
        }
    }

    /// Consume a repeating-group count field: blank coerces to `0`.
    pub fn count_field(
        &self,
        cur: &mut ByteCursor<'_>,
        width: usize,
        field: &'static str,
    ) -> Result<usize> {
        match self.text_field(cur, width)? {
            None => Ok(0),
            Some(text) => text
                .parse::<usize>()
                .map_err(|_| TelegramError::InvalidNumber { field, text }),
        }
    }
}

/// Read a count-prefixed repeating group from the shared cursor.
///
/// Reads the fixed-width count field (blank counts as zero), then invokes
/// `build` exactly `count` times, each call consuming one fixed-size
/// sub-record. The declared count is authoritative: the result always holds
/// exactly `count` elements, and a buffer that runs out mid-element surfaces
/// as [`TelegramError::Truncated`] from inside `build`, aborting the whole
/// parse. A count of zero yields an empty vector.
pub fn read_group<T>(
    cur: &mut ByteCursor<'_>,
    dec: &FieldDecoder,
    count_width: usize,
    field: &'static str,
    build: impl Fn(&mut ByteCursor<'_>, &FieldDecoder) -> Result<T>,
) -> Result<Vec<T>> {
    let count = dec.count_field(cur, count_width, field)?;
    trace!("{}: {} element(s) declared", field, count);
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(build(cur, dec)?);
    }
    Ok(elements)
}
