//! Encoding label resolution.

use encoding_rs::{Encoding, SHIFT_JIS};

/// Resolve a WHATWG encoding label to an `encoding_rs` encoding.
///
/// Falls back to Shift_JIS (windows-31j, the cp932 superset the telegrams
/// are sent in) when the label is unknown.
pub fn parse_encoding(label: &str) -> &'static Encoding {
    Encoding::for_label(label.as_bytes()).unwrap_or(SHIFT_JIS)
}
