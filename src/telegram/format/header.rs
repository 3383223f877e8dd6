//! Common header parsing and discriminant validation.
//!
//! Every telegram opens with a fixed 64-byte header:
//!
//! ```text
//! [2] message type        "II" = injection order
//! [1] continuation flag   "E"  = end of record chain
//! [2] destination code    "HS"
//! [2] source code         "XX"
//! [8] processing date     YYYYMMDD
//! [6] processing time     HHMMSS
//! [8] terminal name
//! [8] user id
//! [2] processing class
//! [2] response type
//! [6] message length
//! [5] error code
//! [12] reserved
//! ```
//!
//! The first four fields are routing discriminants. A mismatch in any of
//! them means the buffer is not an injection-order telegram addressed to
//! this system, and the content body is never attempted.

use log::{debug, trace};

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::FieldDecoder;
use crate::telegram::types::error::{Result, TelegramError};
use crate::telegram::types::models::{CommonHeader, ProcessingStamp};

/// Total size of the fixed common header.
pub const COMMON_HEADER_LEN: usize = 64;

const MESSAGE_TYPE: &str = "II";
const CONTINUATION: &str = "E";
const DESTINATION: &str = "HS";
const SOURCE: &str = "XX";

/// Parse and validate the 64-byte common header.
///
/// # Errors
/// - [`TelegramError::Truncated`] if the buffer holds fewer than 64 bytes
/// - [`TelegramError::HeaderValidation`] on the first mismatched discriminant
pub fn parse(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<CommonHeader> {
    debug!("Parsing common header");

    let header = CommonHeader {
        message_type: dec.text_field(cur, 2)?,
        continuation: dec.text_field(cur, 1)?,
        destination: dec.text_field(cur, 2)?,
        source: dec.text_field(cur, 2)?,
        processed: ProcessingStamp {
            date: dec.text_field(cur, 8)?,
            time: dec.text_field(cur, 6)?,
        },
        terminal_name: dec.text_field(cur, 8)?,
        user_id: dec.text_field(cur, 8)?,
        processing_class: dec.text_field(cur, 2)?,
        response_type: dec.text_field(cur, 2)?,
        message_length: dec.text_field(cur, 6)?,
        error_code: dec.text_field(cur, 5)?,
        reserved: dec.text_field(cur, 12)?,
    };

    validate(&header)?;
    trace!(
        "Header accepted: processed {:?} {:?}, terminal {:?}",
        header.processed.date,
        header.processed.time,
        header.terminal_name
    );
    Ok(header)
}

/// Check the four routing discriminants against the telegram signature.
fn validate(header: &CommonHeader) -> Result<()> {
    let checks: [(&'static str, &Option<String>, &'static str); 4] = [
        ("message type", &header.message_type, MESSAGE_TYPE),
        ("continuation flag", &header.continuation, CONTINUATION),
        ("destination code", &header.destination, DESTINATION),
        ("source code", &header.source, SOURCE),
    ];
    for (field, actual, expected) in checks {
        if actual.as_deref() != Some(expected) {
            return Err(TelegramError::HeaderValidation {
                field,
                expected,
                actual: actual.clone().unwrap_or_default(),
            });
        }
    }
    Ok(())
}
