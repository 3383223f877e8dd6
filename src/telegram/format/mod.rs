//! Telegram format parsing layer.
//!
//! # Module Organization
//!
//! - [`header`]: the fixed 64-byte common header and its routing discriminants
//! - [`patient`]: patient identity and inpatient placement sections
//! - [`order`]: order metadata with its nested sub-records
//! - [`profile`]: body measurements and the repeating profile group
//! - [`regimen`]: regimen data with the body-at-application sub-record
//! - [`items`]: the count-prefixed ordered-item group
//!
//! # Telegram Structure
//!
//! ```text
//! ┌──────────────────┐
//! │  Common header   │ 64 bytes, validated   ← header::parse()
//! ├──────────────────┤
//! │  Patient         │ fixed                 ← patient::parse_patient()
//! │  Inpatient       │ fixed                 ← patient::parse_inpatient()
//! │  Order           │ fixed                 ← order::parse()
//! │  Profile         │ fixed + repeating     ← profile::parse()
//! │  Regimen         │ fixed                 ← regimen::parse()
//! │  Items           │ count + repeating     ← items::parse()
//! ├──────────────────┤
//! │  Trailing bytes  │ tolerated, warned about
//! └──────────────────┘
//! ```

pub mod header;
pub mod items;
pub mod order;
pub mod patient;
pub mod profile;
pub mod regimen;

use log::{info, warn};

use super::cursor::ByteCursor;
use super::decode::FieldDecoder;
use super::types::error::{Result, TelegramError};
use super::types::models::{ContentBody, Telegram};

/// Parse one complete telegram from an in-memory buffer.
///
/// Performs a single linear pass: header validation first, then every body
/// section in its fixed order against one shared cursor. Returns the
/// assembled tree together with the number of undocumented bytes left after
/// the last section (non-fatal; also logged as a warning).
///
/// # Errors
/// - [`TelegramError::EmptyInput`] for a zero-length buffer
/// - [`TelegramError::HeaderValidation`] if the routing discriminants
///   mismatch; no content section is attempted
/// - [`TelegramError::Truncated`] if any field or repeating-group element
///   runs past the end of the buffer; no partial tree is returned
pub fn parse(buf: &[u8], dec: &FieldDecoder) -> Result<(Telegram, usize)> {
    if buf.is_empty() {
        return Err(TelegramError::EmptyInput);
    }

    let mut cur = ByteCursor::new(buf);

    let common = header::parse(&mut cur, dec)?;

    let patient = patient::parse_patient(&mut cur, dec)?;
    let inpatient = patient::parse_inpatient(&mut cur, dec)?;
    let order = order::parse(&mut cur, dec)?;
    let profile = profile::parse(&mut cur, dec)?;
    let regimen = regimen::parse(&mut cur, dec)?;
    let items = items::parse(&mut cur, dec)?;

    let trailing = cur.remaining();
    if trailing > 0 {
        warn!(
            "{} byte(s) left after the last section (offset {} of {})",
            trailing,
            cur.offset(),
            buf.len()
        );
    }
    info!(
        "Telegram parsed: {} profile entr(ies), {} item(s), {} trailing byte(s)",
        profile.profiles.len(),
        items.len(),
        trailing
    );

    let telegram = Telegram {
        common,
        content: ContentBody {
            patient,
            inpatient,
            order,
            profile,
            regimen,
            items,
        },
    };
    Ok((telegram, trailing))
}
