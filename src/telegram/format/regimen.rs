//! Regimen section with the body-at-application sub-record.

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::FieldDecoder;
use crate::telegram::types::error::Result;
use crate::telegram::types::models::{BodyInfo, RegimenInfo};

/// Parse the regimen section (112 bytes).
pub fn parse(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<RegimenInfo> {
    Ok(RegimenInfo {
        code: dec.text_field(cur, 8)?,
        name: dec.text_field(cur, 50)?,
        course_count: dec.text_field(cur, 3)?,
        drip_order: dec.text_field(cur, 4)?,
        start_date: dec.text_field(cur, 14)?,
        body: BodyInfo {
            height: dec.f64_field(cur, 11, "regimen height")?,
            weight: dec.f64_field(cur, 11, "regimen weight")?,
            body_surface_area: dec.f64_field(cur, 11, "regimen body surface area")?,
        },
    })
}
