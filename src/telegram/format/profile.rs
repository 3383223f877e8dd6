//! Patient profile section: fixed measurements plus the repeating
//! profile group.

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::{read_group, FieldDecoder};
use crate::telegram::types::error::Result;
use crate::telegram::types::models::{Measurement, PatientProfile, ProfileEntry};

/// Parse the patient profile section.
///
/// Height and weight carry a measurement date; body surface area is a bare
/// value. The profile group is count-prefixed (3-digit count, blank = 0),
/// each entry a fixed 560-byte sub-record.
pub fn parse(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<PatientProfile> {
    let height = Measurement {
        value: dec.f64_field(cur, 11, "height")?,
        measured_on: dec.text_field(cur, 8)?,
    };
    let weight = Measurement {
        value: dec.f64_field(cur, 11, "weight")?,
        measured_on: dec.text_field(cur, 8)?,
    };
    let body_surface_area = dec.f64_field(cur, 11, "body surface area")?;

    let profiles = read_group(cur, dec, 3, "profile count", parse_entry)?;

    Ok(PatientProfile {
        height,
        weight,
        body_surface_area,
        profiles,
    })
}

fn parse_entry(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<ProfileEntry> {
    Ok(ProfileEntry {
        code: dec.text_field(cur, 10)?,
        name: dec.text_field(cur, 50)?,
        data: dec.text_field(cur, 500)?,
    })
}
