//! Patient identity and inpatient placement sections.

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::FieldDecoder;
use crate::telegram::types::error::Result;
use crate::telegram::types::models::{InpatientInfo, PatientInfo};

/// Parse the patient identity section (231 bytes).
pub fn parse_patient(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<PatientInfo> {
    Ok(PatientInfo {
        id: dec.text_field(cur, 10)?,
        kanji_name: dec.text_field(cur, 30)?,
        kana_name: dec.text_field(cur, 60)?,
        sex: dec.text_field(cur, 1)?,
        birth_date: dec.text_field(cur, 8)?,
        postal_code_1: dec.text_field(cur, 3)?,
        postal_code_2: dec.text_field(cur, 4)?,
        address: dec.text_field(cur, 100)?,
        phone_number: dec.text_field(cur, 15)?,
    })
}

/// Parse the inpatient placement section (14 bytes).
pub fn parse_inpatient(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<InpatientInfo> {
    Ok(InpatientInfo {
        status: dec.text_field(cur, 1)?,
        department_code: dec.text_field(cur, 3)?,
        ward_code: dec.text_field(cur, 3)?,
        room_code: dec.text_field(cur, 5)?,
        bed_code: dec.text_field(cur, 2)?,
    })
}
