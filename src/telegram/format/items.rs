//! Ordered-item group: a 4-digit count followed by fixed 243-byte items.

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::{read_group, FieldDecoder};
use crate::telegram::types::error::Result;
use crate::telegram::types::models::{CodeGroup, Item};

/// Parse the item count and the repeating item group.
pub fn parse(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<Vec<Item>> {
    read_group(cur, dec, 4, "item count", parse_item)
}

fn parse_item(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<Item> {
    Ok(Item {
        attribute: dec.text_field(cur, 3)?,
        code: dec.text_field(cur, 8)?,
        linked_code: dec.text_field(cur, 8)?,
        name: dec.text_field(cur, 50)?,
        quantity: dec.f64_field(cur, 11, "quantity")?,
        unit_flag: dec.text_field(cur, 1)?,
        unit_code: dec.text_field(cur, 3)?,
        unit_name: dec.text_field(cur, 4)?,
        max_dose_flag: dec.text_field(cur, 1)?,
        row_date: dec.text_field(cur, 8)?,
        row_time: dec.text_field(cur, 6)?,
        codes: parse_code_group(cur, dec)?,
    })
}

fn parse_code_group(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<CodeGroup> {
    Ok(CodeGroup {
        article_code: dec.text_field(cur, 9)?,
        jan_code: dec.text_field(cur, 13)?,
        mhlw_drug_code: dec.text_field(cur, 12)?,
        hot_code: dec.text_field(cur, 13)?,
        claim_code: dec.text_field(cur, 12)?,
        jlac10_code: dec.text_field(cur, 17)?,
        yj_code: dec.text_field(cur, 20)?,
        logistics_code: dec.text_field(cur, 20)?,
        order_management_number: dec.text_field(cur, 14)?,
        billing_management_number: dec.text_field(cur, 10)?,
    })
}
