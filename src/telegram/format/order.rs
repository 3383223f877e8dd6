//! Order metadata section with its nested sub-records.

use crate::telegram::cursor::ByteCursor;
use crate::telegram::decode::FieldDecoder;
use crate::telegram::types::error::Result;
use crate::telegram::types::models::{
    DateTimeFields, DoctorInfo, NarcoticUser, OrderInfo, ProxyUserInfo, RelatedOrder,
};

/// Parse the order section.
///
/// The nested sub-records (related order, performed/created timestamps,
/// doctor, proxy user, two narcotic users) occupy fixed positions inside the
/// section; they are separate reads here only because they are separate
/// records in the tree.
pub fn parse(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<OrderInfo> {
    let document_type = dec.text_field(cur, 1)?;
    let document_id = dec.text_field(cur, 30)?;
    let version = dec.u32_field(cur, 2, "document version")?;
    let parent_document_id = dec.text_field(cur, 30)?;
    let order_number = dec.text_field(cur, 8)?;

    let related_order = RelatedOrder {
        created_on: dec.text_field(cur, 8)?,
        number: dec.text_field(cur, 8)?,
    };
    let performed_at = parse_datetime(cur, dec)?;
    let created_at = parse_datetime(cur, dec)?;

    let exchange_ticket_number = dec.text_field(cur, 8)?;
    let inpatient_class = dec.text_field(cur, 1)?;
    let issuing_department_code = dec.text_field(cur, 3)?;
    let issuing_ward_code = dec.text_field(cur, 3)?;
    let slip_code = dec.text_field(cur, 4)?;
    let slip_name = dec.text_field(cur, 50)?;

    let doctor = DoctorInfo {
        user_id: dec.text_field(cur, 8)?,
        kanji_name: dec.text_field(cur, 20)?,
        kana_name: dec.text_field(cur, 40)?,
    };
    let proxy_user = ProxyUserInfo {
        user_id: dec.text_field(cur, 8)?,
        kanji_name: dec.text_field(cur, 20)?,
    };
    let narcotic_user_1 = parse_narcotic_user(cur, dec)?;
    let narcotic_user_2 = parse_narcotic_user(cur, dec)?;

    Ok(OrderInfo {
        document_type,
        document_id,
        version,
        parent_document_id,
        order_number,
        related_order,
        performed_at,
        created_at,
        exchange_ticket_number,
        inpatient_class,
        issuing_department_code,
        issuing_ward_code,
        slip_code,
        slip_name,
        doctor,
        proxy_user,
        narcotic_user_1,
        narcotic_user_2,
    })
}

fn parse_datetime(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<DateTimeFields> {
    Ok(DateTimeFields {
        date: dec.text_field(cur, 8)?,
        time: dec.text_field(cur, 6)?,
    })
}

fn parse_narcotic_user(cur: &mut ByteCursor<'_>, dec: &FieldDecoder) -> Result<NarcoticUser> {
    Ok(NarcoticUser {
        licence_id: dec.text_field(cur, 10)?,
        start_date: dec.text_field(cur, 8)?,
        end_date: dec.text_field(cur, 8)?,
    })
}
