//! Data structures representing the decoded telegram tree.
//!
//! Text fields are `Option<String>`: `None` marks a field whose source bytes
//! were entirely padding, distinct from an empty string and from `0`.
//! Measurement and quantity fields are plain `f64` with blank coerced to
//! `0.0` during decoding. Every struct serializes with all keys present;
//! `None` becomes JSON `null` at the serde boundary.

use serde::Serialize;

/// The fixed 64-byte leading segment identifying and routing the telegram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonHeader {
    pub message_type: Option<String>,
    pub continuation: Option<String>,
    pub destination: Option<String>,
    pub source: Option<String>,
    pub processed: ProcessingStamp,
    pub terminal_name: Option<String>,
    pub user_id: Option<String>,
    pub processing_class: Option<String>,
    pub response_type: Option<String>,
    pub message_length: Option<String>,
    pub error_code: Option<String>,
    pub reserved: Option<String>,
}

/// Date/time pair stamped by the sending system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingStamp {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Patient identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientInfo {
    pub id: Option<String>,
    pub kanji_name: Option<String>,
    pub kana_name: Option<String>,
    pub sex: Option<String>,
    pub birth_date: Option<String>,
    pub postal_code_1: Option<String>,
    pub postal_code_2: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

/// Current inpatient placement (ward, room, bed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InpatientInfo {
    pub status: Option<String>,
    pub department_code: Option<String>,
    pub ward_code: Option<String>,
    pub room_code: Option<String>,
    pub bed_code: Option<String>,
}

/// Order metadata: document identity, timing, and the people involved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderInfo {
    pub document_type: Option<String>,
    pub document_id: Option<String>,
    /// Document revision. Blank on the wire decodes to `None`.
    pub version: Option<u32>,
    pub parent_document_id: Option<String>,
    pub order_number: Option<String>,
    pub related_order: RelatedOrder,
    pub performed_at: DateTimeFields,
    pub created_at: DateTimeFields,
    pub exchange_ticket_number: Option<String>,
    pub inpatient_class: Option<String>,
    pub issuing_department_code: Option<String>,
    pub issuing_ward_code: Option<String>,
    pub slip_code: Option<String>,
    pub slip_name: Option<String>,
    pub doctor: DoctorInfo,
    pub proxy_user: ProxyUserInfo,
    pub narcotic_user_1: NarcoticUser,
    pub narcotic_user_2: NarcoticUser,
}

/// Reference to the order this one was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedOrder {
    pub created_on: Option<String>,
    pub number: Option<String>,
}

/// A date/time sub-record (YYYYMMDD / HHMMSS as sent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateTimeFields {
    pub date: Option<String>,
    pub time: Option<String>,
}

/// The requesting physician.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorInfo {
    pub user_id: Option<String>,
    pub kanji_name: Option<String>,
    pub kana_name: Option<String>,
}

/// The user who entered the order on the physician's behalf, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProxyUserInfo {
    pub user_id: Option<String>,
    pub kanji_name: Option<String>,
}

/// A licensed narcotic prescriber and the validity window of the licence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarcoticUser {
    pub licence_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// A physical measurement with the date it was taken.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub measured_on: Option<String>,
}

/// Patient body measurements plus the free-form profile entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientProfile {
    pub height: Measurement,
    pub weight: Measurement,
    pub body_surface_area: f64,
    pub profiles: Vec<ProfileEntry>,
}

/// One entry of the count-prefixed profile group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub code: Option<String>,
    pub name: Option<String>,
    pub data: Option<String>,
}

/// Chemotherapy regimen applied to the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegimenInfo {
    pub code: Option<String>,
    pub name: Option<String>,
    pub course_count: Option<String>,
    pub drip_order: Option<String>,
    pub start_date: Option<String>,
    pub body: BodyInfo,
}

/// Body measurements snapshotted when the regimen was applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyInfo {
    pub height: f64,
    pub weight: f64,
    pub body_surface_area: f64,
}

/// One ordered item (drug, diluent, or instruction line).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub attribute: Option<String>,
    pub code: Option<String>,
    pub linked_code: Option<String>,
    pub name: Option<String>,
    pub quantity: f64,
    pub unit_flag: Option<String>,
    pub unit_code: Option<String>,
    pub unit_name: Option<String>,
    pub max_dose_flag: Option<String>,
    pub row_date: Option<String>,
    pub row_time: Option<String>,
    pub codes: CodeGroup,
}

/// The ten standard identifier systems attached to each item.
///
/// JAN, HOT, YJ, and JLAC10 are the national Japanese code systems and keep
/// their proper names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeGroup {
    pub article_code: Option<String>,
    pub jan_code: Option<String>,
    pub mhlw_drug_code: Option<String>,
    pub hot_code: Option<String>,
    pub claim_code: Option<String>,
    pub jlac10_code: Option<String>,
    pub yj_code: Option<String>,
    pub logistics_code: Option<String>,
    pub order_management_number: Option<String>,
    pub billing_management_number: Option<String>,
}

/// The variable-length remainder of the telegram after the common header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBody {
    pub patient: PatientInfo,
    pub inpatient: InpatientInfo,
    pub order: OrderInfo,
    pub profile: PatientProfile,
    pub regimen: RegimenInfo,
    pub items: Vec<Item>,
}

/// One complete decoded telegram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Telegram {
    pub common: CommonHeader,
    pub content: ContentBody,
}

/// The scalar fields downstream systems index a telegram by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelegramSummary {
    pub document_id: Option<String>,
    pub version: Option<u32>,
    pub order_number: Option<String>,
    pub order_date: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
}

impl Telegram {
    /// Extract the lightweight summary record used for indexing and listings.
    pub fn summary(&self) -> TelegramSummary {
        let order = &self.content.order;
        TelegramSummary {
            document_id: order.document_id.clone(),
            version: order.version,
            order_number: order.order_number.clone(),
            order_date: order.created_at.date.clone(),
            patient_id: self.content.patient.id.clone(),
            patient_name: self.content.patient.kanji_name.clone(),
        }
    }
}
