//! # injord-reader
//!
//! A reader for fixed-width hospital injection-order interface telegrams
//! ("II" messages): a 64-byte routing header followed by a variable-length
//! content body with nested fixed sub-records and count-prefixed repeating
//! groups, encoded in a legacy fixed-width text encoding (Shift_JIS/cp932
//! by default, overridable).
//!
//! Decode-only: telegrams are parsed into an immutable typed tree in a
//! single pass, with strict header validation and fail-fast truncation
//! handling. Constructing telegrams is out of scope.

pub mod telegram;

// Re-export the main types for convenience
pub use telegram::{
    types::models::{
        BodyInfo, CodeGroup, CommonHeader, ContentBody, DateTimeFields, DoctorInfo, InpatientInfo,
        Item, Measurement, NarcoticUser, OrderInfo, PatientInfo, PatientProfile, ProcessingStamp,
        ProfileEntry, ProxyUserInfo, RegimenInfo, RelatedOrder, Telegram, TelegramSummary,
    },
    Result, TelegramError, TelegramReader,
};
