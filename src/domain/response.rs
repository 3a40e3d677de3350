use crate::domain::value::{EntryDate, SendStatus};

/// One recorded send attempt as reported by `GET /api/history`.
///
/// The request fields are kept as raw strings: history is read-only display
/// data produced entirely by the backend, so client-side form rules do not
/// apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub account_id: String,
    pub phone_number: String,
    pub message: String,
    pub date: EntryDate,
    pub status: SendStatus,
}

/// Backend acknowledgement for `POST /api/sms/send`.
///
/// The payload is decoded but not interpreted; send success is keyed off the
/// call resolving, not off any field in here.
#[derive(Debug, Clone, PartialEq)]
pub struct SendAck {
    pub raw: serde_json::Value,
}
