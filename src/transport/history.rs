use serde::Deserialize;

use crate::domain::{EntryDate, HistoryEntry, SendStatus};
use crate::transport::DecodeError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEntryJson {
    sms_request: SmsRequestJson,
    date: String,
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SmsRequestJson {
    account_id: String,
    phone_number: String,
    message: String,
}

pub fn decode_history_json(json: &str) -> Result<Vec<HistoryEntry>, DecodeError> {
    let parsed: Vec<HistoryEntryJson> = serde_json::from_str(json)?;
    Ok(parsed
        .into_iter()
        .map(|entry| HistoryEntry {
            account_id: entry.sms_request.account_id,
            phone_number: entry.sms_request.phone_number,
            message: entry.sms_request.message,
            date: EntryDate::new(entry.date),
            status: SendStatus::new(entry.status),
        })
        .collect())
}
