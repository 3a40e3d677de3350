//! Transport layer: wire-format details (serialization/deserialization).

mod history;
mod send_sms;

pub use history::decode_history_json;
pub use send_sms::{decode_send_ack_json, encode_send_sms_json};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}
