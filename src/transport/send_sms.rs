use serde_json::Value;

use crate::domain::{AccountId, MessageText, PhoneNumber, SendAck, SmsRequest};
use crate::transport::DecodeError;

pub fn encode_send_sms_json(request: &SmsRequest) -> String {
    let mut body = serde_json::Map::new();
    body.insert(
        AccountId::FIELD.to_owned(),
        Value::String(request.account_id().as_str().to_owned()),
    );
    body.insert(
        PhoneNumber::FIELD.to_owned(),
        Value::String(request.phone_number().as_str().to_owned()),
    );
    body.insert(
        MessageText::FIELD.to_owned(),
        Value::String(request.message().as_str().to_owned()),
    );
    Value::Object(body).to_string()
}

pub fn decode_send_ack_json(json: &str) -> Result<SendAck, DecodeError> {
    let raw: Value = serde_json::from_str(json)?;
    Ok(SendAck { raw })
}
