use crate::domain::value::{AccountId, MessageText, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRequest {
    account_id: AccountId,
    phone_number: PhoneNumber,
    message: MessageText,
}

impl SmsRequest {
    pub fn new(account_id: AccountId, phone_number: PhoneNumber, message: MessageText) -> Self {
        Self {
            account_id,
            phone_number,
            message,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }
}
