use std::collections::BTreeMap;

use crate::client::ApiError;
use crate::domain::{AccountId, MessageText, PhoneNumber, SendAck, SmsRequest, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The three editable fields of the send form.
pub enum FormField {
    AccountId,
    PhoneNumber,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [
        FormField::AccountId,
        FormField::PhoneNumber,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AccountId => "Account ID",
            Self::PhoneNumber => "Phone Number",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One-shot user-facing notification raised when a submission settles.
pub enum Notice {
    Sent,
    SendFailed(String),
}

#[derive(Debug, Clone, Default)]
/// Send-form state machine.
///
/// The form is always either editing or submitting. Validation runs before
/// the transition to submitting: a draft that fails client-side rules never
/// produces a request object, so nothing invalid can reach the network layer.
/// A failed submission keeps the draft intact for retry; a successful one
/// resets every field to empty.
pub struct SendForm {
    account_id: String,
    phone_number: String,
    message: String,
    submitting: bool,
    field_errors: BTreeMap<FormField, ValidationError>,
    notice: Option<Notice>,
}

impl SendForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft value of one field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::AccountId => &self.account_id,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field of the draft. Ignored while a submission is in
    /// flight; clears any inline error previously recorded for that field.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.submitting {
            return;
        }
        let value = value.into();
        match field {
            FormField::AccountId => self.account_id = value,
            FormField::PhoneNumber => self.phone_number = value,
            FormField::Message => self.message = value,
        }
        self.field_errors.remove(&field);
    }

    /// Validate the draft and, if it passes, transition to submitting.
    ///
    /// Returns the validated request for the caller to hand to
    /// [`ApiClient::send_sms`](crate::client::ApiClient::send_sms), then
    /// settle with [`SendForm::resolve`]. Returns `None` while already
    /// submitting (the submit control must be disabled in that state) or
    /// when validation fails, in which case per-field errors are available
    /// from [`SendForm::field_error`].
    pub fn submit(&mut self) -> Option<SmsRequest> {
        if self.submitting {
            return None;
        }
        self.notice = None;
        self.field_errors.clear();

        let mut errors = BTreeMap::new();
        let account_id = AccountId::new(self.account_id.clone())
            .map_err(|err| errors.insert(FormField::AccountId, err))
            .ok();
        let phone_number = PhoneNumber::new(self.phone_number.clone())
            .map_err(|err| errors.insert(FormField::PhoneNumber, err))
            .ok();
        let message = MessageText::new(self.message.clone())
            .map_err(|err| errors.insert(FormField::Message, err))
            .ok();

        match (account_id, phone_number, message) {
            (Some(account_id), Some(phone_number), Some(message)) => {
                self.submitting = true;
                Some(SmsRequest::new(account_id, phone_number, message))
            }
            _ => {
                self.field_errors = errors;
                None
            }
        }
    }

    /// Settle the in-flight submission and return to editing.
    ///
    /// Success clears all fields and raises [`Notice::Sent`]; failure keeps
    /// the draft (no data loss) and raises [`Notice::SendFailed`].
    pub fn resolve(&mut self, outcome: Result<SendAck, ApiError>) {
        if !self.submitting {
            return;
        }
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.account_id.clear();
                self.phone_number.clear();
                self.message.clear();
                self.notice = Some(Notice::Sent);
            }
            Err(err) => {
                tracing::warn!(error = %err, "sms submission failed");
                self.notice = Some(Notice::SendFailed(err.to_string()));
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inline validation message for one field, if the last submit rejected it.
    pub fn field_error(&self, field: FormField) -> Option<&ValidationError> {
        self.field_errors.get(&field)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notification, leaving none behind.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}
