//! Client-side core for a small SMS dispatch console.
//!
//! The crate talks to a backend over two endpoints (`POST /api/sms/send`,
//! `GET /api/history`) and models the console's two screens as explicit
//! state values: a send form with client-side validation and a history
//! table with multi-column sorting and filtering. Rendering is left to the
//! host; every screen here is a plain struct the host reads and drives.
//!
//! ```rust,no_run
//! use smsdesk::{ApiClient, FormField, SendForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsdesk::ApiError> {
//!     let client = ApiClient::new("http://localhost:8000")?;
//!
//!     let mut form = SendForm::new();
//!     form.update_field(FormField::AccountId, "acct-1");
//!     form.update_field(FormField::PhoneNumber, "5551234567");
//!     form.update_field(FormField::Message, "hello");
//!     if let Some(request) = form.submit() {
//!         let outcome = client.send_sms(&request).await;
//!         form.resolve(outcome);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;
pub mod view;

pub use client::{ApiClient, ApiClientBuilder, ApiError};
pub use domain::{
    AccountId, EntryDate, HistoryEntry, KnownSendStatus, MessageText, PhoneNumber, SendAck,
    SendStatus, SmsRequest, ValidationError,
};
pub use view::{
    Column, FetchSeq, FilterSpec, FormField, HistoryView, Notice, Screen, SendForm, Shell,
    SortKey, SortSpec, StatusIndicator, apply_filters, apply_sort, poll_once,
};
