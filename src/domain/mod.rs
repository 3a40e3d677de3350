//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SmsRequest;
pub use response::{HistoryEntry, SendAck};
pub use validation::ValidationError;
pub use value::{AccountId, EntryDate, KnownSendStatus, MessageText, PhoneNumber, SendStatus};
