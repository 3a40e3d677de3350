use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Account/provider identifier entered in the send form (`accountId`).
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// JSON field name used by the backend (`accountId`).
    pub const FIELD: &'static str = "accountId";

    /// Create a validated [`AccountId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number (`phoneNumber`).
///
/// Invariant: exactly 10 ASCII digits after trimming. The backend contract is
/// a fixed 10-digit local number, so no E.164 normalization is applied.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// JSON field name used by the backend (`phoneNumber`).
    pub const FIELD: &'static str = "phoneNumber";

    /// Number of digits a valid phone number carries.
    pub const DIGITS: usize = 10;

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != Self::DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the backend (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
/// Timestamp of a history entry as reported by the backend (`date`).
///
/// The raw string is preserved as-is; an optional parsed UTC instant is kept
/// alongside it. An unparseable date is a display concern, never an error:
/// it renders raw and orders after every parseable date.
pub struct EntryDate {
    raw: String,
    parsed: Option<DateTime<Utc>>,
}

impl EntryDate {
    /// JSON field name used by the backend (`date`).
    pub const FIELD: &'static str = "date";

    /// Wrap a backend-supplied timestamp string, parsing it when possible.
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        let parsed = parse_instant(raw.trim());
        Self { raw, parsed }
    }

    /// Raw value exactly as the backend sent it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed UTC instant, if the raw value was understood.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.parsed
    }

    /// ISO 8601 rendering with millisecond precision, if parseable.
    pub fn iso8601(&self) -> Option<String> {
        self.parsed
            .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Normalized display string: ISO 8601 when parseable, raw otherwise.
    pub fn display(&self) -> String {
        self.iso8601().unwrap_or_else(|| self.raw.clone())
    }
}

impl PartialEq for EntryDate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for EntryDate {}

impl std::hash::Hash for EntryDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl std::cmp::PartialOrd for EntryDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for EntryDate {
    /// Chronological order; unparseable dates sort after parseable ones,
    /// in raw lexicographic order among themselves.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        match (self.parsed, other.parsed) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Outcome of a recorded send attempt (`status`).
///
/// This value is preserved as-is even when the backend reports something
/// outside the documented `success`/`rejected` pair.
pub struct SendStatus(String);

impl SendStatus {
    /// JSON field name used by the backend (`status`).
    pub const FIELD: &'static str = "status";

    /// Wrap a backend-supplied status value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw value exactly as the backend sent it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this value to a known status variant, if one exists.
    pub fn known(&self) -> Option<KnownSendStatus> {
        KnownSendStatus::from_value(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Known send statuses documented by the backend contract.
///
/// Unknown values are preserved as [`SendStatus`] and return `None` from
/// [`KnownSendStatus::from_value`].
pub enum KnownSendStatus {
    Success,
    Rejected,
}

impl KnownSendStatus {
    /// Convert a raw backend status value into a known variant.
    pub fn from_value(value: &str) -> Option<Self> {
        Some(match value {
            "success" => Self::Success,
            "rejected" => Self::Rejected,
            _ => return None,
        })
    }

    /// The wire spelling of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
        }
    }
}
