use crate::domain::{KnownSendStatus, SendStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual indicator for the status column.
///
/// The contract defines exactly two states; anything else the backend sends
/// falls back to `Unknown` at display time instead of failing the row.
pub enum StatusIndicator {
    Success,
    Rejected,
    Unknown,
}

impl StatusIndicator {
    pub fn for_status(status: &SendStatus) -> Self {
        match status.known() {
            Some(KnownSendStatus::Success) => Self::Success,
            Some(KnownSendStatus::Rejected) => Self::Rejected,
            None => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
            Self::Unknown => "unknown",
        }
    }
}

impl From<&SendStatus> for StatusIndicator {
    fn from(status: &SendStatus) -> Self {
        Self::for_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_map_to_their_indicator() {
        assert_eq!(
            StatusIndicator::for_status(&SendStatus::new("success")),
            StatusIndicator::Success
        );
        assert_eq!(
            StatusIndicator::for_status(&SendStatus::new("rejected")),
            StatusIndicator::Rejected
        );
    }

    #[test]
    fn contract_violations_render_as_unknown() {
        let odd = SendStatus::new("SUCCESS");
        assert_eq!(StatusIndicator::for_status(&odd), StatusIndicator::Unknown);
        assert_eq!(StatusIndicator::from(&odd).label(), "unknown");
    }
}
