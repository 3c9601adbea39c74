use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Progress state of an assignment as reported by the backend.
#[derive(
    EnumString, Display, AsRefStr, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    Completed,
    #[strum(to_string = "cancelled", serialize = "canceled")]
    Cancelled,
    #[strum(default, transparent)]
    Other(String),
}

impl Status {
    /// Unrecognized values are kept as `Other` instead of failing.
    pub fn parse_lossy(value: &str) -> Self {
        let value = value.trim();

        value
            .parse()
            .unwrap_or_else(|_| Status::Other(value.to_owned()))
    }

    /// Rank used to order a day's events: pending first, unrecognized last.
    pub fn priority(&self) -> u8 {
        match self {
            Status::Pending => 0,
            Status::Completed => 1,
            Status::Cancelled => 2,
            Status::Other(_) => 3,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Status::Cancelled)
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        match value {
            Status::Other(value) => value,
            status => status.as_ref().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(Status::parse_lossy("pending"), Status::Pending);
        assert_eq!(Status::parse_lossy("Completed"), Status::Completed);
        assert_eq!(Status::parse_lossy("cancelled"), Status::Cancelled);
        assert_eq!(Status::parse_lossy("canceled"), Status::Cancelled);
    }

    #[test]
    fn test_unknown_status_is_kept() {
        assert_eq!(
            Status::parse_lossy("rescheduled"),
            Status::Other("rescheduled".to_owned())
        );
        assert_eq!(Status::parse_lossy("rescheduled").to_string(), "rescheduled");
    }

    #[test]
    fn test_display_and_as_ref() {
        assert_eq!(Status::Pending.to_string(), "pending");
        assert_eq!(Status::parse_lossy("CANCELED").to_string(), "cancelled");
        assert_eq!(Status::Completed.as_ref(), "completed");
        assert_eq!(Status::Other("on_hold".to_owned()).as_ref(), "on_hold");
        assert_eq!(String::from(Status::Cancelled), "cancelled");
    }

    #[test]
    fn test_priority_order() {
        let mut statuses = vec![
            Status::Other("skipped".to_owned()),
            Status::Cancelled,
            Status::Completed,
            Status::Pending,
        ];
        statuses.sort_by_key(Status::priority);

        assert_eq!(
            statuses,
            vec![
                Status::Pending,
                Status::Completed,
                Status::Cancelled,
                Status::Other("skipped".to_owned()),
            ]
        );
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let json = serde_json::to_string(&Status::Completed).unwrap();
        assert_eq!(json, "\"completed\"");

        let status: Status = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, Status::Other("on_hold".to_owned()));
    }
}
