use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u8),

    #[error("Invalid year-month `{0}` (expected YYYY-MM)")]
    InvalidFormat(String),

    #[error("Year-month {year}-{month:02} is outside the supported date range")]
    OutOfRange { year: i32, month: u8 },
}
