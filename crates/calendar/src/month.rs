use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::{CalendarError, GRID_DAYS};

/// A displayed calendar month.
///
/// Construction checks that the whole 42-day grid window around the month is
/// representable, so every date derived from a `YearMonth` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct YearMonth {
    first: Date,
}

impl YearMonth {
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        let month = Month::try_from(month).map_err(|_| CalendarError::InvalidMonth(month))?;

        Self::from_parts(year, month)
    }

    pub fn from_parts(year: i32, month: Month) -> Result<Self, CalendarError> {
        let out_of_range = || CalendarError::OutOfRange {
            year,
            month: month.into(),
        };

        let first = Date::from_calendar_date(year, month, 1).map_err(|_| out_of_range())?;
        let leading = i64::from(first.weekday().number_days_from_sunday());

        let start = first
            .checked_sub(Duration::days(leading))
            .ok_or_else(out_of_range)?;
        start
            .checked_add(Duration::days(GRID_DAYS as i64 - 1))
            .ok_or_else(out_of_range)?;

        Ok(Self { first })
    }

    /// The month `date` falls in.
    pub fn containing(date: Date) -> Result<Self, CalendarError> {
        Self::from_parts(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        self.first.month()
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    pub fn last_day(&self) -> Date {
        self.first + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    pub fn days_in_month(&self) -> u8 {
        (28..=31)
            .rev()
            .find(|day| self.first.replace_day(*day).is_ok())
            .unwrap_or(28)
    }

    /// Number of days shown before the 1st, with weeks starting on Sunday.
    pub fn leading_days(&self) -> u8 {
        self.first.weekday().number_days_from_sunday()
    }

    /// First and last date of the 42-day grid built for this month.
    pub fn grid_window(&self) -> (Date, Date) {
        let start = self.first - Duration::days(i64::from(self.leading_days()));

        (start, start + Duration::days(GRID_DAYS as i64 - 1))
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Returns `None` when the previous month is outside the supported range.
    pub fn previous(&self) -> Option<Self> {
        self.first
            .previous_day()
            .and_then(|date| Self::containing(date).ok())
    }

    /// Returns `None` when the next month is outside the supported range.
    pub fn next(&self) -> Option<Self> {
        self.last_day()
            .next_day()
            .and_then(|date| Self::containing(date).ok())
    }

    /// Moves by `months` (negative goes back in time).
    pub fn shift(&self, months: i32) -> Option<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(u8::from(self.month())) - 1
            + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;

        Self::new(year, month).ok()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidFormat(value.to_owned());
        let (year, month) = value.trim().rsplit_once('-').ok_or_else(invalid)?;

        if month.len() != 2 {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        format!("{:04}-{:02}", value.year(), u8::from(value.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_last_day() {
        let month = YearMonth::new(2024, 2).unwrap();

        assert_eq!(month.first_day(), date!(2024 - 02 - 01));
        assert_eq!(month.last_day(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_leading_days_starts_on_sunday() {
        // September 2024 starts on a Sunday, April 2024 on a Monday
        assert_eq!(YearMonth::new(2024, 9).unwrap().leading_days(), 0);
        assert_eq!(YearMonth::new(2024, 4).unwrap().leading_days(), 1);
        // June 2024 starts on a Saturday
        assert_eq!(YearMonth::new(2024, 6).unwrap().leading_days(), 6);
    }

    #[test]
    fn test_grid_window() {
        let (start, end) = YearMonth::new(2024, 4).unwrap().grid_window();

        assert_eq!(start, date!(2024 - 03 - 31));
        assert_eq!(end, date!(2024 - 05 - 11));
    }

    #[test]
    fn test_previous_and_next_wrap_years() {
        let january = YearMonth::new(2024, 1).unwrap();
        let december = YearMonth::new(2023, 12).unwrap();

        assert_eq!(january.previous(), Some(december));
        assert_eq!(december.next(), Some(january));
    }

    #[test]
    fn test_shift() {
        let month = YearMonth::new(2024, 3).unwrap();

        assert_eq!(month.shift(0), Some(month));
        assert_eq!(month.shift(10), YearMonth::new(2025, 1).ok());
        assert_eq!(month.shift(-3), YearMonth::new(2023, 12).ok());
        assert_eq!(month.shift(-27), YearMonth::new(2021, 12).ok());
    }

    #[test]
    fn test_navigation_stops_at_range_limits() {
        let last = YearMonth::new(9999, 11).unwrap();

        assert!(YearMonth::new(9999, 12).is_err());
        assert_eq!(last.next(), None);
        assert_eq!(last.shift(1), None);
    }

    #[test]
    fn test_parse() {
        let month: YearMonth = "2024-03".parse().unwrap();

        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), Month::March);
        assert_eq!(String::from(month), "2024-03");
        assert_eq!(month.to_string(), "March 2024");
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert_eq!(
            "2024-13".parse::<YearMonth>(),
            Err(CalendarError::InvalidMonth(13))
        );
        assert!(matches!(
            "2024-3".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "March".parse::<YearMonth>(),
            Err(CalendarError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_contains() {
        let month = YearMonth::new(2024, 3).unwrap();

        assert!(month.contains(date!(2024 - 03 - 31)));
        assert!(!month.contains(date!(2024 - 04 - 01)));
        assert!(!month.contains(date!(2023 - 03 - 15)));
    }
}
