use time::Date;

use crate::{CalendarDay, CalendarError, CalendarEvent, YearMonth, build_month_grid};

/// The month a calendar view is showing, plus the date it treats as today.
///
/// Moves that would leave the supported date range keep the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: YearMonth,
    today: Date,
}

impl MonthCursor {
    pub fn new(today: Date) -> Result<Self, CalendarError> {
        Ok(Self {
            month: YearMonth::containing(today)?,
            today,
        })
    }

    pub fn at(month: YearMonth, today: Date) -> Self {
        Self { month, today }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn previous(&mut self) -> YearMonth {
        if let Some(month) = self.month.previous() {
            self.month = month;
        }

        self.month
    }

    pub fn next(&mut self) -> YearMonth {
        if let Some(month) = self.month.next() {
            self.month = month;
        }

        self.month
    }

    pub fn shift(&mut self, months: i32) -> YearMonth {
        if let Some(month) = self.month.shift(months) {
            self.month = month;
        }

        self.month
    }

    /// Jumps back to the month containing today.
    pub fn go_to_today(&mut self) -> YearMonth {
        if let Ok(month) = YearMonth::containing(self.today) {
            self.month = month;
        }

        self.month
    }

    pub fn build<'a, E: CalendarEvent>(&self, events: &'a [E]) -> Vec<CalendarDay<'a, E>> {
        build_month_grid(self.month, events, self.today)
    }
}
