use std::{cmp::Ordering, slice::Chunks};

use serde::Serialize;
use time::{Date, Duration};

use crate::YearMonth;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_DAYS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// Column headers for the grid, in display order.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Anything that can be placed on the month grid.
pub trait CalendarEvent {
    /// Day the event is bucketed under. `None` keeps it off the grid.
    fn scheduled_date(&self) -> Option<Date>;

    /// Order between two events of the same day.
    fn cmp_within_day(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay<'a, E> {
    pub date: Date,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<&'a E>,
}

impl<E> CalendarDay<'_, E> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Builds the 6 x 7 grid for `month` and places each event on its day.
pub fn build_month_grid<E: CalendarEvent>(
    month: YearMonth,
    events: &[E],
    today: Date,
) -> Vec<CalendarDay<'_, E>> {
    build_month_grid_by(month, events, today, E::scheduled_date, E::cmp_within_day)
}

/// Same as [`build_month_grid`] with the date extraction and the intra-day
/// ordering supplied by the caller. Days are sorted with a stable sort.
pub fn build_month_grid_by<'a, E, D, O>(
    month: YearMonth,
    events: &'a [E],
    today: Date,
    date_of: D,
    order: O,
) -> Vec<CalendarDay<'a, E>>
where
    D: Fn(&E) -> Option<Date>,
    O: Fn(&E, &E) -> Ordering,
{
    let (start, end) = month.grid_window();

    let mut days = (0..GRID_DAYS)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);

            CalendarDay {
                date,
                is_current_month: month.contains(date),
                is_today: date == today,
                events: Vec::new(),
            }
        })
        .collect::<Vec<_>>();

    let mut undated = 0usize;

    for event in events {
        let Some(date) = date_of(event) else {
            undated += 1;
            continue;
        };

        if date < start || date > end {
            continue;
        }

        let index = (date - start).whole_days() as usize;
        days[index].events.push(event);
    }

    for day in days.iter_mut().filter(|day| day.events.len() > 1) {
        day.events.sort_by(|a, b| order(*a, *b));
    }

    if undated > 0 {
        tracing::debug!(month = %month, undated, "Skipped events without a usable date");
    }

    days
}

/// The grid split into its 6 display rows.
pub fn weeks<'g, 'a, E>(days: &'g [CalendarDay<'a, E>]) -> Chunks<'g, CalendarDay<'a, E>> {
    days.chunks(DAYS_PER_WEEK)
}
