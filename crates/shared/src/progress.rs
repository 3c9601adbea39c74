use rehab_calendar::CalendarDay;
use serde::Serialize;

use crate::{Event, Status};

/// Counts for the days of the displayed month; padding days are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub sessions: usize,
    pub routine_starts: usize,
    pub pending: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub other: usize,
    pub active_days: usize,
}

impl MonthSummary {
    pub fn from_grid(days: &[CalendarDay<'_, Event>]) -> Self {
        let mut summary = Self::default();

        for day in days.iter().filter(|day| day.is_current_month) {
            if day.has_events() {
                summary.active_days += 1;
            }

            for event in &day.events {
                match event {
                    Event::Session(session) => {
                        summary.sessions += 1;

                        match session.status {
                            Status::Pending => summary.pending += 1,
                            Status::Completed => summary.completed += 1,
                            Status::Cancelled => summary.cancelled += 1,
                            Status::Other(_) => summary.other += 1,
                        }
                    }
                    Event::RoutineStart(_) => summary.routine_starts += 1,
                }
            }
        }

        summary
    }

    /// Completed sessions over the sessions that were not cancelled.
    pub fn completion_ratio(&self) -> Option<f64> {
        let planned = self.sessions - self.cancelled;

        if planned == 0 {
            return None;
        }

        Some(self.completed as f64 / planned as f64)
    }
}
