use std::cmp::Ordering;

use rehab_calendar::CalendarEvent;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Status;

/// One scheduled occurrence of a routine or therapy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub scheduled_date: Date,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapy_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The first day of a routine assigned inside a time-bounded package.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutineStart {
    pub id: String,
    pub name: String,
    pub start_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl RoutineStart {
    /// Length of the routine in days, both ends included.
    pub fn duration_days(&self) -> Option<i64> {
        self.end_date
            .map(|end| (end - self.start_date).whole_days() + 1)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Event {
    Session(Session),
    RoutineStart(RoutineStart),
}

impl Event {
    pub const SESSION: &'static str = "session";
    pub const ROUTINE_START: &'static str = "routine-start";

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Session(_) => Self::SESSION,
            Event::RoutineStart(_) => Self::ROUTINE_START,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Event::Session(session) => &session.id,
            Event::RoutineStart(routine) => &routine.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Event::Session(session) => &session.name,
            Event::RoutineStart(routine) => &routine.name,
        }
    }

    /// Routines are placed on their start date only, never across their range.
    pub fn date(&self) -> Date {
        match self {
            Event::Session(session) => session.scheduled_date,
            Event::RoutineStart(routine) => routine.start_date,
        }
    }

    pub fn status(&self) -> Option<&Status> {
        match self {
            Event::Session(session) => Some(&session.status),
            Event::RoutineStart(routine) => routine.status.as_ref(),
        }
    }

    /// Status priority, then name. Events without a status sort with the
    /// unrecognized ones.
    pub fn day_order(&self, other: &Self) -> Ordering {
        let priority = |event: &Self| event.status().map_or(3, Status::priority);

        priority(self)
            .cmp(&priority(other))
            .then_with(|| self.name().cmp(other.name()))
    }
}

impl CalendarEvent for Event {
    fn scheduled_date(&self) -> Option<Date> {
        Some(self.date())
    }

    fn cmp_within_day(&self, other: &Self) -> Ordering {
        self.day_order(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn session(name: &str, status: Status) -> Event {
        Event::Session(Session {
            id: name.to_lowercase(),
            name: name.to_owned(),
            scheduled_date: date!(2024 - 04 - 12),
            status,
            routine_id: None,
            therapy_id: None,
            duration_minutes: None,
            notes: None,
        })
    }

    #[test]
    fn test_day_order() {
        let b = session("B", Status::Completed);
        let a = session("A", Status::Pending);

        assert_eq!(a.day_order(&b), Ordering::Less);
        assert_eq!(b.day_order(&a), Ordering::Greater);
    }

    #[test]
    fn test_routine_without_status_sorts_last() {
        let routine = Event::RoutineStart(RoutineStart {
            id: "r1".to_owned(),
            name: "A".to_owned(),
            start_date: date!(2024 - 04 - 12),
            end_date: None,
            package_id: None,
            status: None,
        });
        let cancelled = session("Z", Status::Cancelled);

        assert_eq!(cancelled.day_order(&routine), Ordering::Less);
    }

    #[test]
    fn test_serde_tagged_by_kind() {
        let json = r#"{
            "kind": "routine-start",
            "id": "r1",
            "name": "Knee program",
            "start_date": "2024-04-01",
            "end_date": "2024-04-28"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.kind(), Event::ROUTINE_START);
        assert_eq!(event.date(), date!(2024 - 04 - 01));
        assert!(event.status().is_none());

        let Event::RoutineStart(routine) = &event else {
            panic!("expected a routine start");
        };
        assert_eq!(routine.duration_days(), Some(28));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["kind"], "routine-start");
        assert_eq!(value["start_date"], "2024-04-01");
    }
}
