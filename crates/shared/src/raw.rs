use std::cmp::Ordering;

use rehab_calendar::CalendarEvent;
use serde::{Deserialize, Deserializer, de::IgnoredAny};
use time::Date;

use crate::{Event, EventError, Result, RoutineStart, Session, Status, parse_calendar_date};

/// Ids arrive as text or as numeric primary keys depending on the table.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(value: RawId) -> Self {
        match value {
            RawId::Text(value) => value,
            RawId::Number(value) => value.to_string(),
        }
    }
}

/// An assignment record exactly as the backend returns it: every field but
/// `kind` may be absent and dates are unparsed strings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEvent {
    pub kind: String,
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "scheduled_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub routine_id: Option<RawId>,
    #[serde(default)]
    pub therapy_id: Option<RawId>,
    #[serde(default)]
    pub package_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub duration_minutes: Option<u16>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Any JSON shape a numeric extra may arrive in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Durations are display-only, so an unreadable value becomes `None` instead
/// of rejecting the whole record.
fn lenient_minutes<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<LooseNumber>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let minutes = match &value {
        LooseNumber::Integer(minutes) => u16::try_from(*minutes).ok(),
        LooseNumber::Float(minutes)
            if minutes.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(minutes) =>
        {
            Some(*minutes as u16)
        }
        LooseNumber::Text(minutes) => minutes.trim().parse().ok(),
        _ => None,
    };

    if minutes.is_none() {
        tracing::warn!(value = ?value, "Ignoring unreadable duration_minutes");
    }

    Ok(minutes)
}

impl RawEvent {
    /// The date value the event is bucketed under, before parsing.
    fn date_field(&self) -> Option<&str> {
        match self.kind.as_str() {
            Event::SESSION => self.date.as_deref(),
            Event::ROUTINE_START => self.start_date.as_deref(),
            _ => None,
        }
    }
}

fn required<T>(value: Option<T>, kind: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(EventError::MissingField { kind, field })
}

impl TryFrom<RawEvent> for Event {
    type Error = EventError;

    fn try_from(raw: RawEvent) -> Result<Self> {
        match raw.kind.as_str() {
            Event::SESSION => {
                let kind = Event::SESSION;
                let date = required(raw.date, kind, "date")?;

                Ok(Event::Session(Session {
                    id: required(raw.id, kind, "id")?.into(),
                    name: required(raw.name, kind, "name")?,
                    scheduled_date: parse_calendar_date(&date)?,
                    status: raw.status.map(Status::from).unwrap_or_default(),
                    routine_id: raw.routine_id.map(String::from),
                    therapy_id: raw.therapy_id.map(String::from),
                    duration_minutes: raw.duration_minutes,
                    notes: raw.notes,
                }))
            }
            Event::ROUTINE_START => {
                let kind = Event::ROUTINE_START;
                let start_date = required(raw.start_date, kind, "start_date")?;
                let end_date = raw
                    .end_date
                    .as_deref()
                    .map(parse_calendar_date)
                    .transpose()?;

                Ok(Event::RoutineStart(RoutineStart {
                    id: required(raw.id, kind, "id")?.into(),
                    name: required(raw.name, kind, "name")?,
                    start_date: parse_calendar_date(&start_date)?,
                    end_date,
                    package_id: raw.package_id.map(String::from),
                    status: raw.status.map(Status::from),
                }))
            }
            _ => Err(EventError::UnknownKind(raw.kind)),
        }
    }
}

impl Event {
    /// Converts a backend feed, skipping records that fail to convert so one
    /// bad row never hides the rest of the calendar.
    pub fn from_raw_lossy(records: impl IntoIterator<Item = RawEvent>) -> Vec<Event> {
        records
            .into_iter()
            .filter_map(|raw| {
                let id = raw.id.clone().map(String::from);

                match Event::try_from(raw) {
                    Ok(event) => Some(event),
                    Err(err) => {
                        tracing::warn!(id = ?id, err = %err, "Skipping malformed event");

                        None
                    }
                }
            })
            .collect()
    }
}

/// Lets a feed be placed on the grid without converting it first; records
/// whose date does not parse are left off.
impl CalendarEvent for RawEvent {
    fn scheduled_date(&self) -> Option<Date> {
        self.date_field()
            .and_then(|value| parse_calendar_date(value).ok())
    }

    fn cmp_within_day(&self, other: &Self) -> Ordering {
        let priority = |raw: &Self| {
            raw.status
                .as_deref()
                .map_or(3, |status| Status::parse_lossy(status).priority())
        };

        priority(self)
            .cmp(&priority(other))
            .then_with(|| self.name.cmp(&other.name))
    }
}
