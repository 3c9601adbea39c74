use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::{EventError, Result};

/// Reads the calendar day out of a backend date value.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DD HH:MM`
/// timestamps with optional seconds and fraction. For timestamps the date is
/// taken as written: no offset is applied, so `2024-03-15T23:30:00-05:00`
/// lands on March 15.
pub fn parse_calendar_date(value: &str) -> Result<Date> {
    let value = value.trim();

    if let Ok(date) = Date::parse(value, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }

    if let Ok(datetime) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(datetime.date());
    }

    for format in [
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
        ),
    ] {
        if let Ok(datetime) = PrimitiveDateTime::parse(value, format) {
            return Ok(datetime.date());
        }
    }

    Err(EventError::InvalidDate(value.to_owned()))
}
