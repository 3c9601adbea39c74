use anyhow::{Context, Result};
use rehab_calendar::MonthCursor;
use rehab_shared::{Event, MonthSummary};
use time::{Date, OffsetDateTime};

use crate::{
    config::Config,
    render::{self, Format},
};

use super::MonthArgs;

fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn cursor(args: &MonthArgs) -> Result<MonthCursor> {
    let today = args.today.unwrap_or_else(local_today);

    let mut cursor = match args.month {
        Some(month) => MonthCursor::at(month, today),
        None => MonthCursor::new(today).context("Today is outside the supported calendar range")?,
    };

    let from = cursor.month();
    let to = cursor.shift(args.offset);

    if args.offset != 0 && from == to {
        tracing::warn!(month = %from, offset = args.offset, "Offset leaves the supported range, staying on month");
    }

    Ok(cursor)
}

fn events(config: &Config, args: &MonthArgs) -> Result<Vec<Event>> {
    let path = args
        .events
        .clone()
        .or_else(|| config.calendar.events_path.as_ref().map(Into::into));

    match path {
        Some(path) => crate::feed::load_events(path),
        None => {
            tracing::warn!("No assignment feed configured, showing an empty calendar");
            Ok(Vec::new())
        }
    }
}

#[tracing::instrument(skip_all, fields(month = ?args.month, offset = args.offset))]
pub fn show(config: &Config, args: MonthArgs) -> Result<()> {
    let cursor = cursor(&args)?;
    let events = events(config, &args)?;
    let grid = cursor.build(&events);
    let format = args.format.unwrap_or(config.calendar.format);

    tracing::debug!(month = %cursor.month(), events = events.len(), "Month grid built");

    let output = match format {
        Format::Text => render::text(cursor.month(), &grid),
        Format::Json => render::json(cursor.month(), &grid)?,
    };

    println!("{output}");

    Ok(())
}

#[tracing::instrument(skip_all, fields(month = ?args.month, offset = args.offset))]
pub fn summary(config: &Config, args: MonthArgs) -> Result<()> {
    let cursor = cursor(&args)?;
    let events = events(config, &args)?;
    let grid = cursor.build(&events);
    let summary = MonthSummary::from_grid(&grid);

    let output = match args.format.unwrap_or(config.calendar.format) {
        Format::Text => render::summary_text(cursor.month(), &summary),
        Format::Json => serde_json::to_string_pretty(&summary)?,
    };

    println!("{output}");

    Ok(())
}
