use std::{fs, path::Path};

use anyhow::{Context, Result};
use rehab_shared::{Event, RawEvent};

/// Parses a JSON array of assignment records.
///
/// Records that are not valid events are logged and skipped. Only a payload
/// that is not a JSON array at all is an error.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(json).context("Assignment feed must be a JSON array")?;
    let total = values.len();

    let records = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawEvent>(value) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, err = %err, "Skipping unreadable feed record");
                None
            }
        })
        .collect::<Vec<_>>();

    let events = Event::from_raw_lossy(records);

    tracing::info!(
        total,
        loaded = events.len(),
        skipped = total - events.len(),
        "Assignment feed loaded"
    );

    Ok(events)
}

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read assignment feed {}", path.display()))?;

    parse_events(&json).with_context(|| format!("Invalid assignment feed {}", path.display()))
}
