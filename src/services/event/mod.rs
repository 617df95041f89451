// Event loading
// Reads event exports from the CRM data layer into `CalendarEvent`s

use std::fs;
use std::path::Path;

use chrono::TimeZone;
use serde_json::Value;

use crate::error::{LayoutError, LayoutResult};
use crate::models::event::{CalendarEvent, EventRecord};

/// Parse a JSON array of event records.
///
/// Only a malformed document is an error. Individual records that cannot
/// be read are logged and skipped so one bad row never hides the rest of
/// the calendar.
pub fn parse_events<Tz: TimeZone>(json: &str, tz: &Tz) -> LayoutResult<Vec<CalendarEvent>> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let total = rows.len();

    let events: Vec<CalendarEvent> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let record: EventRecord = match serde_json::from_value(row) {
                Ok(record) => record,
                Err(e) => {
                    log::warn!("Skipping event record #{}: {}", index, e);
                    return None;
                }
            };
            match record.into_event(tz) {
                Ok(event) => Some(event),
                Err(e) => {
                    log::warn!("Skipping event record #{}: {}", index, e);
                    None
                }
            }
        })
        .collect();

    if events.len() < total {
        log::warn!("Loaded {} of {} event records", events.len(), total);
    } else {
        log::debug!("Loaded {} event records", total);
    }

    Ok(events)
}

pub fn load_events<Tz: TimeZone>(path: &Path, tz: &Tz) -> LayoutResult<Vec<CalendarEvent>> {
    let json = fs::read_to_string(path).map_err(|source| LayoutError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_events(&json, tz)
}
