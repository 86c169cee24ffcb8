//! Truck movement history

use chrono::{DateTime, TimeZone};

use dispatch_types::{collections, Result};

use crate::model::ScanHistoryEntry;
use crate::repository::StatusStore;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Scan history of one truck, oldest first
///
/// A truck without history yields an empty list.
pub fn read_scan_history<S: StatusStore + ?Sized>(
    store: &S,
    truck_id: &str,
) -> Result<Vec<ScanHistoryEntry>> {
    let Some(value) = store.get_child(collections::SCAN_HISTORY, truck_id)? else {
        return Ok(Vec::new());
    };
    let Some(entries) = value.as_object() else {
        log::warn!("Scan history for truck {} is not a collection", truck_id);
        return Ok(Vec::new());
    };

    let mut history: Vec<ScanHistoryEntry> = entries
        .iter()
        .filter_map(|(entry_id, body)| {
            let entry = ScanHistoryEntry::from_value(entry_id, body);
            if entry.is_none() {
                log::warn!(
                    "Skipping incomplete history entry {} for truck {}",
                    entry_id,
                    truck_id
                );
            }
            entry
        })
        .collect();
    history.sort_by_key(|e| e.timestamp);
    Ok(history)
}

/// `"{time}: {Entered Station | Left Station} at {station}"` in `tz`
pub fn format_history_line<Tz>(entry: &ScanHistoryEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let time = match DateTime::from_timestamp_millis(entry.timestamp) {
        Some(utc) => utc.with_timezone(tz).format(TIME_FORMAT).to_string(),
        None => format!("@{}ms", entry.timestamp),
    };
    format!(
        "{}: {} at {}",
        time,
        entry.state().movement_label(),
        entry.station_id
    )
}

pub fn format_history<Tz>(entries: &[ScanHistoryEntry], tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    entries.iter().map(|e| format_history_line(e, tz)).collect()
}
