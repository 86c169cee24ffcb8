//! Scan history entries

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StationState;

#[derive(Debug, Default, Deserialize)]
struct RawScanHistory {
    #[serde(default)]
    timestamp: Option<i64>,
    #[serde(default)]
    scan_count: Option<u64>,
    #[serde(default)]
    station_id: Option<String>,
}

/// One scanner pass recorded under `scan_history/{truck_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanHistoryEntry {
    pub entry_id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Scan count after this pass
    pub scan_count: u64,
    pub station_id: String,
}

impl ScanHistoryEntry {
    /// Parse an entry body. Entries without a timestamp or scan count cannot
    /// be placed in the timeline and yield `None`.
    pub fn from_value(entry_id: &str, value: &Value) -> Option<Self> {
        let raw: RawScanHistory = serde_json::from_value(value.clone()).ok()?;
        Some(Self {
            entry_id: entry_id.to_string(),
            timestamp: raw.timestamp?,
            scan_count: raw.scan_count?,
            station_id: raw.station_id.unwrap_or_default(),
        })
    }

    pub fn state(&self) -> StationState {
        StationState::from_scan_count(self.scan_count)
    }
}
