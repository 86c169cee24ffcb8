//! Truck status records and the views derived from them

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GeoPoint;

/// Whether a truck is at its home station
///
/// The store has no status flag. Every scanner pass increments the scan
/// count, so parity is the state: even means in station, odd means out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationState {
    InStation,
    OutOfStation,
}

impl StationState {
    pub fn from_scan_count(scan_count: u64) -> Self {
        if scan_count % 2 == 0 {
            StationState::InStation
        } else {
            StationState::OutOfStation
        }
    }

    pub fn is_available(self) -> bool {
        self == StationState::InStation
    }

    /// Movement label for the scan that produced this state
    pub fn movement_label(self) -> &'static str {
        match self {
            StationState::InStation => "Entered Station",
            StationState::OutOfStation => "Left Station",
        }
    }
}

/// Current status of one truck in `truck_status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckStatusRecord {
    pub truck_id: String,
    /// Number of scanner passes. A record without one has never been
    /// scanned and is read as 0, i.e. in station.
    pub scan_count: u64,
    pub station_id: String,
    /// Last update, milliseconds since the Unix epoch
    pub timestamp: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Read an optional field, treating a wrong type as missing
fn lenient_field<T: DeserializeOwned>(
    truck_id: &str,
    body: &Map<String, Value>,
    field: &str,
) -> Option<T> {
    let value = body.get(field).filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("Ignoring {} of truck {}: {}", field, truck_id, e);
            None
        }
    }
}

impl TruckStatusRecord {
    /// Parse a record body stored under `truck_id`
    ///
    /// Only the body shape and `scan_count` can reject a record. Any other
    /// field of the wrong type is read as missing, so a truck stays
    /// classifiable by parity alone.
    pub fn from_value(truck_id: &str, value: &Value) -> Result<Self, serde_json::Error> {
        let body: Map<String, Value> = serde_json::from_value(value.clone())?;
        let scan_count: Option<u64> =
            serde_json::from_value(body.get("scan_count").cloned().unwrap_or(Value::Null))?;

        Ok(Self {
            truck_id: truck_id.to_string(),
            scan_count: scan_count.unwrap_or(0),
            station_id: lenient_field(truck_id, &body, "station_id").unwrap_or_default(),
            timestamp: lenient_field(truck_id, &body, "timestamp"),
            latitude: lenient_field(truck_id, &body, "latitude"),
            longitude: lenient_field(truck_id, &body, "longitude"),
        })
    }

    pub fn state(&self) -> StationState {
        StationState::from_scan_count(self.scan_count)
    }
}

/// A truck currently in station, fresh per query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableTruck {
    pub truck_id: String,
    pub station_id: String,
    pub last_updated: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AvailableTruck {
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }

    pub fn label(&self) -> String {
        format!("Truck {} at {}", self.truck_id, self.station_id)
    }
}

impl From<TruckStatusRecord> for AvailableTruck {
    fn from(record: TruckStatusRecord) -> Self {
        Self {
            truck_id: record.truck_id,
            station_id: record.station_id,
            last_updated: record.timestamp,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// An available truck ranked for a dispatch request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchCandidate {
    #[serde(flatten)]
    pub truck: AvailableTruck,
    /// Distance to the fire location in kilometres
    pub distance_km: f64,
    /// Position the distance was measured from
    #[serde(skip)]
    pub location: Option<GeoPoint>,
}

impl DispatchCandidate {
    pub fn truck_id(&self) -> &str {
        &self.truck.truck_id
    }

    pub fn station_id(&self) -> &str {
        &self.truck.station_id
    }
}
