//! Dispatch Service - Status, Dispatch and History Use Cases
//!
//! Every call reads a fresh snapshot from the store; nothing is cached
//! between calls.

use chrono::TimeZone;
use serde::Serialize;

use dispatch_domain::service::{
    format_history, get_available_trucks, list_truck_ids, read_scan_history, select_nearest,
    MapPlan,
};
use dispatch_domain::{AvailableTruck, DispatchCandidate, GeoPoint, ScanHistoryEntry, StatusStore};
use dispatch_types::{Error, Result};

// ============================================================================
// Status board
// ============================================================================

/// Trucks currently in station, sorted by truck ID
#[derive(Debug, Clone, Serialize)]
pub struct StatusBoard {
    pub available: Vec<AvailableTruck>,
}

impl StatusBoard {
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// One `"Truck {id} at {station}"` line per truck
    pub fn lines(&self) -> Vec<String> {
        self.available.iter().map(AvailableTruck::label).collect()
    }
}

pub fn status_board<S: StatusStore + ?Sized>(store: &S) -> Result<StatusBoard> {
    let mut available = get_available_trucks(store)?;
    available.sort_by(|a, b| a.truck_id.cmp(&b.truck_id));
    Ok(StatusBoard { available })
}

// ============================================================================
// Dispatch
// ============================================================================

/// Result of a dispatch request
///
/// Fewer candidates than required is a shortfall to warn about, not a
/// failure.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchOutcome {
    pub fire_location: GeoPoint,
    pub required: usize,
    pub candidates: Vec<DispatchCandidate>,
    /// Available trucks left out for lack of coordinates
    pub unlocated: Vec<AvailableTruck>,
}

impl DispatchOutcome {
    pub fn is_short(&self) -> bool {
        self.candidates.len() < self.required
    }

    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.candidates.len())
    }

    pub fn map_plan(&self, zoom: u8) -> MapPlan {
        MapPlan::for_dispatch(self.fire_location, &self.candidates, zoom)
    }
}

pub fn dispatch<S: StatusStore + ?Sized>(
    store: &S,
    fire_location: GeoPoint,
    required: usize,
) -> Result<DispatchOutcome> {
    if required == 0 {
        return Err(Error::InvalidRequest(
            "at least one truck must be requested".to_string(),
        ));
    }

    let available = get_available_trucks(store)?;
    let selection = select_nearest(available, fire_location, required);
    log::info!(
        "Dispatch to {}: {} of {} trucks selected",
        fire_location,
        selection.candidates.len(),
        required
    );

    Ok(DispatchOutcome {
        fire_location,
        required,
        candidates: selection.candidates,
        unlocated: selection.unlocated,
    })
}

// ============================================================================
// History
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TruckHistory {
    pub truck_id: String,
    /// Oldest first
    pub entries: Vec<ScanHistoryEntry>,
}

impl TruckHistory {
    pub fn lines<Tz>(&self, tz: &Tz) -> Vec<String>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format_history(&self.entries, tz)
    }
}

/// Movement history of a known truck
///
/// A truck is known if it has a status record or any history.
pub fn truck_history<S: StatusStore + ?Sized>(store: &S, truck_id: &str) -> Result<TruckHistory> {
    let entries = read_scan_history(store, truck_id)?;
    if entries.is_empty() && !list_truck_ids(store)?.iter().any(|id| id == truck_id) {
        return Err(Error::TruckNotFound(truck_id.to_string()));
    }
    Ok(TruckHistory {
        truck_id: truck_id.to_string(),
        entries,
    })
}

/// IDs of every truck with a status record
pub fn truck_roster<S: StatusStore + ?Sized>(store: &S) -> Result<Vec<String>> {
    list_truck_ids(store)
}
