//! Domain model types

pub mod geo_point;
pub mod scan_history;
pub mod truck_status;

pub use geo_point::GeoPoint;
pub use scan_history::ScanHistoryEntry;
pub use truck_status::{AvailableTruck, DispatchCandidate, StationState, TruckStatusRecord};
