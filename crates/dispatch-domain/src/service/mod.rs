//! Domain services

pub mod availability;
pub mod history;
pub mod map_plan;
pub mod nearest_trucks;

pub use availability::{get_available_trucks, list_truck_ids, read_truck_status};
pub use history::{format_history, format_history_line, read_scan_history};
pub use map_plan::{MapPlan, MapRenderer, Marker, MarkerIcon, DEFAULT_ZOOM};
pub use nearest_trucks::{find_nearest_trucks, select_nearest, Selection};
