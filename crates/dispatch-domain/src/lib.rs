//! Fire brigade dispatch domain
//!
//! Truck availability is derived from scan-count parity; dispatch ranks the
//! available trucks by distance to the fire location.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::StatusStore;
