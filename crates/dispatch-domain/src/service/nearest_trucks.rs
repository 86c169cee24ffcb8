//! Nearest available truck selection

use std::cmp::Ordering;

use dispatch_types::{Error, Result};

use crate::model::{AvailableTruck, DispatchCandidate, GeoPoint};
use crate::repository::StatusStore;
use crate::service::availability::get_available_trucks;

/// Ranked trucks for one dispatch request
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Closest trucks first, at most the requested count
    pub candidates: Vec<DispatchCandidate>,
    /// Available trucks that could not be ranked for lack of coordinates
    pub unlocated: Vec<AvailableTruck>,
}

/// Rank `trucks` by distance to `fire_location` and keep the closest `required`
///
/// Equidistant trucks are ordered by truck ID so the result does not depend
/// on store order.
pub fn select_nearest(
    trucks: Vec<AvailableTruck>,
    fire_location: GeoPoint,
    required: usize,
) -> Selection {
    let mut selection = Selection::default();

    for truck in trucks {
        match truck.location() {
            Some(location) => {
                let distance_km = fire_location.distance_km(&location);
                selection.candidates.push(DispatchCandidate {
                    truck,
                    distance_km,
                    location: Some(location),
                });
            }
            None => {
                log::warn!(
                    "Truck {} has no valid coordinates, excluded from ranking",
                    truck.truck_id
                );
                selection.unlocated.push(truck);
            }
        }
    }

    selection.candidates.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.truck_id().cmp(b.truck_id()))
    });
    selection.candidates.truncate(required);
    selection
}

/// Closest `required_trucks` available trucks to `fire_location`
///
/// Fewer than requested is a valid result, not an error.
pub fn find_nearest_trucks<S: StatusStore + ?Sized>(
    store: &S,
    fire_location: GeoPoint,
    required_trucks: usize,
) -> Result<Vec<DispatchCandidate>> {
    if required_trucks == 0 {
        return Err(Error::InvalidRequest(
            "at least one truck must be requested".to_string(),
        ));
    }
    let available = get_available_trucks(store)?;
    Ok(select_nearest(available, fire_location, required_trucks).candidates)
}
