//! Map view of a dispatch: what to draw, independent of how

use serde::{Deserialize, Serialize};

use dispatch_types::Result;

use crate::model::{DispatchCandidate, GeoPoint};

/// Zoom hint for a city-scale view around the fire
pub const DEFAULT_ZOOM: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerIcon {
    FireLocation,
    Truck,
}

impl MarkerIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerIcon::FireLocation => "fire-location",
            MarkerIcon::Truck => "truck",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub location: GeoPoint,
    pub label: String,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPlan {
    pub center: GeoPoint,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapPlan {
    /// Fire marker first, then one marker per dispatched truck
    pub fn for_dispatch(fire_location: GeoPoint, candidates: &[DispatchCandidate], zoom: u8) -> Self {
        let mut markers = Vec::with_capacity(candidates.len() + 1);
        markers.push(Marker {
            location: fire_location,
            label: "Fire Location".to_string(),
            icon: MarkerIcon::FireLocation,
        });
        markers.extend(candidates.iter().filter_map(|c| {
            c.location.or_else(|| c.truck.location()).map(|location| Marker {
                location,
                label: c.truck.label(),
                icon: MarkerIcon::Truck,
            })
        }));

        Self {
            center: fire_location,
            zoom,
            markers,
        }
    }
}

/// Draws a map plan somewhere
pub trait MapRenderer {
    fn render(&self, plan: &MapPlan) -> Result<()>;
}
