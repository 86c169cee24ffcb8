//! Leaflet HTML map renderer
//!
//! Writes a self-contained page: red fire marker, green truck markers,
//! label shown as popup.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use dispatch_domain::service::{MapPlan, MapRenderer, MarkerIcon};
use dispatch_types::Result;

const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Serialize)]
struct JsMarker<'a> {
    lat: f64,
    lon: f64,
    label: &'a str,
    color: &'static str,
    icon: &'static str,
}

fn marker_color(icon: MarkerIcon) -> &'static str {
    match icon {
        MarkerIcon::FireLocation => "red",
        MarkerIcon::Truck => "green",
    }
}

/// Render a plan to an HTML document
pub fn render_html(plan: &MapPlan) -> Result<String> {
    let markers: Vec<JsMarker<'_>> = plan
        .markers
        .iter()
        .map(|m| JsMarker {
            lat: m.location.latitude,
            lon: m.location.longitude,
            label: &m.label,
            color: marker_color(m.icon),
            icon: m.icon.as_str(),
        })
        .collect();
    // A label must not be able to close the script element
    let markers_json = serde_json::to_string(&markers)?.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Dispatch Map</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{v}/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@{v}/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
  attribution: '&copy; OpenStreetMap contributors'
}}).addTo(map);
var markers = {markers};
markers.forEach(function (m) {{
  var popup = document.createElement('div');
  popup.textContent = m.label;
  L.circleMarker([m.lat, m.lon], {{ color: m.color, radius: m.icon === 'fire-location' ? 12 : 8 }})
    .bindPopup(popup)
    .addTo(map);
}});
</script>
</body>
</html>
"#,
        v = LEAFLET_VERSION,
        lat = plan.center.latitude,
        lon = plan.center.longitude,
        zoom = plan.zoom,
        markers = markers_json,
    ))
}

/// Writes the rendered map to a file
pub struct LeafletMapRenderer {
    output_path: PathBuf,
}

impl LeafletMapRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl MapRenderer for LeafletMapRenderer {
    fn render(&self, plan: &MapPlan) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.output_path, render_html(plan)?)?;
        log::info!(
            "Wrote map with {} markers to {}",
            plan.markers.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
