//! CSV export of dispatch assignments

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use dispatch_domain::DispatchCandidate;
use dispatch_types::Result;

const HEADER: [&str; 6] = [
    "rank",
    "truck_id",
    "station_id",
    "distance_km",
    "latitude",
    "longitude",
];

#[derive(Serialize)]
struct DispatchRow<'a> {
    rank: usize,
    truck_id: &'a str,
    station_id: &'a str,
    distance_km: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Write candidates in rank order, with a header row even when empty
pub fn write_dispatch_csv<W: Write>(writer: W, candidates: &[DispatchCandidate]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for (i, candidate) in candidates.iter().enumerate() {
        csv_writer.serialize(DispatchRow {
            rank: i + 1,
            truck_id: candidate.truck_id(),
            station_id: candidate.station_id(),
            distance_km: format!("{:.3}", candidate.distance_km),
            latitude: candidate.truck.latitude,
            longitude: candidate.truck.longitude,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_dispatch_csv(path: &Path, candidates: &[DispatchCandidate]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_dispatch_csv(file, candidates)
}
