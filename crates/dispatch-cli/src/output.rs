//! Output formatting module

use chrono::Local;
use serde::Serialize;

use dispatch_app::app::{DispatchOutcome, StatusBoard, TruckHistory};
use dispatch_domain::{AvailableTruck, DispatchCandidate, GeoPoint};
use dispatch_types::{OutputFormat, Result};

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_status(output_format: OutputFormat, board: &StatusBoard) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(board);
    }

    println!("Available Trucks");
    println!("================");
    if board.is_empty() {
        println!("No trucks currently available in stations");
    } else {
        for line in board.lines() {
            println!("  {}", line);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct DispatchReport<'a> {
    fire_location: GeoPoint,
    required: usize,
    dispatched: &'a [DispatchCandidate],
    shortfall: usize,
    unlocated: &'a [AvailableTruck],
}

pub fn output_dispatch(output_format: OutputFormat, outcome: &DispatchOutcome) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&DispatchReport {
            fire_location: outcome.fire_location,
            required: outcome.required,
            dispatched: &outcome.candidates,
            shortfall: outcome.shortfall(),
            unlocated: &outcome.unlocated,
        });
    }

    println!("Emergency Dispatch");
    println!("==================");
    println!("Fire location:   {}", outcome.fire_location);
    println!();

    if outcome.is_short() {
        println!(
            "Only {} trucks available. Need {}!",
            outcome.candidates.len(),
            outcome.required
        );
        println!("Consider requesting backup from other districts.");
    } else {
        println!("Found {} available trucks!", outcome.candidates.len());
    }

    for candidate in &outcome.candidates {
        println!();
        println!("Dispatching Truck {}", candidate.truck_id());
        println!("  Distance to location: {:.2} km", candidate.distance_km);
        println!("  From station: {}", candidate.station_id());
    }

    if !outcome.unlocated.is_empty() {
        println!();
        println!("In station but without a known position (not ranked):");
        for truck in &outcome.unlocated {
            println!("  {}", truck.label());
        }
    }
    Ok(())
}

pub fn output_history(output_format: OutputFormat, history: &TruckHistory) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(history);
    }

    println!("Movement history for Truck {}:", history.truck_id);
    if history.entries.is_empty() {
        println!("  (no scans recorded)");
    }
    for line in history.lines(&Local) {
        println!("  {}", line);
    }
    Ok(())
}

pub fn output_roster(output_format: OutputFormat, truck_ids: &[String]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&truck_ids);
    }

    if truck_ids.is_empty() {
        println!("No trucks registered");
    }
    for id in truck_ids {
        println!("{}", id);
    }
    Ok(())
}
