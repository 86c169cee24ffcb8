//! CLI definition using clap

use clap::{ArgAction, Parser, Subcommand};
use dispatch_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brigade-dispatch")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Find the nearest in-station fire trucks for an emergency")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Status store snapshot (JSON). Uses config value if not specified.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Config file override
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show trucks currently in station
    Status,

    /// Select the nearest available trucks for a fire
    Dispatch {
        /// Fire location latitude (-90..90)
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Fire location longitude (-180..180)
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Number of trucks required
        #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        trucks: u32,

        /// Write an HTML map of the dispatch
        #[arg(long)]
        map: Option<PathBuf>,

        /// Write the assignment as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Show movement history of a truck
    History {
        /// Truck ID
        truck_id: String,
    },

    /// List all known truck IDs
    Trucks,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set status store snapshot path
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Set map zoom hint (1-19)
        #[arg(long)]
        set_zoom: Option<u8>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default map output path
        #[arg(long)]
        set_map_output: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "brigade-dispatch",
            "dispatch",
            "--lat",
            "-33.8688",
            "--lon",
            "151.2093",
            "-n",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Dispatch { lat, trucks, .. } => {
                assert!((lat + 33.8688).abs() < 1e-9);
                assert_eq!(trucks, 2);
            }
            _ => panic!("expected dispatch"),
        }
    }

    #[test]
    fn test_zero_trucks_rejected_by_parser() {
        assert!(Cli::try_parse_from([
            "brigade-dispatch",
            "dispatch",
            "--lat",
            "0",
            "--lon",
            "0",
            "-n",
            "0"
        ])
        .is_err());
    }
}
