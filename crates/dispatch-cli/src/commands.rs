//! Command handlers

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::output::{output_dispatch, output_history, output_roster, output_status};
use dispatch_app::app::{dispatch, status_board, truck_history, truck_roster};
use dispatch_app::config::Config;
use dispatch_app::repository::open_status_store;
use dispatch_domain::service::MapRenderer;
use dispatch_domain::GeoPoint;
use dispatch_infra::dispatch_csv::export_dispatch_csv;
use dispatch_infra::map_html::LeafletMapRenderer;
use dispatch_types::{OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Config {
            show,
            set_store,
            set_zoom,
            set_output,
            set_map_output,
            reset,
        } => handle_config(
            &config_path,
            ConfigChanges {
                show,
                set_store,
                set_zoom,
                set_output,
                set_map_output,
                reset,
            },
        ),
        command => {
            // Load config
            let mut config = Config::load_from(&config_path)?;

            // Override from CLI args
            if cli.store.is_some() {
                config.store_path = cli.store;
            }
            let output_format = cli.format.unwrap_or(config.output_format);

            run_query(command, &config, output_format)
        }
    }
}

fn run_query(command: Commands, config: &Config, output_format: OutputFormat) -> Result<()> {
    let store = open_status_store(config)?;

    match command {
        Commands::Status => {
            let board = status_board(&store)?;
            output_status(output_format, &board)
        }

        Commands::Dispatch {
            lat,
            lon,
            trucks,
            map,
            csv,
        } => {
            let fire_location = GeoPoint::new(lat, lon)?;
            let outcome = dispatch(&store, fire_location, trucks as usize)?;

            if let Some(map_path) = map.or_else(|| config.map_output.clone()) {
                let plan = outcome.map_plan(config.map_zoom);
                LeafletMapRenderer::new(map_path.clone()).render(&plan)?;
                eprintln!("Map written to {}", map_path.display());
            }
            if let Some(csv_path) = csv {
                export_dispatch_csv(&csv_path, &outcome.candidates)?;
                eprintln!("Assignment written to {}", csv_path.display());
            }

            output_dispatch(output_format, &outcome)
        }

        Commands::History { truck_id } => {
            let history = truck_history(&store, &truck_id)?;
            output_history(output_format, &history)
        }

        Commands::Trucks => {
            let ids = truck_roster(&store)?;
            output_roster(output_format, &ids)
        }

        Commands::Config { .. } => Ok(()),
    }
}

struct ConfigChanges {
    show: bool,
    set_store: Option<PathBuf>,
    set_zoom: Option<u8>,
    set_output: Option<OutputFormat>,
    set_map_output: Option<PathBuf>,
    reset: bool,
}

fn handle_config(config_path: &Path, changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        Config::default().save_to(config_path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;
    let mut modified = false;

    if let Some(path) = changes.set_store {
        config.store_path = Some(path);
        modified = true;
    }
    if let Some(zoom) = changes.set_zoom {
        config.map_zoom = zoom;
        modified = true;
    }
    if let Some(format) = changes.set_output {
        config.output_format = format;
        modified = true;
    }
    if let Some(path) = changes.set_map_output {
        config.map_output = Some(path);
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration saved");
    }

    if changes.show || !modified {
        println!("{}", config);
    }

    Ok(())
}
