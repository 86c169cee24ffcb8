//! Core types for fire brigade dispatch

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Collection names in the status store
pub mod collections {
    /// Current status per truck, keyed by truck ID
    pub const TRUCK_STATUS: &str = "truck_status";
    /// Scan history per truck, keyed by truck ID then entry ID
    pub const SCAN_HISTORY: &str = "scan_history";
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
