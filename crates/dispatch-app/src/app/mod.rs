//! Use cases behind the CLI

pub mod dispatch_service;

pub use dispatch_service::{
    dispatch, status_board, truck_history, truck_roster, DispatchOutcome, StatusBoard,
    TruckHistory,
};
