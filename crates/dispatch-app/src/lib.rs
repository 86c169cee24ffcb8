//! Application services for fire brigade dispatch

pub mod app;
pub mod config;
pub mod repository;
