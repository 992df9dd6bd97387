//! MindWell - a terminal client for the MindWell mental-health support service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
