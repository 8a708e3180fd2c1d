//! Halshaw James job board: listing search, application flows, and the employer workspace.

pub mod config;
pub mod employer;
pub mod error;
pub mod forms;
pub mod listings;
pub mod navigation;
pub mod notify;
pub mod telemetry;
