// Export our modules for use in binaries and tests
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod download;
pub mod event;
pub mod import;
pub mod reminders;
pub mod terminal;
pub mod ui;

pub use domain::{GenerationKind, JobStatus};
