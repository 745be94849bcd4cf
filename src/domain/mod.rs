//! Domain layer for the Tyson's Tales configuration loader
//!
//! Holds the validated configuration values handed to the rest of the process.

pub mod models;

pub use models::{ApiKey, AppConfig, ServerSettings};
