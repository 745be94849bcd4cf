//! Infrastructure layer module
//!
//! - Configuration loading from the environment and `.env`
//! - Logging infrastructure

pub mod config;
pub mod logging;
