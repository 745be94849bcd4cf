//! Configuration management infrastructure
//!
//! Startup configuration read from the process environment:
//! - Optional `.env` file merged without overriding set variables
//! - Required `OPENAI_API_KEY` lookup
//! - Fail-fast validation of missing or empty values
//! - Optional server settings with defaults

pub mod env_file;
pub mod loader;

pub use env_file::{EnvFileStatus, DEFAULT_ENV_FILE};
pub use loader::{ConfigError, ConfigLoader, DATABASE_URL, NODE_ENV, OPENAI_API_KEY, PORT};
