//! tales-config - startup configuration for the Tyson's Tales story service
//!
//! Reads `OPENAI_API_KEY` from the process environment, optionally seeded from
//! a local `.env` file, and refuses to start without it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the validated `AppConfig` and its `ApiKey`
//! - **Infrastructure Layer** (`infrastructure`): env file loading, the
//!   `ConfigLoader`, and logging setup
//! - **CLI Layer** (`cli`): the `tales-config` binary's commands
//!
//! # Example
//!
//! ```no_run
//! use tales_config::AppConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let key = config.openai_api_key();
//!     println!("using key {key}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{ApiKey, AppConfig, ServerSettings};
pub use infrastructure::config::{
    ConfigError, ConfigLoader, EnvFileStatus, DATABASE_URL, NODE_ENV, OPENAI_API_KEY, PORT,
};
