//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::check::CheckArgs;
use crate::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};

#[derive(Parser, Debug)]
#[command(name = "tales-config")]
#[command(about = "Load and validate the Tyson's Tales startup configuration", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, env = "TALES_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format on stderr
    #[arg(long, global = true, env = "TALES_LOG_FORMAT", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Also write JSON logs to daily rolling files in this directory
    #[arg(long, global = true, env = "TALES_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// When to start a new file in --log-dir
    #[arg(long, global = true, env = "TALES_LOG_ROTATION", value_enum, default_value = "daily")]
    pub log_rotation: RotationPolicy,

    /// Do not log to stderr (file logs and command output are unaffected)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Logger settings from the global flags.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
            enable_stderr: !self.quiet,
            rotation: self.log_rotation,
        }
    }

    /// The command to run; `check` when none was given.
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Check(CheckArgs::default()))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load .env and the process environment and verify OPENAI_API_KEY is set
    Check(CheckArgs),
}
