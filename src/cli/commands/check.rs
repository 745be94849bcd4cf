//! Implementation of the `tales-config check` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ServerSettings;
use crate::infrastructure::config::{ConfigLoader, EnvFileStatus, DEFAULT_ENV_FILE, OPENAI_API_KEY};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Env file merged into the environment before lookup
    #[arg(long, default_value = DEFAULT_ENV_FILE, conflicts_with = "no_env_file")]
    pub env_file: PathBuf,

    /// Only consult the process environment
    #[arg(long)]
    pub no_env_file: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            no_env_file: false,
        }
    }
}

impl CheckArgs {
    /// Loader configured from the env file flags.
    pub fn loader(&self) -> ConfigLoader {
        let loader = ConfigLoader::new();
        if self.no_env_file {
            loader.without_env_file()
        } else {
            loader.with_env_file(&self.env_file)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    /// Always `true`; failures go through `handle_error`.
    pub success: bool,
    /// Name of the credential variable that was checked.
    pub variable: &'static str,
    /// Masked key, see `ApiKey::masked`.
    pub key_preview: String,
    /// Length of the raw key in bytes.
    pub key_length: usize,
    /// What happened to the env file.
    pub env_file: EnvFileStatus,
    /// Optional server settings after defaults.
    pub server: ServerSettings,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let env_file = match &self.env_file {
            EnvFileStatus::Loaded {
                path,
                skipped_lines: 0,
            } => format!("loaded {}", path.display()),
            EnvFileStatus::Loaded {
                path,
                skipped_lines,
            } => format!(
                "loaded {} (skipped {skipped_lines} malformed line(s))",
                path.display()
            ),
            EnvFileStatus::Missing { path } => {
                format!("{} not found, using process environment", path.display())
            }
            EnvFileStatus::Unreadable { path, reason } => {
                format!("ignored {} ({reason})", path.display())
            }
            EnvFileStatus::Disabled => "disabled".to_string(),
        };

        [
            "Configuration OK".to_string(),
            format!("  env file: {env_file}"),
            format!(
                "  {}: {} ({} chars)",
                self.variable, self.key_preview, self.key_length
            ),
            format!("  port: {}", self.server.port),
            format!("  database: {}", self.server.database_url),
            format!(
                "  environment: {}",
                self.server.environment.as_deref().unwrap_or("(unset)")
            ),
        ]
        .join("\n")
    }
}

pub fn execute(args: &CheckArgs, json_mode: bool) -> Result<()> {
    let (env_file, result) = args.loader().load_with_status();
    let config = result?;

    let key = config.openai_api_key();
    let output_data = CheckOutput {
        success: true,
        variable: OPENAI_API_KEY,
        key_preview: key.masked(),
        key_length: key.len(),
        env_file,
        server: config.server().clone(),
    };
    output(&output_data, json_mode);
    Ok(())
}
