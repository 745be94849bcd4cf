use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::env_file::{self, EnvFileStatus, DEFAULT_ENV_FILE};
use crate::domain::models::{ApiKey, AppConfig, ServerSettings};

/// Name of the required credential variable.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Optional listener port, see [`ServerSettings::port`].
pub const PORT: &str = "PORT";

/// Optional database location, see [`ServerSettings::database_url`].
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Optional deployment environment name.
pub const NODE_ENV: &str = "NODE_ENV";

/// Configuration error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised for both unset and empty variables.
    #[error("{name} environment variable is not set")]
    MissingVariable { name: &'static str },
}

/// Startup configuration loader
///
/// Order of operations:
/// 1. Merge the env file (default `.env` in the working directory) into the
///    process environment, never overwriting variables that are already set
/// 2. Read `OPENAI_API_KEY` from the process environment
/// 3. Reject an unset or empty value
/// 4. Fill optional server settings, falling back to defaults
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    env_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading `./.env`.
    pub fn new() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
        }
    }

    /// Read the env file from `path` instead of `./.env`.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Skip the env file step; only the process environment is consulted.
    #[must_use]
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Env file this loader applies, if any.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Load configuration, failing fast when the API key is missing.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        self.load_with_status().1
    }

    /// Same as [`ConfigLoader::load`], also reporting what happened to the env file.
    pub fn load_with_status(&self) -> (EnvFileStatus, Result<AppConfig, ConfigError>) {
        let status = self.load_env_file();
        let result = Self::validate(OPENAI_API_KEY, Self::read_required(OPENAI_API_KEY))
            .map(|key| AppConfig::new(key).with_server(Self::read_server_settings()));

        match &result {
            Ok(config) => tracing::info!(
                variable = OPENAI_API_KEY,
                key = %config.openai_api_key().masked(),
                port = config.server().port,
                "configuration loaded"
            ),
            // The entry point reports the error to the operator.
            Err(e) => tracing::debug!(variable = OPENAI_API_KEY, error = %e, "configuration invalid"),
        }

        (status, result)
    }

    /// Best-effort merge of the env file into the process environment.
    pub fn load_env_file(&self) -> EnvFileStatus {
        self.env_file
            .as_deref()
            .map_or(EnvFileStatus::Disabled, env_file::apply)
    }

    /// Look up a variable. Values that are not valid Unicode count as unset.
    pub fn read_required(name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                tracing::warn!(variable = name, "ignoring non-unicode value");
                None
            }
        }
    }

    /// Optional variable; an empty value counts as unset.
    pub fn read_optional(name: &str) -> Option<String> {
        Self::read_required(name).filter(|value| !value.is_empty())
    }

    /// Server settings from `PORT`, `DATABASE_URL` and `NODE_ENV`.
    ///
    /// A `PORT` that is not a valid port number falls back to the default.
    pub fn read_server_settings() -> ServerSettings {
        let defaults = ServerSettings::default();

        let port = Self::read_optional(PORT).map_or(defaults.port, |raw| {
            raw.parse().unwrap_or_else(|_| {
                tracing::warn!(variable = PORT, value = %raw, default = defaults.port, "invalid port, using default");
                defaults.port
            })
        });

        ServerSettings {
            port,
            database_url: Self::read_optional(DATABASE_URL).unwrap_or(defaults.database_url),
            environment: Self::read_optional(NODE_ENV),
        }
    }

    /// Reject a missing or empty value; everything else is kept verbatim.
    pub fn validate(name: &'static str, value: Option<String>) -> Result<ApiKey, ConfigError> {
        match value {
            Some(value) if !value.is_empty() => Ok(ApiKey::new(value)),
            _ => Err(ConfigError::MissingVariable { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn loader_without_file() -> ConfigLoader {
        ConfigLoader::new().without_env_file()
    }

    #[test]
    fn test_default_env_file_is_dotenv() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.env_file(), Some(Path::new(".env")));
    }

    #[test]
    fn test_validate_present_value() {
        let key = ConfigLoader::validate(OPENAI_API_KEY, Some("sk-test-123".to_string())).unwrap();
        assert_eq!(key.expose(), "sk-test-123");
    }

    #[test]
    fn test_validate_keeps_whitespace() {
        let key = ConfigLoader::validate(OPENAI_API_KEY, Some(" sk-test ".to_string())).unwrap();
        assert_eq!(key.expose(), " sk-test ");
    }

    #[test]
    fn test_validate_missing_value() {
        let result = ConfigLoader::validate(OPENAI_API_KEY, None);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingVariable {
                name: OPENAI_API_KEY
            }
        );
    }

    #[test]
    fn test_validate_empty_matches_missing() {
        let empty = ConfigLoader::validate(OPENAI_API_KEY, Some(String::new())).unwrap_err();
        let missing = ConfigLoader::validate(OPENAI_API_KEY, None).unwrap_err();
        assert_eq!(empty, missing);
        assert_eq!(empty.to_string(), missing.to_string());
    }

    #[test]
    fn test_error_message_names_variable() {
        let err = ConfigError::MissingVariable {
            name: OPENAI_API_KEY,
        };
        assert_eq!(err.to_string(), "OPENAI_API_KEY environment variable is not set");
    }

    #[test]
    fn test_load_from_process_env() {
        temp_env::with_var(OPENAI_API_KEY, Some("sk-test-123"), || {
            let config = loader_without_file().load().unwrap();
            assert_eq!(config.openai_api_key().expose(), "sk-test-123");
        });
    }

    #[test]
    fn test_load_unset_fails() {
        temp_env::with_var_unset(OPENAI_API_KEY, || {
            let err = loader_without_file().load().unwrap_err();
            assert!(err.to_string().contains("OPENAI_API_KEY"));
        });
    }

    #[test]
    fn test_load_empty_fails() {
        temp_env::with_var(OPENAI_API_KEY, Some(""), || {
            let err = loader_without_file().load().unwrap_err();
            assert!(matches!(err, ConfigError::MissingVariable { .. }));
        });
    }

    #[test]
    fn test_env_file_supplies_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OPENAI_API_KEY=sk-from-file\n").unwrap();

        temp_env::with_var_unset(OPENAI_API_KEY, || {
            let (status, result) = ConfigLoader::new().with_env_file(&path).load_with_status();
            assert!(status.is_loaded());
            assert_eq!(result.unwrap().openai_api_key().expose(), "sk-from-file");
        });
    }

    #[test]
    fn test_process_env_wins_over_env_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OPENAI_API_KEY=file_value\n").unwrap();

        temp_env::with_var(OPENAI_API_KEY, Some("preset_value"), || {
            let config = ConfigLoader::new().with_env_file(&path).load().unwrap();
            assert_eq!(config.openai_api_key().expose(), "preset_value");
        });
    }

    #[test]
    fn test_missing_env_file_does_not_fail() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        temp_env::with_var(OPENAI_API_KEY, Some("sk-test-123"), || {
            let (status, result) = ConfigLoader::new().with_env_file(&path).load_with_status();
            assert!(matches!(status, EnvFileStatus::Missing { .. }));
            assert!(result.is_ok());
        });
    }

    #[test]
    fn test_missing_env_file_and_variable_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        temp_env::with_var_unset(OPENAI_API_KEY, || {
            let err = ConfigLoader::new().with_env_file(&path).load().unwrap_err();
            assert!(err.to_string().contains("OPENAI_API_KEY"));
        });
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_value_counts_as_missing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        temp_env::with_var(OPENAI_API_KEY, Some(OsStr::from_bytes(b"\xff")), || {
            let err = loader_without_file().load().unwrap_err();
            assert_eq!(
                err,
                ConfigError::MissingVariable {
                    name: OPENAI_API_KEY
                }
            );
        });
    }

    #[test]
    fn test_key_after_malformed_line_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "NODE_ENV=development\nthis line is broken\nOPENAI_API_KEY=sk-after-bad-line\n",
        )
        .unwrap();

        temp_env::with_vars_unset([OPENAI_API_KEY, NODE_ENV], || {
            let (status, result) = ConfigLoader::new().with_env_file(&path).load_with_status();
            assert!(matches!(status, EnvFileStatus::Loaded { skipped_lines: 1, .. }));

            let config = result.unwrap();
            assert_eq!(config.openai_api_key().expose(), "sk-after-bad-line");
            assert_eq!(config.server().environment.as_deref(), Some("development"));
        });
    }

    #[test]
    fn test_server_settings_default_when_unset() {
        temp_env::with_vars(
            [
                (OPENAI_API_KEY, Some("sk-test-123")),
                (PORT, None),
                (DATABASE_URL, Some("")),
                (NODE_ENV, None),
            ],
            || {
                let config = loader_without_file().load().unwrap();
                assert_eq!(config.server(), &ServerSettings::default());
            },
        );
    }

    #[test]
    fn test_server_settings_from_environment() {
        temp_env::with_vars(
            [
                (OPENAI_API_KEY, Some("sk-test-123")),
                (PORT, Some("8080")),
                (DATABASE_URL, Some("/var/lib/tales/tales.db")),
                (NODE_ENV, Some("production")),
            ],
            || {
                let server = loader_without_file().load().unwrap().server().clone();
                assert_eq!(server.port, 8080);
                assert_eq!(server.database_url, "/var/lib/tales/tales.db");
                assert!(server.is_production());
            },
        );
    }

    #[test]
    fn test_invalid_port_falls_back_to_default() {
        temp_env::with_var(PORT, Some("not-a-port"), || {
            assert_eq!(ConfigLoader::read_server_settings().port, 5000);
        });
        temp_env::with_var(PORT, Some("70000"), || {
            assert_eq!(ConfigLoader::read_server_settings().port, 5000);
        });
    }

    #[test]
    fn test_server_settings_never_fail_startup() {
        temp_env::with_vars([(OPENAI_API_KEY, None), (PORT, Some("8080"))], || {
            let err = loader_without_file().load().unwrap_err();
            assert!(matches!(err, ConfigError::MissingVariable { .. }));
        });
    }

    #[test]
    fn test_disabled_env_file_status() {
        temp_env::with_var(OPENAI_API_KEY, Some("sk-test-123"), || {
            let (status, _) = loader_without_file().load_with_status();
            assert_eq!(status, EnvFileStatus::Disabled);
        });
    }
}
