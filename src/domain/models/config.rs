use super::api_key::ApiKey;
use super::server::ServerSettings;
use crate::infrastructure::config::{ConfigError, ConfigLoader};

/// Validated startup configuration.
///
/// Built once at process start and passed by reference to whatever needs the
/// credentials. There is no way to reload or mutate it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    openai_api_key: ApiKey,
    server: ServerSettings,
}

impl AppConfig {
    /// Config holding `openai_api_key` and default server settings.
    pub fn new(openai_api_key: ApiKey) -> Self {
        Self {
            openai_api_key,
            server: ServerSettings::default(),
        }
    }

    /// Replace the server settings.
    #[must_use]
    pub fn with_server(mut self, server: ServerSettings) -> Self {
        self.server = server;
        self
    }

    /// Load `.env` from the working directory, then read `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// The validated OpenAI credential.
    pub const fn openai_api_key(&self) -> &ApiKey {
        &self.openai_api_key
    }

    /// Optional server settings, defaulted where unset.
    pub const fn server(&self) -> &ServerSettings {
        &self.server
    }
}
