use serde::Serialize;

/// Port the story server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// SQLite path used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "../database/tysons_tales.db";

/// Optional server settings that sit next to the API key in `.env`.
///
/// Every field has a default, so none of them can fail startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    /// TCP port for the HTTP listener (`PORT`).
    pub port: u16,
    /// SQLite database location (`DATABASE_URL`).
    pub database_url: String,
    /// Deployment environment name (`NODE_ENV`), if set.
    pub environment: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            environment: None,
        }
    }
}

impl ServerSettings {
    /// Production builds serve the bundled frontend.
    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some("production")
    }
}
