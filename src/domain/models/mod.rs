pub mod api_key;
pub mod config;
pub mod server;

pub use api_key::ApiKey;
pub use config::AppConfig;
pub use server::ServerSettings;
