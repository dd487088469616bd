mod config;
mod error;
mod http_config;
mod identity_config;
mod log_level;
mod logging_config;
mod session_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use http_config::HttpConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use store_config::StoreConfig;

const DEFAULT_IDENTITY_BASE_URL: &str = "http://127.0.0.1:9099";
const DEFAULT_STORE_BASE_URL: &str = "http://127.0.0.1:8087";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SESSION_FILE: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
