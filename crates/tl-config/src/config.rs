use crate::{
    ConfigError, ConfigErrorResult, HttpConfig, IdentityConfig, LoggingConfig, SessionConfig,
    StoreConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub http: HttpConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full error handling.
    ///
    /// Loading order:
    /// 1. Check for TL_CONFIG_DIR env var, else use ./.tl/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TL_CONFIG_DIR env var > ./.tl/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TL_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tl"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.identity.validate()?;
        self.store.validate()?;
        self.http.validate()?;
        self.session.validate()?;

        Ok(())
    }

    /// Get absolute path to the session snapshot file.
    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.file))
    }

    /// Get absolute path to the log file, if one is configured.
    pub fn log_path(&self) -> Result<Option<PathBuf>, ConfigError> {
        match &self.logging.file {
            Some(file) if !file.is_empty() => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(file)))
            }
            _ => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  identity: {} (api key: {})",
            self.identity.base_url,
            if self.identity.api_key.is_empty() {
                "unset"
            } else {
                "set"
            }
        );
        info!("  store: {}", self.store.base_url);
        info!(
            "  http: timeout={}s, connect={}s",
            self.http.timeout_secs, self.http.connect_timeout_secs
        );
        info!("  session: {}", self.session.file);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity provider
        Self::apply_env_string("TL_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_string("TL_IDENTITY_API_KEY", &mut self.identity.api_key);

        // Document store
        Self::apply_env_string("TL_STORE_BASE_URL", &mut self.store.base_url);

        // HTTP
        Self::apply_env_parse("TL_HTTP_TIMEOUT_SECS", &mut self.http.timeout_secs);
        Self::apply_env_parse(
            "TL_HTTP_CONNECT_TIMEOUT_SECS",
            &mut self.http.connect_timeout_secs,
        );

        // Session
        Self::apply_env_string("TL_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("TL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TL_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
