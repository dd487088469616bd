use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Document store base URL
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_STORE_BASE_URL),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::store("store.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::store(format!(
                "store.base_url must be http(s), got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
