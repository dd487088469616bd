use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Identity provider base URL
    pub base_url: String,
    /// Optional provider API key, sent as X-Api-Key. Empty = not sent.
    pub api_key: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            api_key: String::new(),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::identity("identity.base_url must not be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::identity(format!(
                "identity.base_url must be http(s), got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
