//! Run configuration for blokform: the target space and the optional
//! external catalog connection used by catalog-backed custom fields.
//!
//! ```toml
//! space_id = "var.space_id"
//!
//! [catalog]
//! endpoint = "https://api.europe-west1.gcp.commercetools.com"
//! client_id = "var.ct_client_id"
//! client_secret = "var.ct_client_secret"
//! locale = "en-GB"
//! project_key = "shop"
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config value '{key}' must not be empty")]
    EmptyValue { key: String },
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Space identifier, either a literal id or a `var.`/`local.` reference.
    #[serde(default)]
    pub space_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<IntegrationConfig>,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("space_id", &self.space_id)?;

        if let Some(catalog) = &self.catalog {
            catalog.validate()?;
        }

        Ok(())
    }
}

///
/// IntegrationConfig
///
/// Connection parameters for the external product catalog.
/// Every value may be a literal or a `var.`/`local.` reference.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    pub locale: String,
    pub project_key: String,
}

impl IntegrationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("catalog.endpoint", &self.endpoint)?;
        non_empty("catalog.client_id", &self.client_id)?;
        non_empty("catalog.client_secret", &self.client_secret)?;
        non_empty("catalog.locale", &self.locale)?;
        non_empty("catalog.project_key", &self.project_key)?;

        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue {
            key: key.to_string(),
        });
    }

    Ok(())
}

///
/// TESTS
///
