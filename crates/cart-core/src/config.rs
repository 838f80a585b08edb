//! Cart configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Settings shared by every cart built from them.
///
/// Every field has a default, so an empty file is a valid config:
///
/// ```toml
/// default_name = "phpcart"
/// key_suffix = "_cart"
/// max_quantity_per_item = 9999
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Name used until `set_cart`/`named` picks another.
    #[serde(default = "default_name")]
    pub default_name: String,

    /// Appended to a cart name to form its session key.
    #[serde(default = "default_key_suffix")]
    pub key_suffix: String,

    /// Upper bound on a single item's quantity. Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity_per_item: Option<i64>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            key_suffix: default_key_suffix(),
            max_quantity_per_item: None,
        }
    }
}

impl CartConfig {
    /// Load config from a file.
    ///
    /// `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CartError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            let config: Self = serde_json::from_str(&content).map_err(|e| {
                CartError::Config(format!("Failed to parse JSON config {}: {}", path.display(), e))
            })?;
            config.validate()?;
            config
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(path = %path.display(), "loaded cart config");
        Ok(config)
    }

    /// Parse TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| CartError::Config(format!("Failed to parse TOML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Session key for a cart name.
    pub fn key_for(&self, name: &str) -> String {
        format!("{}{}", name, self.key_suffix)
    }

    fn validate(&self) -> Result<(), CartError> {
        if self.default_name.is_empty() {
            return Err(CartError::Config("default_name must not be empty".into()));
        }
        if let Some(max) = self.max_quantity_per_item {
            if max < 0 {
                return Err(CartError::Config(format!(
                    "max_quantity_per_item must be zero or more, got {}",
                    max
                )));
            }
        }
        Ok(())
    }
}

fn default_name() -> String {
    "phpcart".to_string()
}

fn default_key_suffix() -> String {
    "_cart".to_string()
}
