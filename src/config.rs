//! Converter configuration
//!
//! Label keys used to attribute a claim to its owning application. They are
//! passed to the converter explicitly instead of living in global constants.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default label recording the user that owns an application
pub const DEFAULT_OWNER_LABEL: &str = "io.portainer.kubernetes.application.owner";

/// Default label recording the owning application's name
pub const DEFAULT_NAME_LABEL: &str = "io.portainer.kubernetes.application.name";

/// Default selector label set to the application name
pub const DEFAULT_APP_LABEL: &str = "app";

// =============================================================================
// Attribution Labels
// =============================================================================

/// Label keys written to and read from claim metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributionLabels {
    /// Key holding the application owner
    pub owner_label: String,
    /// Key holding the application name
    pub name_label: String,
    /// Selector key, always set to the application name
    pub app_label: String,
}

impl Default for AttributionLabels {
    fn default() -> Self {
        Self {
            owner_label: DEFAULT_OWNER_LABEL.to_string(),
            name_label: DEFAULT_NAME_LABEL.to_string(),
            app_label: DEFAULT_APP_LABEL.to_string(),
        }
    }
}

// =============================================================================
// Converter Configuration
// =============================================================================

/// Configuration for the claim converter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ConverterConfig {
    /// Attribution label keys
    pub labels: AttributionLabels,
}

impl ConverterConfig {
    /// Parse and validate a YAML (or JSON) configuration document
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: ConverterConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading converter config from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Label keys must be non-empty and pairwise distinct
    pub fn validate(&self) -> Result<()> {
        let labels = &self.labels;
        for (field, key) in [
            ("ownerLabel", &labels.owner_label),
            ("nameLabel", &labels.name_label),
            ("appLabel", &labels.app_label),
        ] {
            if key.trim().is_empty() {
                return Err(Error::Configuration(format!("{} must not be empty", field)));
            }
        }
        if labels.owner_label == labels.name_label {
            return Err(Error::Configuration(format!(
                "ownerLabel and nameLabel must differ, both are {}",
                labels.owner_label
            )));
        }
        for (field, key) in [("ownerLabel", &labels.owner_label), ("nameLabel", &labels.name_label)] {
            if labels.app_label == *key {
                return Err(Error::Configuration(format!(
                    "appLabel must differ from {}, both are {}",
                    field, key
                )));
            }
        }
        Ok(())
    }
}
