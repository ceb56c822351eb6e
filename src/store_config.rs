//! # Store Configuration Module
//!
//! ## Purpose
//! Keeps the paths of the two JSON formula stores (acids and bases) in one place
//! instead of hardcoding them in the interaction flow.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "acids": "acids.json",
//!   "bases": "bases.json"
//! }
//! ```
//! The binary reads `ph_config.json` from the working directory. A missing file
//! means defaults; a file that exists but cannot be parsed is an error.

use crate::Aqueous::Species;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// default name of the configuration file
pub const CONFIG_FILE: &str = "ph_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed config file '{path}': {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

/// Paths to the acid and base formula stores.
///
/// # Fields
/// * `acids` - JSON store of Ka values
/// * `bases` - JSON store of Kb values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub acids: String,
    pub bases: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            acids: "acids.json".to_string(),
            bases: "bases.json".to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads the configuration from a JSON file, or returns the defaults when the file
    /// does not exist.
    pub fn load(config_file: &str) -> Result<StoreConfig, ConfigError> {
        if !Path::new(config_file).exists() {
            info!("no config file '{}', using default store paths", config_file);
            return Ok(StoreConfig::default());
        }
        let content = fs::read_to_string(config_file).map_err(|source| ConfigError::Io {
            path: config_file.to_string(),
            source,
        })?;
        let config: StoreConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
                path: config_file.to_string(),
                source,
            })?;
        info!("store paths loaded from '{}': {:?}", config_file, config);
        Ok(config)
    }

    /// store file of the given branch
    pub fn path_for(&self, species: Species) -> &str {
        match species {
            Species::Acid => &self.acids,
            Species::Base => &self.bases,
        }
    }
}
