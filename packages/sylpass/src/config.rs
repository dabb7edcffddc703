//! Generator configuration
//!
//! Settings are read from `<config_dir>/sylpass/config.json` when present.
//! Missing fields fall back to the defaults below; command line arguments
//! take precedence over both.

use crate::table::TableVariant;
use crate::{PwgenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default password length in characters
pub const DEFAULT_LENGTH: usize = 13;

/// Default number of passwords per run
pub const DEFAULT_COUNT: usize = 1;

const CONFIG_DIR: &str = "sylpass";
const CONFIG_FILE: &str = "config.json";

/// Settings for a generation run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Characters per password
    #[serde(default = "default_length")]
    pub length: usize,
    /// Passwords to generate
    #[serde(default = "default_count")]
    pub count: usize,
    /// Phoneme table to draw from
    #[serde(default = "default_variant")]
    pub variant: TableVariant,
    /// Fixed seed for reproducible output; read from the OS when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_variant() -> TableVariant {
    TableVariant::Unambiguous
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            count: default_count(),
            variant: default_variant(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Default location of the configuration file
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`PwgenError::Config`] if the file cannot be read, is not
    /// valid JSON, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PwgenError::config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| PwgenError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded generator configuration");
        Ok(config)
    }

    /// Load the configuration file from the default location, if any
    ///
    /// # Errors
    ///
    /// Returns an error only if a file exists but cannot be loaded.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            Some(_) => Ok(Self::default()),
            None => {
                warn!("Could not determine OS config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check that the settings describe a valid run
    ///
    /// # Errors
    ///
    /// Returns [`PwgenError::InvalidLength`] for a zero length.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(PwgenError::InvalidLength(self.length));
        }
        Ok(())
    }
}
