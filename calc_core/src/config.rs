//! # Application Configuration
//!
//! Settings shared by the GUI and CLI front ends, read from a TOML file.
//! A missing file is not an error: every field has a default.
//!
//! Default location: `<config_dir>/petal/config.toml`, e.g.
//! `~/.config/petal/config.toml` on Linux.
//!
//! ```toml
//! [appearance]
//! dark_mode = true
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! calc_core = "debug"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "petal";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub appearance: AppearanceConfig,
    pub logging: LoggingConfig,
}

/// Visual settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Start the GUI in dark mode
    pub dark_mode: bool,
}

/// Log filter settings, overridden by `RUST_LOG` when set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to every module without an override
    pub default: String,
    /// Per-module level overrides
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Build an `EnvFilter` directive string, e.g. `warn,calc_core=debug`
    pub fn filter_directive(&self) -> String {
        let mut directive = self.default.clone();
        for (module, level) in &self.modules {
            directive.push_str(&format!(",{module}={level}"));
        }
        directive
    }
}

impl AppConfig {
    /// Platform default config file path, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }

    /// Load from the default path, falling back to defaults when absent
    pub fn load() -> CalcResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&content)
            .map_err(|e| CalcError::config_error(path.display().to_string(), e.to_string()))
    }

    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as TOML text
    pub fn to_toml_string(&self) -> CalcResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}
