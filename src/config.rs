//! Configuration loading and defaults
//!
//! Configuration lives in a TOML file under the platform config directory
//! (`termgate/config.toml`). Every field is optional; a missing file or a
//! partial file fills in with defaults, so a fresh install runs without
//! any setup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Animation pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-character tick pacing in milliseconds.
    pub tick_ms: u64,
    /// Recognized but reserved; the reveal engine does not chunk text.
    pub text_chunk_size: usize,
    /// Pause between boot-log lines in milliseconds.
    pub boot_delay_ms: u64,
    /// Pause between access-sequence lines in milliseconds.
    pub access_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 15,
            text_chunk_size: 15,
            boot_delay_ms: 200,
            access_delay_ms: 300,
        }
    }
}

/// Gate behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Demo passphrase, compared in plain text. This is a visual effect,
    /// not access control.
    pub passphrase: String,
    /// Destination opened after a granted verdict (URL or file path).
    pub target: String,
    /// Wait after the granted sequence before navigating, in milliseconds.
    pub redirect_delay_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            passphrase: "demo".to_string(),
            target: "https://example.com".to_string(),
            redirect_delay_ms: 1000,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub gate: GateConfig,
    /// Theme name: "phosphor", "classic" or "ocean".
    pub theme: String,
}

impl Config {
    /// Path of the config file under the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("termgate").join("config.toml"))
    }

    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to the default location, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Per-character tick pacing.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.animation.tick_ms)
    }

    /// Inter-line pause for the boot sequence.
    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.animation.boot_delay_ms)
    }

    /// Inter-line pause for the access sequence.
    pub fn access_delay(&self) -> Duration {
        Duration::from_millis(self.animation.access_delay_ms)
    }

    /// Wait between the granted sequence and navigation.
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.gate.redirect_delay_ms)
    }
}
