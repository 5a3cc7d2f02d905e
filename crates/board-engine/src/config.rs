//! Session configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use board_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which colors the local client is allowed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Client {
    #[default]
    Both,
    White,
    Black,
    None,
}

impl Client {
    /// Returns true if this client may pick up pieces of `color`.
    pub const fn can_operate(self, color: Color) -> bool {
        match self {
            Client::Both => true,
            Client::None => false,
            Client::White => matches!(color, Color::White),
            Client::Black => matches!(color, Color::Black),
        }
    }
}

impl FromStr for Client {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Client::Both),
            "white" => Ok(Client::White),
            "black" => Ok(Client::Black),
            "none" => Ok(Client::None),
            other => Err(format!(
                "unknown client '{}', expected both, white, black or none",
                other
            )),
        }
    }
}

/// Configuration injected into a [`Session`](crate::Session).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Colors the local client may operate.
    pub client: Client,

    /// Starting layout in placement notation. The fixed initial layout is
    /// used when absent.
    pub layout: Option<String>,
}

impl BoardConfig {
    /// File name searched for by [`BoardConfig::discover`].
    pub const FILE_NAME: &'static str = "board.toml";

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded board config");
        Ok(config)
    }

    /// Looks for `board.toml` in the current directory or its parents and
    /// loads the first one found, falling back to defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        Self::discover_in(Path::new("."))
    }

    /// Like [`BoardConfig::discover`], starting from `base` instead of the
    /// current directory.
    pub fn discover_in(base: &Path) -> Result<Self, ConfigError> {
        for dir in [base.to_path_buf(), base.join(".."), base.join("../..")] {
            let path = dir.join(Self::FILE_NAME);
            if path.exists() {
                return Self::load(path);
            }
        }

        tracing::debug!("no {} found, using defaults", Self::FILE_NAME);
        Ok(Self::default())
    }
}
