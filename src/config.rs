use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{BoardSize, Session};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Board dimensions: a preset, optionally replaced by an explicit
/// height and width.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: BoardSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
}

impl BoardConfig {
    /// (height, width) to play on. Custom dimensions win over the preset.
    pub fn dimensions(&self) -> (usize, usize) {
        match (self.height, self.width) {
            (Some(height), Some(width)) => (height, width),
            _ => self.size.dimensions(),
        }
    }

    /// Custom dimensions set, so the preset is not used
    pub fn is_custom(&self) -> bool {
        self.height.is_some() && self.width.is_some()
    }

    /// Start a game with these dimensions
    pub fn new_session(&self) -> Result<Session, ConfigError> {
        let (height, width) = self.dimensions();
        Ok(Session::new(height, width)?)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub filter: String,
    /// Log file. The interactive UI only logs when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.board.height, self.board.width) {
            (Some(_), None) | (None, Some(_)) => {
                return Err(ConfigError::Validation(
                    "board.height and board.width must be set together".into(),
                ));
            }
            (Some(0), _) => {
                return Err(ConfigError::Validation("board.height must be > 0".into()));
            }
            (_, Some(0)) => {
                return Err(ConfigError::Validation("board.width must be > 0".into()));
            }
            _ => {}
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
