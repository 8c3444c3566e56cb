use std::path::PathBuf;

/// A board needs at least one row and one column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("board dimensions must be positive (got {height}x{width})")]
    Zero { height: usize, width: usize },
}

/// Unknown board size preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown board size '{0}' (expected 'small', 'medium', or 'large')")]
pub struct ParseBoardSizeError(pub String);

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Dimensions(#[from] DimensionError),
}
