//! Error types for the layout crate.
//!
//! The layout pipeline itself never fails; these errors come from the
//! edges: reading settings and event files, and validating configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Failed to parse events: {0}")]
    EventParse(#[from] serde_json::Error),
}

/// Result type alias for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
