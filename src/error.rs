//! Error types for a sanitization pass.
//!
//! Every variant is fatal: the pass stops at the first error and nothing is
//! salvaged from a partially processed document.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MapCleanError>;

#[derive(Error, Debug)]
pub enum MapCleanError {
    /// Input file missing, unreadable, or not valid UTF-8.
    #[error("failed to read map file '{}'", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input is not JSON, or does not have the map document shape.
    #[error("failed to parse map document from '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode map document")]
    Serialize(#[source] serde_json::Error),

    /// Destination cannot be created or written.
    #[error("failed to write map file '{}'", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}'", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown preset '{0}', expected 'classic' or 'thorium'")]
    InvalidPreset(String),

    #[error("invalid log level '{0}', expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),
}
