use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Unable to locate index bundle to patch BASE_URL (pattern: {pattern})")]
    NoBundleFiles { pattern: String },

    #[error("BASE_URL literal not found in any bundle; patch failed ({searched} file(s) searched)")]
    BundleLiteralNotFound { searched: usize },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl PatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for a fatal error.
    pub fn exit_code(&self) -> u8 {
        match self {
            PatchError::NoBundleFiles { .. } => 1,
            PatchError::BundleLiteralNotFound { .. } => 2,
            PatchError::Config { .. }
            | PatchError::InvalidConfigValue { .. }
            | PatchError::Pattern { .. } => 3,
            PatchError::Io { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
