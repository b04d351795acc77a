// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TitleGraphError {
    #[error("Invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Community not found in input: {0}")]
    UnknownCommunity(String),

    #[error("Input holds several communities ({0}); pick one with --community")]
    AmbiguousCommunity(String),
}

pub type Result<T> = std::result::Result<T, TitleGraphError>;

impl TitleGraphError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to TitleGraphError::Io with unknown path.
impl From<std::io::Error> for TitleGraphError {
    fn from(source: std::io::Error) -> Self {
        TitleGraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
