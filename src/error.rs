// Error types shared across the crate.
// UI operations never surface these; they degrade to no-ops instead.

use thiserror::Error;

/// Why a topic module did not execute.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("topic module not found: {locator}")]
    Missing { locator: String },

    #[error("failed to read {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {locator} failed: {source}")]
    Http {
        locator: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid locator {locator}: {source}")]
    InvalidLocator {
        locator: String,
        #[source]
        source: url::ParseError,
    },

    #[error("locator escapes the asset root: {locator}")]
    OutsideRoot { locator: String },

    #[error("malformed topic module {locator}: {reason}")]
    Malformed { locator: String, reason: String },
}

impl LoadError {
    pub fn locator(&self) -> &str {
        match self {
            Self::Missing { locator }
            | Self::Io { locator, .. }
            | Self::Http { locator, .. }
            | Self::InvalidLocator { locator, .. }
            | Self::OutsideRoot { locator }
            | Self::Malformed { locator, .. } => locator,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard requires a secure context")]
    InsecureContext,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
