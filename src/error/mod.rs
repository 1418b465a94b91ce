//! Errors from loading snapshots, reading config and writing output.
//!
//! Partitioning itself never fails. Every [`RosterError`] maps to an
//! [`ErrorCode`] and can be flattened into a [`StructuredError`] for JSON output.

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("Team not found: {query}")]
    TeamNotFound {
        query: String,
        available: Vec<String>,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RosterError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) | Self::Yaml(_) | Self::Serialization(_) => {
                ErrorCode::SerializationError
            }
            Self::InvalidInput(_) => ErrorCode::InputInvalid,
            Self::UnsupportedFormat(_) => ErrorCode::InputFormatUnsupported,
            Self::TeamNotFound { .. } => ErrorCode::TeamNotFound,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
        }
    }

    /// Fields a caller can act on, such as the team names that do exist.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::TeamNotFound { query, available } => {
                Some(serde_json::json!({ "team": query, "available": available }))
            }
            Self::UnsupportedFormat(path) => Some(serde_json::json!({ "path": path })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_roster_error(self)
    }
}

/// The `status.error` payload of a JSON error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub numeric_code: u16,
    pub message: String,
    /// Context-aware when the error has context, else the code's default.
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub recoverable: bool,
    /// `input`, `config` or `io`.
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn from_roster_error(err: &RosterError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&RosterError> for StructuredError {
    fn from(err: &RosterError) -> Self {
        Self::from_roster_error(err)
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
