use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::{ErrorCode, Result, RosterError, StructuredError};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Styled tables for a terminal
    #[default]
    Human,
    /// One pretty-printed response envelope
    Json,
    /// One compact JSON object per row
    Jsonl,
    /// Unstyled lines, stable enough to diff
    Plain,
    /// Header row plus tab-separated rows
    Tsv,
}

impl OutputFormat {
    /// Errors are reported as JSON for these formats.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// Envelope around every JSON response.
#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    #[serde(rename = "error")]
    StructuredError {
        /// Error code enum value (e.g., "TEAM_NOT_FOUND")
        code: ErrorCode,
        /// Numeric error code (e.g., 102)
        numeric_code: u16,
        message: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    robot_ok_with_warnings(data, Vec::new())
}

pub fn robot_ok_with_warnings<T: Serialize>(data: T, warnings: Vec<String>) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings,
    }
}

/// Create a robot error response from a `RosterError` with structured information.
pub fn robot_error_structured(err: &RosterError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: err.to_structured().into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

impl From<StructuredError> for RobotStatus {
    fn from(err: StructuredError) -> Self {
        Self::StructuredError {
            code: err.code,
            numeric_code: err.numeric_code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
            recoverable: err.recoverable,
            category: err.category,
        }
    }
}

/// Print a response envelope as pretty JSON.
pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    let payload = serde_json::to_string_pretty(response).map_err(serialize_error)?;
    println!("{payload}");
    Ok(())
}

fn serialize_error(err: serde_json::Error) -> RosterError {
    RosterError::Serialization(format!("serialize output: {err}"))
}

/// A report that renders itself in every [`OutputFormat`].
pub trait Formattable {
    fn format(&self, fmt: OutputFormat) -> Result<String>;
}

/// Render and print, dropping trailing newlines.
pub fn emit<T: Formattable>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = value.format(format)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end_matches('\n'));
    }
    Ok(())
}

/// Serialize `data` wrapped in a [`RobotResponse`].
pub fn robot_json<T: Serialize>(data: T, warnings: Vec<String>) -> Result<String> {
    serde_json::to_string_pretty(&robot_ok_with_warnings(data, warnings)).map_err(serialize_error)
}

/// One compact JSON object per item.
pub fn jsonl<T: Serialize>(items: impl IntoIterator<Item = T>) -> Result<String> {
    let lines = items
        .into_iter()
        .map(|item| serde_json::to_string(&item))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(serialize_error)?;
    Ok(lines.join("\n"))
}

/// Replace characters that would break a TSV row.
#[must_use]
pub fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n'], " ")
}
