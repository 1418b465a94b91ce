//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::TeamNotFound => suggest_team_not_found(context),
        ErrorCode::InputFormatUnsupported => suggest_unsupported_format(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_team_not_found(context: Option<&Value>) -> String {
    let available: Vec<&str> = context
        .and_then(|c| c.get("available"))
        .and_then(Value::as_array)
        .map(|teams| teams.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if available.is_empty() {
        return ErrorCode::TeamNotFound.suggestion().to_string();
    }

    format!(
        "Teams in this snapshot: {}. Pass one of them (name or id) to --team",
        available.join(", ")
    )
}

fn suggest_unsupported_format(context: Option<&Value>) -> String {
    match context
        .and_then(|c| c.get("path"))
        .and_then(Value::as_str)
    {
        Some(path) => format!(
            "'{path}' has no recognised extension. Rename it to .json/.yaml, or pipe it with `-`"
        ),
        None => ErrorCode::InputFormatUnsupported.suggestion().to_string(),
    }
}
