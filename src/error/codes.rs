//! Numeric error codes carried in JSON error responses.
//!
//! - 1xx: the snapshot or the team selection
//! - 3xx: configuration files and `FBKL_*` overrides
//! - 6xx: reading files or writing output

use serde::{Deserialize, Serialize};

/// Stable code for each failure, printed as `E<n>` (`TeamNotFound` is E102).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// E101: the snapshot parsed but has no recognisable league or team shape
    InputInvalid,
    /// E102: `--team` matched neither an id nor a name
    TeamNotFound,
    /// E103: the snapshot extension is not json, yaml or yml
    InputFormatUnsupported,

    /// E302: bad TOML or an unparsable override
    ConfigInvalid,
    /// E304: `--config` or `FBKL_CONFIG` names a file that is not there
    ConfigMissingRequired,

    /// E605: JSON or YAML could not be encoded or decoded
    SerializationError,
    /// E606
    IoError,
}

impl ErrorCode {
    const ALL: [Self; 7] = [
        Self::InputInvalid,
        Self::TeamNotFound,
        Self::InputFormatUnsupported,
        Self::ConfigInvalid,
        Self::ConfigMissingRequired,
        Self::SerializationError,
        Self::IoError,
    ];

    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::InputInvalid => 101,
            Self::TeamNotFound => 102,
            Self::InputFormatUnsupported => 103,
            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,
            Self::SerializationError => 605,
            Self::IoError => 606,
        }
    }

    /// `E102` style label.
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Fallback hint when the error carries no context of its own.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::InputInvalid => "Check that the snapshot matches the league roster payload (league.teams[].contracts[])",
            Self::TeamNotFound => "Run `fbkl-roster summary <input>` to list the teams in the snapshot",
            Self::InputFormatUnsupported => "Use a .json, .yaml or .yml snapshot, or pass `-` to read JSON from stdin",
            Self::ConfigInvalid => "Check TOML syntax in the config file and the values of FBKL_* environment variables",
            Self::ConfigMissingRequired => "Pass --config <path> or set FBKL_CONFIG",
            Self::SerializationError => "Re-export the snapshot; a field has an unexpected type or value",
            Self::IoError => "Check that the snapshot path exists and is readable",
        }
    }

    /// Whether fixing the input or flags can make the command succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError)
    }

    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "input",
            3 => "config",
            _ => "io",
        }
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code_string())
    }
}
