use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::salary::SeasonPhase;
use crate::error::{Result, RosterError};

/// League rules and display settings, layered from defaults, config files and
/// `FBKL_*` environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub caps: SalaryCapConfig,
    #[serde(default)]
    pub limits: RosterLimitsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (or `FBKL_CONFIG`) replaces file discovery; otherwise
    /// the global file is applied first and `./fbkl.toml` on top of it.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("FBKL_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch)?,
                None => {
                    return Err(RosterError::MissingConfig(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global)?;
            }
            if let Some(project) = Self::load_patch(Path::new("fbkl.toml"))? {
                config.merge_patch(project)?;
            }
        }

        config.apply_env_overrides()?;

        tracing::debug!(
            phase = %config.display.default_phase,
            regular_season_cap = config.caps.regular_season,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Parse a TOML document on top of the defaults. Used by tests and callers
    /// that manage their own files.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| RosterError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch)?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("fbkl/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| RosterError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| RosterError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) -> Result<()> {
        if let Some(patch) = patch.caps {
            self.caps.merge(patch)?;
        }
        if let Some(patch) = patch.limits {
            self.limits.merge(patch);
        }
        if let Some(patch) = patch.display {
            self.display.merge(patch);
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `FBKL_*` overrides read through `lookup`.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };

        if let Some(value) = env.u32("FBKL_CAP_KEEPER")? {
            self.caps.keeper = value;
        }
        if let Some(value) = env.u32("FBKL_CAP_PRESEASON")? {
            self.caps.preseason = value;
        }
        if let Some(value) = env.u32("FBKL_CAP_REGULAR_SEASON")? {
            self.caps.regular_season = value;
        }
        if let Some(value) = env.u32("FBKL_CAP_POST_SEASON")? {
            self.caps.post_season = value;
        }
        if let Some(value) = env.u32("FBKL_CAP_DROP_PENALTY_PERCENT")? {
            self.caps.drop_penalty_percent =
                checked_penalty_percent(value, "FBKL_CAP_DROP_PENALTY_PERCENT")?;
        }

        if let Some(value) = env.usize("FBKL_LIMIT_KEEPER_CONTRACTS")? {
            self.limits.keeper_contracts = value;
        }
        if let Some(value) = env.usize("FBKL_LIMIT_PRESEASON_CONTRACTS")? {
            self.limits.preseason_contracts = value;
        }
        if let Some(value) = env.usize("FBKL_LIMIT_ACTIVE_CONTRACTS")? {
            self.limits.active_contracts = value;
        }
        if let Some(value) = env.usize("FBKL_LIMIT_ROOKIE_DEVELOPMENT")? {
            self.limits.rookie_development = value;
        }
        if let Some(value) = env.usize("FBKL_LIMIT_ROOKIE_DEVELOPMENT_INTERNATIONAL")? {
            self.limits.rookie_development_international = value;
        }
        if let Some(value) = env.usize("FBKL_LIMIT_INJURED_RESERVE")? {
            self.limits.injured_reserve = value;
        }

        if let Some(value) = env.string("FBKL_DEFAULT_PHASE") {
            self.display.default_phase = value.parse()?;
        }
        if let Some(value) = env.usize("FBKL_DISPLAY_NAME_WIDTH")? {
            self.display.name_width = value;
        }
        if let Some(value) = env.bool("FBKL_DISPLAY_SHOW_POSITIONS") {
            self.display.show_positions = value;
        }

        Ok(())
    }
}

/// League salary caps per season phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryCapConfig {
    pub keeper: u32,
    pub preseason: u32,
    pub regular_season: u32,
    pub post_season: u32,
    /// Share of a dropped contract's salary still charged to the cap.
    pub drop_penalty_percent: u32,
}

impl Default for SalaryCapConfig {
    fn default() -> Self {
        Self {
            keeper: 100,
            preseason: 210,
            regular_season: 200,
            post_season: 220,
            drop_penalty_percent: 20,
        }
    }
}

impl SalaryCapConfig {
    #[must_use]
    pub const fn for_phase(&self, phase: SeasonPhase) -> u32 {
        match phase {
            SeasonPhase::Keeper => self.keeper,
            SeasonPhase::Preseason => self.preseason,
            SeasonPhase::RegularSeason => self.regular_season,
            SeasonPhase::PostSeason => self.post_season,
        }
    }

    fn merge(&mut self, patch: SalaryCapPatch) -> Result<()> {
        if let Some(value) = patch.keeper {
            self.keeper = value;
        }
        if let Some(value) = patch.preseason {
            self.preseason = value;
        }
        if let Some(value) = patch.regular_season {
            self.regular_season = value;
        }
        if let Some(value) = patch.post_season {
            self.post_season = value;
        }
        if let Some(value) = patch.drop_penalty_percent {
            self.drop_penalty_percent = checked_penalty_percent(value, "caps.drop_penalty_percent")?;
        }
        Ok(())
    }
}

/// A penalty above the dropped salary itself is a typo, not a rule.
fn checked_penalty_percent(value: u32, source: &str) -> Result<u32> {
    if value > 100 {
        return Err(RosterError::Config(format!(
            "{source} must be between 0 and 100, got {value}"
        )));
    }
    Ok(value)
}

/// Contract count limits checked at roster locks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterLimitsConfig {
    /// Non-development contracts a team may keep at the keeper deadline.
    pub keeper_contracts: usize,
    /// All non-IR roster contracts during the preseason.
    pub preseason_contracts: usize,
    /// Veteran or rookie-scale contracts in season.
    pub active_contracts: usize,
    pub rookie_development: usize,
    pub rookie_development_international: usize,
    pub injured_reserve: usize,
}

impl Default for RosterLimitsConfig {
    fn default() -> Self {
        Self {
            keeper_contracts: 14,
            preseason_contracts: 32,
            active_contracts: 22,
            rookie_development: 6,
            rookie_development_international: 1,
            injured_reserve: 1,
        }
    }
}

impl RosterLimitsConfig {
    fn merge(&mut self, patch: RosterLimitsPatch) {
        if let Some(value) = patch.keeper_contracts {
            self.keeper_contracts = value;
        }
        if let Some(value) = patch.preseason_contracts {
            self.preseason_contracts = value;
        }
        if let Some(value) = patch.active_contracts {
            self.active_contracts = value;
        }
        if let Some(value) = patch.rookie_development {
            self.rookie_development = value;
        }
        if let Some(value) = patch.rookie_development_international {
            self.rookie_development_international = value;
        }
        if let Some(value) = patch.injured_reserve {
            self.injured_reserve = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Phase used when `--phase` is not given.
    pub default_phase: SeasonPhase,
    /// Width of the player name column in human output.
    pub name_width: usize,
    pub show_positions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_phase: SeasonPhase::RegularSeason,
            name_width: 28,
            show_positions: true,
        }
    }
}

impl DisplayConfig {
    fn merge(&mut self, patch: DisplayPatch) {
        if let Some(value) = patch.default_phase {
            self.default_phase = value;
        }
        if let Some(value) = patch.name_width {
            self.name_width = value;
        }
        if let Some(value) = patch.show_positions {
            self.show_positions = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub caps: Option<SalaryCapPatch>,
    pub limits: Option<RosterLimitsPatch>,
    pub display: Option<DisplayPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SalaryCapPatch {
    pub keeper: Option<u32>,
    pub preseason: Option<u32>,
    pub regular_season: Option<u32>,
    pub post_season: Option<u32>,
    pub drop_penalty_percent: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RosterLimitsPatch {
    pub keeper_contracts: Option<usize>,
    pub preseason_contracts: Option<usize>,
    pub active_contracts: Option<usize>,
    pub rookie_development: Option<usize>,
    pub rookie_development_international: Option<usize>,
    pub injured_reserve: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DisplayPatch {
    pub default_phase: Option<SeasonPhase>,
    pub name_width: Option<usize>,
    pub show_positions: Option<bool>,
}

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
    }

    fn bool(&self, key: &str) -> Option<bool> {
        (self.lookup)(key).map(|value| {
            matches!(
                value.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        })
    }

    fn u32(&self, key: &str) -> Result<Option<u32>> {
        match (self.lookup)(key) {
            Some(value) => value.trim().parse::<u32>().map(Some).map_err(|err| {
                RosterError::Config(format!("invalid {key} value {value}: {err}"))
            }),
            None => Ok(None),
        }
    }

    fn usize(&self, key: &str) -> Result<Option<usize>> {
        match (self.lookup)(key) {
            Some(value) => value.trim().parse::<usize>().map(Some).map_err(|err| {
                RosterError::Config(format!("invalid {key} value {value}: {err}"))
            }),
            None => Ok(None),
        }
    }
}
