//! Salary cap figures for a team.
//!
//! The cap a team plays under depends on where the league is in its season.
//! Outside the keeper deadline, contracts a team dropped earlier in the season
//! keep costing it part of their salary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::contract::Contract;
use crate::config::SalaryCapConfig;
use crate::error::RosterError;

/// The part of the season a roster is evaluated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonPhase {
    /// Keeper deadline before the season.
    Keeper,
    /// Auctions and rookie draft, up to the final preseason roster lock.
    Preseason,
    #[default]
    RegularSeason,
    /// After the in-season free agent auction closes, through the playoffs.
    PostSeason,
}

impl SeasonPhase {
    pub const ALL: [Self; 4] = [
        Self::Keeper,
        Self::Preseason,
        Self::RegularSeason,
        Self::PostSeason,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keeper => "keeper",
            Self::Preseason => "preseason",
            Self::RegularSeason => "regular_season",
            Self::PostSeason => "post_season",
        }
    }

    /// Dropped contracts only count against the cap once the keeper deadline has passed.
    #[must_use]
    pub const fn applies_drop_penalties(self) -> bool {
        !matches!(self, Self::Keeper)
    }
}

impl std::fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonPhase {
    type Err = RosterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('-', "_").as_str() {
            "keeper" => Ok(Self::Keeper),
            "preseason" | "pre_season" => Ok(Self::Preseason),
            "regular_season" | "regular" => Ok(Self::RegularSeason),
            "post_season" | "postseason" | "playoffs" => Ok(Self::PostSeason),
            _ => Err(RosterError::Config(format!(
                "invalid season phase {value} (expected keeper|preseason|regular_season|post_season)"
            ))),
        }
    }
}

/// Cap penalty for one dropped contract: `penalty_percent` of its salary, rounded up.
/// Kinds that never count toward the cap cost nothing.
#[must_use]
pub fn drop_penalty(contract: &Contract, penalty_percent: u32) -> u32 {
    if !contract.kind.counts_toward_cap() {
        return 0;
    }
    u32::from(contract.salary)
        .saturating_mul(penalty_percent)
        .div_ceil(100)
}

/// A team's cap for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamCap {
    pub phase: SeasonPhase,
    /// League cap for the phase before penalties.
    pub base: u32,
    /// Sum of dropped-contract penalties.
    pub penalty: u32,
    /// `base - penalty`, floored at zero.
    pub effective: u32,
}

impl TeamCap {
    #[must_use]
    pub fn for_phase(phase: SeasonPhase, caps: &SalaryCapConfig, dropped: &[Contract]) -> Self {
        let base = caps.for_phase(phase);
        let penalty = if phase.applies_drop_penalties() {
            dropped
                .iter()
                .map(|contract| drop_penalty(contract, caps.drop_penalty_percent))
                .fold(0, u32::saturating_add)
        } else {
            0
        };
        Self {
            phase,
            base,
            penalty,
            effective: base.saturating_sub(penalty),
        }
    }

    /// Remaining room under the cap; negative when over.
    #[must_use]
    pub fn space(&self, salary_used: u32) -> i64 {
        i64::from(self.effective) - i64::from(salary_used)
    }
}
