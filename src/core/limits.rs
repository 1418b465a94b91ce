//! Roster lock checks.
//!
//! Limits are reported as data: a roster over its limits is still a valid
//! roster to display, it just cannot be locked.

use serde::Serialize;
use tracing::debug;

use super::contract::Contract;
use super::partition::{RosterPartitioner, salary_used};
use super::salary::{SeasonPhase, TeamCap};
use crate::config::RosterLimitsConfig;
use crate::utils::format::format_salary;

/// Which limit was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitRule {
    KeeperContracts,
    KeeperSalary,
    NonKeepableContract,
    PreseasonContracts,
    RookieDevelopment,
    RookieDevelopmentInternational,
    ActiveContracts,
    InjuredReserve,
    SalaryCap,
}

impl LimitRule {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeeperContracts => "keeper_contracts",
            Self::KeeperSalary => "keeper_salary",
            Self::NonKeepableContract => "non_keepable_contract",
            Self::PreseasonContracts => "preseason_contracts",
            Self::RookieDevelopment => "rookie_development",
            Self::RookieDevelopmentInternational => "rookie_development_international",
            Self::ActiveContracts => "active_contracts",
            Self::InjuredReserve => "injured_reserve",
            Self::SalaryCap => "salary_cap",
        }
    }
}

impl std::fmt::Display for LimitRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One broken limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitViolation {
    pub rule: LimitRule,
    pub limit: u32,
    pub actual: u32,
    pub message: String,
}

impl LimitViolation {
    fn count(rule: LimitRule, limit: usize, actual: usize, what: &str) -> Option<Self> {
        (actual > limit).then(|| Self {
            rule,
            limit: saturating_u32(limit),
            actual: saturating_u32(actual),
            message: format!("{actual} {what} exceeds the limit of {limit}"),
        })
    }

    fn salary(rule: LimitRule, cap: u32, used: u32) -> Option<Self> {
        (used > cap).then(|| Self {
            rule,
            limit: cap,
            actual: used,
            message: format!(
                "salary used {} exceeds the cap of {}",
                format_salary(used),
                format_salary(cap)
            ),
        })
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Check a team's contracts against the limits of `phase`.
#[must_use]
pub fn validate_roster(
    contracts: &[Contract],
    phase: SeasonPhase,
    limits: &RosterLimitsConfig,
    cap: &TeamCap,
) -> Vec<LimitViolation> {
    let violations = match phase {
        SeasonPhase::Keeper => keeper_violations(contracts, limits, cap),
        SeasonPhase::Preseason | SeasonPhase::RegularSeason | SeasonPhase::PostSeason => {
            season_violations(contracts, phase, limits, cap)
        }
    };

    debug!(
        phase = %phase,
        contracts = contracts.len(),
        violations = violations.len(),
        "validated roster"
    );

    violations
}

fn keeper_violations(
    contracts: &[Contract],
    limits: &RosterLimitsConfig,
    cap: &TeamCap,
) -> Vec<LimitViolation> {
    let mut violations = Vec::new();

    let kept: Vec<&Contract> = contracts
        .iter()
        .filter(|c| c.is_active() && c.kind.is_keepable() && !c.kind.is_rookie_development())
        .collect();

    violations.extend(LimitViolation::count(
        LimitRule::KeeperContracts,
        limits.keeper_contracts,
        kept.len(),
        "kept contracts",
    ));
    violations.extend(LimitViolation::salary(
        LimitRule::KeeperSalary,
        cap.effective,
        salary_used(&kept),
    ));

    let non_keepable: Vec<&str> = contracts
        .iter()
        .filter(|c| c.is_active() && !c.kind.is_keepable())
        .map(Contract::display_name)
        .collect();
    if !non_keepable.is_empty() {
        violations.push(LimitViolation {
            rule: LimitRule::NonKeepableContract,
            limit: 0,
            actual: saturating_u32(non_keepable.len()),
            message: format!("contracts that cannot be kept: {}", non_keepable.join(", ")),
        });
    }

    violations
}

fn season_violations(
    contracts: &[Contract],
    phase: SeasonPhase,
    limits: &RosterLimitsConfig,
    cap: &TeamCap,
) -> Vec<LimitViolation> {
    let roster = RosterPartitioner::new().partition(contracts);
    let (international, domestic): (Vec<&Contract>, Vec<&Contract>) = roster
        .rookie_development
        .iter()
        .copied()
        .filter(|c| !c.is_ir)
        .partition(|c| c.kind.is_international());

    let mut violations = Vec::new();

    if phase == SeasonPhase::Preseason {
        violations.extend(LimitViolation::count(
            LimitRule::PreseasonContracts,
            limits.preseason_contracts,
            roster.active.len() + domestic.len() + international.len(),
            "roster contracts",
        ));
    } else {
        violations.extend(LimitViolation::count(
            LimitRule::RookieDevelopment,
            limits.rookie_development,
            domestic.len(),
            "rookie development contracts",
        ));
        violations.extend(LimitViolation::count(
            LimitRule::RookieDevelopmentInternational,
            limits.rookie_development_international,
            international.len(),
            "international rookie development contracts",
        ));
        violations.extend(LimitViolation::count(
            LimitRule::ActiveContracts,
            limits.active_contracts,
            roster.active.len(),
            "active contracts",
        ));
    }

    // Every contract on IR takes a slot, rookie development included.
    let injured_reserve = contracts.iter().filter(|c| c.is_active() && c.is_ir).count();
    violations.extend(LimitViolation::count(
        LimitRule::InjuredReserve,
        limits.injured_reserve,
        injured_reserve,
        "injured reserve contracts",
    ));

    violations.extend(LimitViolation::salary(
        LimitRule::SalaryCap,
        cap.effective,
        roster.salary_used(),
    ));

    violations
}
