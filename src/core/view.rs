//! Everything the rendering layer needs to draw one team's roster page.

use serde::Serialize;
use tracing::instrument;

use super::contract::Contract;
use super::limits::{LimitViolation, validate_roster};
use super::partition::{PartitionedRoster, RosterGroup, RosterPartitioner};
use super::salary::{SeasonPhase, TeamCap};
use crate::config::Config;
use crate::input::TeamSnapshot;
use crate::utils::format::{format_salary, pluralize_players};

/// Who is looking at the roster.
///
/// Passed in explicitly by the caller; nothing in the crate reads a current
/// user from ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Viewer {
    /// The viewer's own team in this league, if they manage one.
    pub team_id: Option<i64>,
}

impl Viewer {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { team_id: None }
    }

    #[must_use]
    pub const fn team(team_id: i64) -> Self {
        Self {
            team_id: Some(team_id),
        }
    }
}

/// Actions offered on a roster page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeAction {
    /// Offer a trade from the viewer's team to the roster's team.
    ProposeTrade { from_team_id: i64, to_team_id: i64 },
    None,
}

impl TradeAction {
    /// A trade can be proposed by anyone who manages a different team in the league.
    #[must_use]
    pub const fn for_viewer(viewer: &Viewer, team_id: i64) -> Self {
        match viewer.team_id {
            Some(own) if own != team_id => Self::ProposeTrade {
                from_team_id: own,
                to_team_id: team_id,
            },
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn is_offered(&self) -> bool {
        matches!(self, Self::ProposeTrade { .. })
    }
}

/// Counts and cap figures shown on a team's roster card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSummary {
    pub team_id: i64,
    pub team_name: String,
    pub phase: SeasonPhase,
    pub active_count: usize,
    pub ir_count: usize,
    pub rookie_development_count: usize,
    pub salary_used: u32,
    pub cap: TeamCap,
    pub cap_space: i64,
    pub over_cap: bool,
}

impl RosterSummary {
    #[must_use]
    pub fn new(team: &TeamSnapshot, roster: &PartitionedRoster<'_>, cap: TeamCap) -> Self {
        let salary_used = roster.salary_used();
        let cap_space = cap.space(salary_used);
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            phase: cap.phase,
            active_count: roster.active.len(),
            ir_count: roster.active_ir.len(),
            rookie_development_count: roster.rookie_development.len(),
            salary_used,
            cap,
            cap_space,
            over_cap: cap_space < 0,
        }
    }

    /// `Roster size: 22 players (+1 IR)`
    #[must_use]
    pub fn roster_size_line(&self) -> String {
        let mut line = format!("Roster size: {}", pluralize_players(self.active_count));
        if self.ir_count > 0 {
            line.push_str(&format!(" (+{} IR)", self.ir_count));
        }
        line
    }

    /// `Salary used/cap: $198/$210`
    #[must_use]
    pub fn salary_line(&self) -> String {
        format!(
            "Salary used/cap: {}/{}",
            format_salary(self.salary_used),
            format_salary(self.cap.effective)
        )
    }

    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} | {}", self.roster_size_line(), self.salary_line())
    }
}

/// One team's roster page.
#[derive(Debug, Clone, Serialize)]
pub struct TeamRosterView<'a> {
    pub summary: RosterSummary,
    pub roster: PartitionedRoster<'a>,
    pub violations: Vec<LimitViolation>,
    pub trade_action: TradeAction,
}

impl<'a> TeamRosterView<'a> {
    #[must_use]
    #[instrument(skip_all, fields(team = %team.name, phase = %phase))]
    pub fn build(
        team: &'a TeamSnapshot,
        phase: SeasonPhase,
        config: &Config,
        viewer: &Viewer,
    ) -> Self {
        let cap = TeamCap::for_phase(phase, &config.caps, &team.dropped_contracts);
        let roster = RosterPartitioner::new().partition(&team.contracts);
        let violations = validate_roster(&team.contracts, phase, &config.limits, &cap);
        let summary = RosterSummary::new(team, &roster, cap);

        Self {
            summary,
            roster,
            violations,
            trade_action: TradeAction::for_viewer(viewer, team.id),
        }
    }

    /// Groups in display order, skipping empty ones.
    pub fn sections(&self) -> impl Iterator<Item = (RosterGroup, &[&'a Contract])> + '_ {
        self.roster
            .groups()
            .filter(|(_, contracts)| !contracts.is_empty())
    }

    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }
}
