//! Roster partitioning: split a team's contracts into display groups.
//!
//! Classification, first match wins:
//!
//! 1. Rookie development kinds (domestic or international) go to
//!    `rookie_development`, whatever their status or IR flag.
//! 2. Active contracts of an active-on-team kind go to `active`, or to
//!    `active_ir` when on injured reserve.
//! 3. Everything else (free agents, replaced or expired contracts) is left
//!    out of every group.

use std::cmp::{Ordering, Reverse};

use serde::Serialize;
use tracing::{debug, trace};

use super::contract::Contract;
use crate::utils::collate::compare_names;

/// The display group a contract belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterGroup {
    Active,
    ActiveIr,
    RookieDevelopment,
}

impl RosterGroup {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::ActiveIr => "Injured Reserve",
            Self::RookieDevelopment => "Rookie Development",
        }
    }
}

/// Decide which group, if any, a contract is shown in.
#[must_use]
pub fn classify(contract: &Contract) -> Option<RosterGroup> {
    if contract.kind.is_rookie_development() {
        return Some(RosterGroup::RookieDevelopment);
    }
    if contract.is_active() && contract.kind.is_active_on_team() {
        return Some(if contract.is_ir {
            RosterGroup::ActiveIr
        } else {
            RosterGroup::Active
        });
    }
    None
}

/// A team's contracts, grouped and ordered for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartitionedRoster<'a> {
    /// Salary descending, then year descending, then name.
    pub active: Vec<&'a Contract>,
    /// Input order.
    pub active_ir: Vec<&'a Contract>,
    /// Domestic before international; each by year descending, then name.
    pub rookie_development: Vec<&'a Contract>,
}

impl<'a> PartitionedRoster<'a> {
    /// Contracts of one group.
    #[must_use]
    pub fn group(&self, group: RosterGroup) -> &[&'a Contract] {
        match group {
            RosterGroup::Active => &self.active,
            RosterGroup::ActiveIr => &self.active_ir,
            RosterGroup::RookieDevelopment => &self.rookie_development,
        }
    }

    /// Groups in display order, each with its contracts.
    pub fn groups(&self) -> impl Iterator<Item = (RosterGroup, &[&'a Contract])> + '_ {
        [
            RosterGroup::Active,
            RosterGroup::ActiveIr,
            RosterGroup::RookieDevelopment,
        ]
        .into_iter()
        .map(move |group| (group, self.group(group)))
    }

    /// Total number of contracts placed in any group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len() + self.active_ir.len() + self.rookie_development.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Salary charged to the cap: the flat sum over the `active` group.
    #[must_use]
    pub fn salary_used(&self) -> u32 {
        salary_used(&self.active)
    }
}

/// Sum of salaries, independent of order.
#[must_use]
pub fn salary_used(contracts: &[&Contract]) -> u32 {
    contracts
        .iter()
        .map(|contract| u32::from(contract.salary))
        .sum()
}

/// Stateless partitioner. Holds nothing between calls; every call recomputes
/// from the snapshot it is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterPartitioner;

impl RosterPartitioner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify and order one team's contracts.
    #[must_use]
    pub fn partition<'a>(&self, contracts: &'a [Contract]) -> PartitionedRoster<'a> {
        let mut roster = PartitionedRoster::default();

        for contract in contracts {
            match classify(contract) {
                Some(RosterGroup::Active) => roster.active.push(contract),
                Some(RosterGroup::ActiveIr) => roster.active_ir.push(contract),
                Some(RosterGroup::RookieDevelopment) => roster.rookie_development.push(contract),
                None => trace!(
                    contract_id = contract.id,
                    kind = ?contract.kind,
                    status = ?contract.status,
                    "contract not shown on roster"
                ),
            }
        }

        roster.active.sort_by(|a, b| compare_active(a, b));
        roster
            .rookie_development
            .sort_by(|a, b| compare_rookie_development(a, b));

        debug!(
            input = contracts.len(),
            active = roster.active.len(),
            active_ir = roster.active_ir.len(),
            rookie_development = roster.rookie_development.len(),
            "partitioned roster"
        );

        roster
    }
}

/// Shorthand for `RosterPartitioner::new().partition(contracts)`.
#[must_use]
pub fn partition(contracts: &[Contract]) -> PartitionedRoster<'_> {
    RosterPartitioner::new().partition(contracts)
}

fn compare_active(a: &Contract, b: &Contract) -> Ordering {
    b.salary
        .cmp(&a.salary)
        .then_with(|| b.year_number.cmp(&a.year_number))
        .then_with(|| compare_names(a.display_name(), b.display_name()))
}

fn compare_rookie_development(a: &Contract, b: &Contract) -> Ordering {
    (a.kind.is_international(), Reverse(a.year_number))
        .cmp(&(b.kind.is_international(), Reverse(b.year_number)))
        .then_with(|| compare_names(a.display_name(), b.display_name()))
}
