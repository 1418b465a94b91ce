//! Core roster types and logic

pub mod contract;
pub mod limits;
pub mod partition;
pub mod player;
pub mod salary;
pub mod view;

pub use contract::{Contract, ContractKind, ContractStatus};
pub use limits::{LimitRule, LimitViolation, validate_roster};
pub use partition::{
    PartitionedRoster, RosterGroup, RosterPartitioner, classify, partition, salary_used,
};
pub use player::{LeagueOrRealPlayer, LeaguePlayer, PlayerProfile, RealPlayer};
pub use salary::{SeasonPhase, TeamCap, drop_penalty};
pub use view::{RosterSummary, TeamRosterView, TradeAction, Viewer};
