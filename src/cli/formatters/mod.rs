//! Output formatters for CLI commands
//!
//! Each report renders to every output format (Human, JSON, JSONL, Plain, TSV).

mod roster;
mod summary;
mod violations;

pub use roster::{ContractRow, RosterReport};
pub use summary::SummaryReport;
pub use violations::{TeamValidation, ValidationReport};
