//! Roster page formatter

use console::style;
use serde::Serialize;

use crate::cli::output::{Formattable, OutputFormat, jsonl, robot_json, tsv_field};
use crate::core::contract::Contract;
use crate::core::limits::LimitViolation;
use crate::core::partition::RosterGroup;
use crate::core::view::{RosterSummary, TeamRosterView, TradeAction};
use crate::error::Result;
use crate::utils::format::{format_salary, truncate_string};

/// Partitioned rosters for one or more teams.
#[derive(Debug, Clone)]
pub struct RosterReport<'a> {
    pub views: Vec<TeamRosterView<'a>>,
    /// Width of the name column in human output.
    pub name_width: usize,
    pub show_positions: bool,
}

/// One resolved roster row.
#[derive(Debug, Clone, Serialize)]
pub struct ContractRow<'a> {
    pub team_id: i64,
    pub group: RosterGroup,
    pub contract_id: i64,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_team: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<&'a str>,
    pub salary: u16,
    pub year_number: u16,
    pub kind: &'static str,
    pub is_ir: bool,
}

impl<'a> ContractRow<'a> {
    fn new(team_id: i64, group: RosterGroup, contract: &'a Contract) -> Self {
        let player = contract.player();
        Self {
            team_id,
            group,
            contract_id: contract.id,
            name: player.name,
            position: player.position,
            real_team: player.team,
            photo_url: player.photo_url,
            salary: contract.salary,
            year_number: contract.year_number,
            kind: contract.kind.abbreviation(),
            is_ir: contract.is_ir,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct TeamRosterJson<'a> {
    summary: &'a RosterSummary,
    active: Vec<ContractRow<'a>>,
    active_ir: Vec<ContractRow<'a>>,
    rookie_development: Vec<ContractRow<'a>>,
    violations: &'a [LimitViolation],
    trade_action: TradeAction,
}

impl<'a> RosterReport<'a> {
    #[must_use]
    pub const fn new(views: Vec<TeamRosterView<'a>>) -> Self {
        Self {
            views,
            name_width: 28,
            show_positions: true,
        }
    }

    #[must_use]
    pub const fn with_display(mut self, name_width: usize, show_positions: bool) -> Self {
        self.name_width = name_width;
        self.show_positions = show_positions;
        self
    }

    /// All rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = ContractRow<'_>> + '_ {
        self.views.iter().flat_map(|view| {
            let team_id = view.summary.team_id;
            view.roster.groups().flat_map(move |(group, contracts)| {
                contracts
                    .iter()
                    .map(move |contract| ContractRow::new(team_id, group, contract))
            })
        })
    }

    fn to_json(&self) -> Vec<TeamRosterJson<'_>> {
        self.views
            .iter()
            .map(|view| {
                let rows = |group: RosterGroup| {
                    view.roster
                        .group(group)
                        .iter()
                        .map(|contract| ContractRow::new(view.summary.team_id, group, contract))
                        .collect::<Vec<_>>()
                };
                TeamRosterJson {
                    summary: &view.summary,
                    active: rows(RosterGroup::Active),
                    active_ir: rows(RosterGroup::ActiveIr),
                    rookie_development: rows(RosterGroup::RookieDevelopment),
                    violations: &view.violations,
                    trade_action: view.trade_action,
                }
            })
            .collect()
    }

    fn format_human(&self) -> String {
        if self.views.is_empty() {
            return format!("{} No teams in snapshot", style("!").yellow());
        }

        let mut out = String::new();
        for view in &self.views {
            let summary = &view.summary;
            out.push_str(&format!(
                "{} {}\n",
                style(&summary.team_name).cyan().bold(),
                style(format!("#{} · {}", summary.team_id, summary.phase)).dim()
            ));
            out.push_str(&format!("{}\n", summary.roster_size_line()));
            let salary = summary.salary_line();
            if summary.over_cap {
                out.push_str(&format!("{}\n", style(salary).red()));
            } else {
                out.push_str(&format!("{salary}\n"));
            }
            if let TradeAction::ProposeTrade { .. } = view.trade_action {
                out.push_str(&format!("{}\n", style("→ Propose Trade").green()));
            }

            for (group, contracts) in view.sections() {
                out.push_str(&format!(
                    "\n{} {}\n",
                    style(group.title()).bold(),
                    style(format!("({})", contracts.len())).dim()
                ));
                for contract in contracts {
                    let player = contract.player();
                    let name = truncate_string(player.name, self.name_width);
                    out.push_str(&format!("  {name:width$}", width = self.name_width));
                    if self.show_positions {
                        out.push_str(&format!(
                            " {:16}",
                            style(player.position_team_label()).dim()
                        ));
                    }
                    out.push_str(&format!(" {}\n", contract.terms_label()));
                }
            }

            for violation in &view.violations {
                out.push_str(&format!(
                    "{} {}\n",
                    style("!").red().bold(),
                    violation.message
                ));
            }
            out.push('\n');
        }
        out
    }

    fn format_plain(&self) -> String {
        let mut blocks = Vec::with_capacity(self.views.len());
        for view in &self.views {
            let summary = &view.summary;
            let mut lines = vec![
                format!("{} (#{}) {}", summary.team_name, summary.team_id, summary.phase),
                summary.roster_size_line(),
                summary.salary_line(),
            ];
            if view.trade_action.is_offered() {
                lines.push("Action: Propose Trade".to_string());
            }
            for (group, contracts) in view.sections() {
                lines.push(format!("[{}]", group.title()));
                for contract in contracts {
                    let player = contract.player();
                    let label = player.position_team_label();
                    if self.show_positions && !label.is_empty() {
                        lines.push(format!(
                            "{} ({label}) {}",
                            player.name,
                            contract.terms_label()
                        ));
                    } else {
                        lines.push(format!("{} {}", player.name, contract.terms_label()));
                    }
                }
            }
            for violation in &view.violations {
                lines.push(format!("violation: {}", violation.message));
            }
            blocks.push(lines.join("\n"));
        }
        blocks.join("\n\n")
    }

    fn format_tsv(&self) -> String {
        let mut out =
            String::from("team_id\tgroup\tcontract_id\tname\tposition\treal_team\tsalary\tyear\tkind\n");
        for row in self.rows() {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                row.team_id,
                group_key(row.group),
                row.contract_id,
                tsv_field(row.name),
                tsv_field(row.position.unwrap_or("")),
                tsv_field(row.real_team.unwrap_or("")),
                format_salary(row.salary),
                row.year_number,
                row.kind,
            ));
        }
        out
    }
}

const fn group_key(group: RosterGroup) -> &'static str {
    match group {
        RosterGroup::Active => "active",
        RosterGroup::ActiveIr => "active_ir",
        RosterGroup::RookieDevelopment => "rookie_development",
    }
}

impl Formattable for RosterReport<'_> {
    fn format(&self, fmt: OutputFormat) -> Result<String> {
        match fmt {
            OutputFormat::Human => Ok(self.format_human()),
            OutputFormat::Json => robot_json(self.to_json(), Vec::new()),
            OutputFormat::Jsonl => jsonl(self.rows()),
            OutputFormat::Plain => Ok(self.format_plain()),
            OutputFormat::Tsv => Ok(self.format_tsv()),
        }
    }
}
