//! Roster limit check formatter

use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use crate::cli::output::{Formattable, OutputFormat, jsonl, robot_json, tsv_field};
use crate::core::limits::LimitViolation;
use crate::core::salary::SeasonPhase;
use crate::core::view::TeamRosterView;
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
pub struct TeamValidation {
    pub team_id: i64,
    pub team_name: String,
    pub phase: SeasonPhase,
    pub legal: bool,
    pub violations: Vec<LimitViolation>,
}

impl From<&TeamRosterView<'_>> for TeamValidation {
    fn from(view: &TeamRosterView<'_>) -> Self {
        Self {
            team_id: view.summary.team_id,
            team_name: view.summary.team_name.clone(),
            phase: view.summary.phase,
            legal: view.is_legal(),
            violations: view.violations.clone(),
        }
    }
}

/// Limit check results for every selected team.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub teams: Vec<TeamValidation>,
}

#[derive(Serialize)]
struct ViolationLine<'a> {
    team_id: i64,
    team_name: &'a str,
    #[serde(flatten)]
    violation: &'a LimitViolation,
}

impl ValidationReport {
    #[must_use]
    pub fn new(views: &[TeamRosterView<'_>]) -> Self {
        Self {
            teams: views.iter().map(TeamValidation::from).collect(),
        }
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.teams.iter().map(|team| team.violations.len()).sum()
    }

    #[must_use]
    pub fn all_legal(&self) -> bool {
        self.teams.iter().all(|team| team.legal)
    }

    fn lines(&self) -> impl Iterator<Item = ViolationLine<'_>> {
        self.teams.iter().flat_map(|team| {
            team.violations.iter().map(move |violation| ViolationLine {
                team_id: team.team_id,
                team_name: &team.team_name,
                violation,
            })
        })
    }

    fn format_human(&self) -> String {
        let mut out = String::new();
        for team in &self.teams {
            if team.legal {
                out.push_str(&format!(
                    "{} {} ({})\n",
                    "✓".green(),
                    team.team_name.bold(),
                    team.phase
                ));
                continue;
            }
            out.push_str(&format!(
                "{} {} ({})\n",
                "✗".red(),
                team.team_name.bold(),
                team.phase
            ));
            for violation in &team.violations {
                out.push_str(&format!(
                    "    {} {}\n",
                    violation.rule.to_string().yellow(),
                    violation.message
                ));
            }
        }
        let count = self.violation_count();
        if count == 0 {
            out.push_str(&format!("{}", "All rosters are within limits".green()));
        } else {
            out.push_str(&format!("{}", format!("{count} limit violation(s)").red()));
        }
        out
    }

    fn format_plain(&self) -> String {
        self.teams
            .iter()
            .map(|team| {
                if team.legal {
                    format!("{}: ok", team.team_name)
                } else {
                    let details = team
                        .violations
                        .iter()
                        .map(|v| format!("  {}: {}", v.rule, v.message))
                        .join("\n");
                    format!(
                        "{}: {} violation(s)\n{details}",
                        team.team_name,
                        team.violations.len(),
                    )
                }
            })
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from("team_id\tteam\trule\tlimit\tactual\tmessage\n");
        for line in self.lines() {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                line.team_id,
                tsv_field(line.team_name),
                line.violation.rule,
                line.violation.limit,
                line.violation.actual,
                tsv_field(&line.violation.message)
            ));
        }
        out
    }
}

impl Formattable for ValidationReport {
    fn format(&self, fmt: OutputFormat) -> Result<String> {
        match fmt {
            OutputFormat::Human => Ok(self.format_human()),
            OutputFormat::Json => robot_json(&self.teams, Vec::new()),
            OutputFormat::Jsonl => jsonl(self.lines()),
            OutputFormat::Plain => Ok(self.format_plain()),
            OutputFormat::Tsv => Ok(self.format_tsv()),
        }
    }
}
