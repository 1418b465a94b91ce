//! Cap summary formatter

use console::style;
use itertools::Itertools;

use crate::cli::output::{Formattable, OutputFormat, jsonl, robot_json, tsv_field};
use crate::core::view::RosterSummary;
use crate::error::Result;
use crate::utils::format::{format_salary, truncate_string};

/// One summary line per team.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub summaries: Vec<RosterSummary>,
}

impl SummaryReport {
    #[must_use]
    pub const fn new(summaries: Vec<RosterSummary>) -> Self {
        Self { summaries }
    }

    fn format_human(&self) -> String {
        if self.summaries.is_empty() {
            return format!("{} No teams in snapshot", style("!").yellow());
        }

        let mut out = format!(
            "{:24} {:>7} {:>4} {:>4} {:>12} {:>7}\n",
            style("TEAM").bold(),
            style("ROSTER").bold(),
            style("IR").bold(),
            style("RD").bold(),
            style("SALARY/CAP").bold(),
            style("SPACE").bold()
        );
        out.push_str(&format!("{}\n", style("─".repeat(63)).dim()));

        for summary in &self.summaries {
            let space = format_salary(summary.cap_space);
            let space = if summary.over_cap {
                style(space).red().to_string()
            } else {
                style(space).green().to_string()
            };
            out.push_str(&format!(
                "{:24} {:>7} {:>4} {:>4} {:>12} {:>7}\n",
                truncate_string(&summary.team_name, 24),
                summary.active_count,
                summary.ir_count,
                summary.rookie_development_count,
                format!(
                    "{}/{}",
                    format_salary(summary.salary_used),
                    format_salary(summary.cap.effective)
                ),
                space
            ));
        }
        out
    }

    fn format_plain(&self) -> String {
        self.summaries
            .iter()
            .map(|summary| format!("{}: {}", summary.team_name, summary.headline()))
            .join("\n")
    }

    fn format_tsv(&self) -> String {
        let mut out = String::from(
            "team_id\tteam\tphase\tactive\tir\trookie_development\tsalary_used\tcap\tcap_space\tover_cap\n",
        );
        for s in &self.summaries {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                s.team_id,
                tsv_field(&s.team_name),
                s.phase,
                s.active_count,
                s.ir_count,
                s.rookie_development_count,
                s.salary_used,
                s.cap.effective,
                s.cap_space,
                s.over_cap
            ));
        }
        out
    }
}

impl Formattable for SummaryReport {
    fn format(&self, fmt: OutputFormat) -> Result<String> {
        match fmt {
            OutputFormat::Human => Ok(self.format_human()),
            OutputFormat::Json => robot_json(&self.summaries, Vec::new()),
            OutputFormat::Jsonl => jsonl(&self.summaries),
            OutputFormat::Plain => Ok(self.format_plain()),
            OutputFormat::Tsv => Ok(self.format_tsv()),
        }
    }
}
