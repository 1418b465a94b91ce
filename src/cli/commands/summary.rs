//! fbkl-roster summary - Roster counts and cap usage per team

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::SummaryReport;
use crate::cli::output::emit;
use crate::core::view::TeamRosterView;
use crate::error::Result;
use crate::input::load_snapshot;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Snapshot file (.json, .yaml, .yml) or `-` for JSON on stdin
    pub input: PathBuf,

    /// Only summarize this team (name or id)
    #[arg(long, short)]
    pub team: Option<String>,

    /// List teams over the cap first
    #[arg(long)]
    pub over_cap_first: bool,
}

pub fn run(ctx: &AppContext, args: &SummaryArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.input)?;
    let mut summaries: Vec<_> = snapshot
        .select(args.team.as_deref())?
        .into_iter()
        .map(|team| TeamRosterView::build(team, ctx.phase, &ctx.config, &ctx.viewer).summary)
        .collect();

    if args.over_cap_first {
        summaries.sort_by_key(|summary| (!summary.over_cap, summary.cap_space));
    }

    emit(&SummaryReport::new(summaries), ctx.output_format)
}
