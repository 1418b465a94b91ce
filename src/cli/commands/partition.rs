//! fbkl-roster partition - Show rosters split into display groups

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::RosterReport;
use crate::cli::output::emit;
use crate::core::view::TeamRosterView;
use crate::error::Result;
use crate::input::load_snapshot;

#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Snapshot file (.json, .yaml, .yml) or `-` for JSON on stdin
    pub input: PathBuf,

    /// Only show this team (name or id)
    #[arg(long, short)]
    pub team: Option<String>,
}

pub fn run(ctx: &AppContext, args: &PartitionArgs) -> Result<()> {
    let snapshot = load_snapshot(&args.input)?;
    let teams = snapshot.select(args.team.as_deref())?;

    let views = teams
        .into_iter()
        .map(|team| TeamRosterView::build(team, ctx.phase, &ctx.config, &ctx.viewer))
        .collect();

    let report = RosterReport::new(views)
        .with_display(ctx.config.display.name_width, ctx.config.display.show_positions);
    emit(&report, ctx.output_format)
}
