//! fbkl-roster validate - Check rosters against phase limits

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::app::AppContext;
use crate::cli::formatters::ValidationReport;
use crate::cli::output::emit;
use crate::core::view::TeamRosterView;
use crate::error::Result;
use crate::input::load_snapshot;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Snapshot file (.json, .yaml, .yml) or `-` for JSON on stdin
    pub input: PathBuf,

    /// Only check this team (name or id)
    #[arg(long, short)]
    pub team: Option<String>,
}

/// Exits with failure when any selected roster breaks a limit.
pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let snapshot = load_snapshot(&args.input)?;
    let views: Vec<_> = snapshot
        .select(args.team.as_deref())?
        .into_iter()
        .map(|team| TeamRosterView::build(team, ctx.phase, &ctx.config, &ctx.viewer))
        .collect();

    let report = ValidationReport::new(&views);
    emit(&report, ctx.output_format)?;

    if report.all_legal() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::info!(
            violations = report.violation_count(),
            phase = %ctx.phase,
            "roster limits violated"
        );
        Ok(ExitCode::FAILURE)
    }
}
