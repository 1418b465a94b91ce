//! Application context shared by every command.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::core::salary::SeasonPhase;
use crate::core::view::Viewer;
use crate::error::Result;

/// Resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub phase: SeasonPhase,
    pub viewer: Viewer,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        Ok(Self::new(cli, config))
    }

    /// Build a context around an already loaded config.
    #[must_use]
    pub fn new(cli: &Cli, config: Config) -> Self {
        Self {
            output_format: cli.output_format(),
            phase: cli.phase.unwrap_or(config.display.default_phase),
            viewer: Viewer {
                team_id: cli.viewer_team,
            },
            config,
        }
    }
}
