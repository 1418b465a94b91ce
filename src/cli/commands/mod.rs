//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::process::ExitCode;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod completions;
pub mod partition;
pub mod summary;
pub mod validate;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Partition(args) => partition::run(ctx, args).map(|()| ExitCode::SUCCESS),
        Commands::Summary(args) => summary::run(ctx, args).map(|()| ExitCode::SUCCESS),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Completions(args) => {
            completions::run(args);
            Ok(ExitCode::SUCCESS)
        }
    }
}
