//! fbkl-roster - fantasy league roster partitioning and cap checks

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fbkl_roster::Result;
use fbkl_roster::app::AppContext;
use fbkl_roster::cli::output::{emit_robot, robot_error_structured};
use fbkl_roster::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.output_format().is_json() {
                // Machine mode: structured JSON error on stdout
                if emit_robot(&robot_error_structured(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                eprintln!("Error: {e}");
                eprintln!("  {}", e.to_structured().suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    if let Commands::Completions(args) = &cli.command {
        fbkl_roster::cli::commands::completions::run(args);
        return Ok(ExitCode::SUCCESS);
    }
    let ctx = AppContext::from_cli(cli)?;
    fbkl_roster::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,fbkl_roster=info",
        1 => "info,fbkl_roster=debug",
        2 => "debug,fbkl_roster=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_json() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
