//! # formvalidate CLI entry point

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode, WriteLogger};

/// Validate form fixtures the way the page would on submit.
#[derive(Parser, Debug)]
#[command(name = "formvalidate", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fill in a fixture, submit it and print the verdict as JSON.
    Check(formvalidate_cli::check::CheckArgs),
}

fn init_logging(level: LevelFilter, file: Option<&Path>) -> anyhow::Result<()> {
    let config = simplelog::Config::default();
    match file {
        Some(path) => {
            let log_file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            WriteLogger::init(level, config, log_file)?;
        }
        None => TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)?,
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Check(args) => {
            let report = formvalidate_cli::check::run(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if report.valid {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
