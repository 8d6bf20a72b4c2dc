//! tasmanian-info CLI - Show how this Tasmanian installation was configured.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tasmanian_config::{BootstrapOutcome, InputError, LibraryComponent, ProcessConfig};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasmanian-info")]
#[command(author = "Miroslav Stoyanov")]
#[command(version)]
#[command(about = "Print the build-time configuration of the Tasmanian libraries")]
struct Cli {
    /// Print only the path of one library (sparsegrid, dream, caddons)
    #[arg(short, long)]
    library: Option<String>,

    /// Run the library search path bootstrap before printing
    #[arg(short, long)]
    bootstrap: bool,

    /// Print the configuration as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct InfoReport<'a> {
    #[serde(flatten)]
    config: &'a ProcessConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_path_updated: Option<bool>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = cli.bootstrap.then(tasmanian_config::bootstrap);
    let config = ProcessConfig::installed();

    if let Some(name) = &cli.library {
        return match name.parse::<LibraryComponent>() {
            Ok(component) => {
                println!("{}", config.library_path(component));
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => Ok(input_failure(&err)),
        };
    }

    if cli.json {
        let report = InfoReport {
            config,
            search_path_updated: outcome.map(BootstrapOutcome::mutated),
        };
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize configuration")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Tasmanian version: {}", config.version());
    println!("License:           {}", config.license());
    println!("Author:            {}", config.author());
    println!("Git commit hash:   {}", config.commit_hash());
    for (component, path) in config.library_paths() {
        println!("{:<18} {}", format!("Path to {component}:"), path);
    }
    match outcome {
        Some(BootstrapOutcome::Prepended { directory, .. }) => {
            println!("Search path:       prepended {directory}")
        }
        Some(BootstrapOutcome::Skipped { .. }) => println!("Search path:       unchanged (rpath)"),
        None => debug!("bootstrap not requested"),
    }

    Ok(ExitCode::SUCCESS)
}

fn input_failure(err: &InputError) -> ExitCode {
    // stdout carries the requested path, keep it clean
    let _ = err.report_to(&mut std::io::stderr().lock());
    ExitCode::from(2)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tasmanian_config={level},tasmanian_info={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
