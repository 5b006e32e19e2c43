//! Robolens main entry point
//!
//! This is the command-line interface for the Robolens robots.txt AI-crawler audit.

use clap::Parser;
use robolens::analysis::analyze;
use robolens::config::{load_config_with_hash, Config};
use robolens::fetch::{self, FetchedRobots};
use robolens::output::{print_report, render_report, write_report, AnalysisReport, ReportFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Robolens: audit a robots.txt for AI crawlers
///
/// Robolens fetches a site's robots.txt, works out which known AI crawlers
/// may access the site root, and prints scored recommendations.
#[derive(Parser, Debug)]
#[command(name = "robolens")]
#[command(version = "1.0.0")]
#[command(about = "Audit a robots.txt for AI crawlers", long_about = None)]
struct Cli {
    /// Site URL or bare host to audit (e.g. example.com)
    #[arg(value_name = "TARGET")]
    target: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Analyze a local robots.txt instead of fetching it
    #[arg(long, value_name = "ROBOTS_TXT")]
    file: Option<PathBuf>,

    /// Report format: text, markdown or json
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_configuration(cli.config.as_deref())?;

    let fetched = match obtain_robots(&config, &cli).await {
        Ok(fetched) => fetched,
        Err(e) => {
            tracing::error!("Failed to obtain robots.txt: {}", e);
            return Err(e.into());
        }
    };

    if let Some(notice) = &fetched.notice {
        tracing::warn!("{}", notice);
    }

    let catalogue = config.catalogue.to_catalogue();
    let result = analyze(
        &fetched.content,
        &fetched.robots_url,
        &catalogue,
        config.analysis,
    );
    let report = AnalysisReport::new(&fetched, &result);

    if let Err(e) = emit_report(&report, cli.format, cli.output.as_deref()) {
        tracing::error!("Failed to produce report: {}", e);
        return Err(e.into());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robolens=info,warn"),
            1 => EnvFilter::new("robolens=debug,info"),
            2 => EnvFilter::new("robolens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so a report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, defaults otherwise
fn load_configuration(path: Option<&Path>) -> robolens::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    match load_config_with_hash(path) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            tracing::debug!("Tracking {} AI crawlers", config.catalogue.agents.len());
            Ok(config)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            Err(e.into())
        }
    }
}

/// Reads the local file when `--file` is given, fetches over HTTP otherwise
async fn obtain_robots(config: &Config, cli: &Cli) -> robolens::Result<FetchedRobots> {
    match &cli.file {
        Some(path) => {
            let robots_url = robolens::robots_url(&cli.target)?;
            tracing::info!("Reading robots.txt from: {}", path.display());
            let content = std::fs::read_to_string(path)?;
            Ok(FetchedRobots::local(&robots_url, content))
        }
        None => {
            tracing::info!("Fetching robots.txt for: {}", cli.target);
            fetch::fetch(&config.fetch, &cli.target).await
        }
    }
}

/// Prints the report, or writes it when an output path is given
fn emit_report(
    report: &AnalysisReport,
    format: ReportFormat,
    output: Option<&Path>,
) -> robolens::Result<()> {
    match (output, format) {
        (None, ReportFormat::Text) => print_report(report),
        (None, format) => print!("{}", render_report(report, format)?),
        (Some(path), format) => {
            let rendered = render_report(report, format)?;
            write_report(path, &rendered)?;
        }
    }
    Ok(())
}
