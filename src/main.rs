//! Command-line inspector for validated network values.
//! Builds each input as a byte, IPv4/IPv6 address or US state and prints a
//! JSON report of every projection and predicate.

mod data;
mod display;

use anyhow::{Context, Result};
use clap::Parser;
use data::{Inspector, ValueKind};
use display::ReportFormatter;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "netvalues", version, about)]
struct Cli {
    /// Build every value as this kind instead of guessing from its shape
    #[arg(short, long, value_enum)]
    kind: Option<ValueKind>,

    /// Pretty-print the JSON report
    #[arg(short, long)]
    pretty: bool,

    /// Log each accepted value to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Values to inspect; read one per line from stdin when omitted
    values: Vec<String>,
}

/// Logs go to stderr so stdout stays a single JSON document.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();
}

fn read_inputs(cli: &Cli) -> Result<Vec<String>> {
    if !cli.values.is_empty() {
        return Ok(cli.values.clone());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read values from stdin")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let inspector = Inspector::new(cli.kind);
    let formatter = ReportFormatter::new();

    let report = match read_inputs(&cli) {
        Ok(inputs) => formatter.format(&inspector.inspect_all(inputs))?,
        Err(e) => {
            tracing::error!(error = %e, "no values inspected");
            ReportFormatter::create_error_report(e)
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(if report.all_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
