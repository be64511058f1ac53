//! Breadcrumbs CLI
//!
//! Thin wrapper around breadcrumbs-core for leaving a trail of actions in
//! today's daily log, kept next to the tool itself.
//!
//! ## Usage
//!
//! ```bash
//! # Record an action
//! breadcrumb "added unit test"
//!
//! # With a continuation line and a related file
//! breadcrumb "refactored startup sequence" "split config loading into its own step" --file src/main.go
//! ```

use anyhow::Result;
use breadcrumbs_core::{Appender, BreadcrumbEntry};
use clap::Parser;

/// Breadcrumbs - append a timestamped entry to today's log
#[derive(Parser)]
#[command(name = "breadcrumb")]
#[command(version)]
#[command(about = "Log a breadcrumb entry")]
#[command(
    long_about = "Append a timestamped entry to today's YYMMDD.md log in the directory holding this tool. The first entry of a day also writes a date heading."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Short description of the change
    #[arg(value_parser = parse_description)]
    description: String,

    /// Optional details, written on an indented second line
    #[arg(default_value = "")]
    details: String,

    /// Related file path (label only, not checked)
    #[arg(long, default_value = "")]
    file: String,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Reject descriptions with no visible text; accepted text is kept verbatim
fn parse_description(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("description must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let appender = Appender::for_tool()?;
    tracing::info!(dir = %appender.resolver().base_dir().display(), "Breadcrumb directory");

    let entry = BreadcrumbEntry::new(cli.description)
        .with_details(cli.details)
        .with_file(cli.file);
    let outcome = appender.append(&entry)?;

    if outcome.header_written {
        tracing::info!("Started new daily log");
    }
    eprintln!("Logged to {}", outcome.path.display());

    Ok(())
}
