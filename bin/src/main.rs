//! dryscan CLI - Estimate BigQuery scan volume for SQL files and dbt selections.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "dryscan")]
#[command(about = "Estimate BigQuery scan volume for SQL files and dbt selections", long_about = None)]
#[command(version)]
struct Cli {
    /// SQL files to estimate
    #[arg(conflicts_with = "select")]
    files: Vec<PathBuf>,

    /// dbt selection expressions to resolve and estimate (repeatable)
    #[arg(short, long)]
    select: Vec<String>,

    /// Print engine diagnostics under failed report lines
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (suppress dbt's own output)
    #[arg(short, long)]
    quiet: bool,

    /// Cloud project for dry-run jobs. Defaults to $GOOGLE_CLOUD_PROJECT.
    #[arg(long)]
    project: Option<String>,

    /// Target report line width
    #[arg(long, default_value_t = 60)]
    width: usize,

    /// Disable color in the report
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if there is nothing to estimate
    if cli.files.is_empty() && cli.select.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    commands::estimate::estimate(
        cli.files,
        &cli.select,
        cli.verbose,
        cli.quiet,
        cli.project,
        cli.width,
        cli.no_color,
    )
    .await
}
