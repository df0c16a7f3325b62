//! Estimate command implementation.
//!
//! This module resolves the requested query sources and runs the batch
//! report against the engine.

use anyhow::{Context, Result};
use dryscan_lib::prelude::*;
use std::path::PathBuf;

/// Estimate scan volume for the given files or dbt selections.
pub(crate) async fn estimate(
    files: Vec<PathBuf>,
    selections: &[String],
    verbose: bool,
    quiet: bool,
    project: Option<String>,
    width: usize,
    no_color: bool,
) -> Result<()> {
    // Selection mode resolves through dbt; file mode uses the paths as-is.
    let paths = if selections.is_empty() {
        files
    } else {
        resolve_selections(selections, quiet).await
    };
    let sources: Vec<QuerySource> = paths.into_iter().map(QuerySource::new).collect();

    let project = project
        .or_else(|| std::env::var("GOOGLE_CLOUD_PROJECT").ok())
        .filter(|p| !p.is_empty())
        .context("No project id: pass --project or set GOOGLE_CLOUD_PROJECT")?;

    let token = AccessToken::resolve()
        .await
        .context("Failed to obtain an access token")?;
    let client = EngineClient::new(EngineConfig::new(project), token)?;

    let options = ReportOptions {
        verbose,
        width,
        color: !no_color,
    };
    let reporter = BatchReporter::with_options(client, options);
    reporter
        .report(&sources, std::io::stdout().lock())
        .await
        .context("Estimation batch failed")?;

    Ok(())
}

/// Resolve each selection expression in order, concatenating the compiled
/// paths. Selections that match nothing contribute nothing.
async fn resolve_selections(selections: &[String], quiet: bool) -> Vec<PathBuf> {
    let resolver = SelectorResolver::new(DbtCli::new(quiet));

    let mut paths = Vec::new();
    for selection in selections {
        paths.extend(resolver.resolve(&Selection::from(selection.as_str())).await);
    }
    paths
}
