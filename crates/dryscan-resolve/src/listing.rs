//! Parsing of `dbt ls` listing output.

use std::path::PathBuf;

/// Sentinel dbt prints when a selection matches nothing.
const NO_NODES_SELECTED: &str = "No nodes selected";

/// Parses a newline-delimited model listing into compiled SQL paths.
///
/// Each line is expected to start with a dotted model identifier
/// (`project.path.to.model`, segments of `[A-Za-z0-9_-]`); anything after
/// the identifier is ignored and lines without one are silently skipped.
/// A line containing the "No nodes selected" sentinel is authoritative:
/// it yields `None` regardless of any identifiers parsed before it.
#[must_use]
pub fn parse_model_listing(listing: &str) -> Option<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for line in listing.lines() {
        if let Some(segments) = leading_identifier(line) {
            paths.push(compiled_model_path(&segments));
        }

        if line.contains(NO_NODES_SELECTED) {
            return None;
        }
    }

    Some(paths)
}

/// Maps a dotted identifier's segments to the deterministic compiled path:
/// `target/compiled/<project>/models/<remaining segments>.sql`.
#[must_use]
pub fn compiled_model_path(segments: &[&str]) -> PathBuf {
    PathBuf::from(format!(
        "target/compiled/{}/models/{}.sql",
        segments[0],
        segments[1..].join("/")
    ))
}

/// Extracts the dotted identifier a line starts with, if any.
///
/// The identifier must begin at the first column and have at least two
/// non-empty segments.
fn leading_identifier(line: &str) -> Option<Vec<&str>> {
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'))
        .unwrap_or(line.len());
    let candidate = &line[..end];

    // Trailing dots belong to surrounding prose, not the identifier.
    let candidate = candidate.trim_end_matches('.');

    if candidate.is_empty() {
        return None;
    }

    let segments: Vec<&str> = candidate.split('.').collect();
    if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    Some(segments)
}
