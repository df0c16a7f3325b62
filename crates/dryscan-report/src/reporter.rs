//! Ordered batch estimation and report rendering.

use std::io::Write;

use dryscan_engine::{EngineError, QueryEstimator};
use dryscan_types::{QuerySource, ScanEstimate};
use thiserror::Error;

use crate::format::{format_bytes, format_scan_size};

/// Target line width the dash filler pads to.
const DEFAULT_WIDTH: usize = 60;

/// Errors that can abort a report.
///
/// Per-query estimation failures are report lines, not errors; only engine
/// faults and output write failures stop the batch.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The engine hit an unrecovered fault (transport, auth, server).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Writing the report output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Rendering options for a report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Print each failed estimate's diagnostic text under its line.
    pub verbose: bool,
    /// Target line width for the dash filler.
    pub width: usize,
    /// Render failed lines in red.
    pub color: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            width: DEFAULT_WIDTH,
            color: true,
        }
    }
}

/// Aggregate outcome of a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// Sum of the byte counts of all successful estimates.
    ///
    /// Failed estimates are excluded, so the total stays meaningful after
    /// a partial failure; `failures` tells callers whether it is complete.
    pub total_bytes: f64,
    /// Number of sources processed.
    pub sources: usize,
    /// Number of sources whose estimate failed.
    pub failures: usize,
}

/// Estimates an ordered list of query sources and renders the report.
#[derive(Debug, Clone)]
pub struct BatchReporter<E> {
    estimator: E,
    options: ReportOptions,
}

impl<E: QueryEstimator> BatchReporter<E> {
    /// Creates a reporter with default options.
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            options: ReportOptions::default(),
        }
    }

    /// Creates a reporter with the given options.
    pub const fn with_options(estimator: E, options: ReportOptions) -> Self {
        Self { estimator, options }
    }

    /// Estimates each source in order, writing one aligned line per source
    /// and a final total line.
    ///
    /// A source the engine rejects, or whose file cannot be read, renders
    /// as an ERROR line and the batch continues with the next source.
    ///
    /// # Errors
    ///
    /// Returns an error on engine faults (transport, auth, server) or when
    /// the writer fails.
    pub async fn report<W: Write>(
        &self,
        sources: &[QuerySource],
        mut writer: W,
    ) -> Result<ReportSummary, ReportError> {
        let mut total_bytes = 0.0_f64;
        let mut failures = 0_usize;

        for source in sources {
            let estimate = match source.read() {
                Ok(query_text) => self.estimator.estimate(&query_text).await?,
                Err(e) => ScanEstimate::failed(format!("{}: {e}", source.path().display())),
            };

            self.write_line(&mut writer, &source.display_name(), &estimate)?;

            match estimate.bytes() {
                Some(bytes) => total_bytes += bytes as f64,
                None => failures += 1,
            }
        }

        writeln!(writer, "Total Estimated Usage: {}", format_bytes(total_bytes))?;

        Ok(ReportSummary {
            total_bytes,
            sources: sources.len(),
            failures,
        })
    }

    /// Writes one report line, plus the diagnostic when verbose.
    fn write_line<W: Write>(
        &self,
        writer: &mut W,
        name: &str,
        estimate: &ScanEstimate,
    ) -> Result<(), std::io::Error> {
        let size = format_scan_size(estimate);
        let line = format!("{name} {} {size}", "-".repeat(self.dash_count(name, &size)));

        if estimate.is_failed() && self.options.color {
            writeln!(writer, "{}", console::style(line).red())?;
        } else {
            writeln!(writer, "{line}")?;
        }

        if self.options.verbose
            && let Some(diagnostic) = estimate.diagnostic()
        {
            writeln!(writer, "  {diagnostic}")?;
        }

        Ok(())
    }

    /// Dash fill padding the line to the target width, floored at one dash
    /// when name and size alone would overflow it.
    fn dash_count(&self, name: &str, size: &str) -> usize {
        if name.len() + size.len() < self.options.width {
            self.options.width - name.len() - size.len()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::io::Write as _;
    use tempfile::TempDir;

    /// Estimator mapping exact query text to canned estimates.
    struct FakeEstimator {
        estimates: HashMap<String, ScanEstimate>,
    }

    impl FakeEstimator {
        fn new(estimates: &[(&str, ScanEstimate)]) -> Self {
            Self {
                estimates: estimates
                    .iter()
                    .map(|(sql, estimate)| ((*sql).to_string(), estimate.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl QueryEstimator for FakeEstimator {
        async fn estimate(&self, query_text: &str) -> Result<ScanEstimate, EngineError> {
            Ok(self
                .estimates
                .get(query_text)
                .cloned()
                .unwrap_or_else(|| ScanEstimate::failed("unexpected query")))
        }
    }

    /// Writes each (name, sql) pair into the directory and returns sources.
    fn write_sources(dir: &TempDir, files: &[(&str, &str)]) -> Vec<QuerySource> {
        files
            .iter()
            .map(|(name, sql)| {
                let path = dir.path().join(name);
                let mut file = std::fs::File::create(&path).unwrap();
                write!(file, "{sql}").unwrap();
                QuerySource::new(path)
            })
            .collect()
    }

    fn plain_options() -> ReportOptions {
        ReportOptions {
            verbose: false,
            width: 60,
            color: false,
        }
    }

    #[tokio::test]
    async fn test_total_sums_successful_estimates() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, &[("a.sql", "SELECT a"), ("b.sql", "SELECT b")]);
        let estimator = FakeEstimator::new(&[
            ("SELECT a", ScanEstimate::Scanned(1024)),
            ("SELECT b", ScanEstimate::Scanned(2048)),
        ]);
        let reporter = BatchReporter::with_options(estimator, plain_options());

        let mut output = Vec::new();
        let summary = reporter.report(&sources, &mut output).await.unwrap();

        assert_relative_eq!(summary.total_bytes, 3072.0);
        assert_eq!(summary.failures, 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Total Estimated Usage: 3.00 KB\n"));
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_the_batch() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(
            &dir,
            &[
                ("first.sql", "SELECT 1"),
                ("broken.sql", "SELEC oops"),
                ("third.sql", "SELECT 3"),
            ],
        );
        let estimator = FakeEstimator::new(&[
            ("SELECT 1", ScanEstimate::Scanned(1024)),
            ("SELEC oops", ScanEstimate::failed("Syntax error at [1:1]")),
            ("SELECT 3", ScanEstimate::Scanned(1024)),
        ]);
        let reporter = BatchReporter::with_options(estimator, plain_options());

        let mut output = Vec::new();
        let summary = reporter.report(&sources, &mut output).await.unwrap();

        assert_eq!(summary.sources, 3);
        assert_eq!(summary.failures, 1);
        assert_relative_eq!(summary.total_bytes, 2048.0);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("first.sql ") && lines[0].ends_with(" 1.00 KB"));
        assert!(lines[1].starts_with("broken.sql ") && lines[1].ends_with(" ERROR"));
        assert!(lines[2].starts_with("third.sql ") && lines[2].ends_with(" 1.00 KB"));
    }

    #[tokio::test]
    async fn test_verbose_prints_diagnostics() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, &[("broken.sql", "SELEC oops")]);
        let estimator =
            FakeEstimator::new(&[("SELEC oops", ScanEstimate::failed("Syntax error at [1:1]"))]);
        let options = ReportOptions {
            verbose: true,
            ..plain_options()
        };
        let reporter = BatchReporter::with_options(estimator, options);

        let mut output = Vec::new();
        reporter.report(&sources, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\n  Syntax error at [1:1]\n"));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_fatal_for_that_item_only() {
        let dir = TempDir::new().unwrap();
        let mut sources = write_sources(&dir, &[("good.sql", "SELECT 1")]);
        sources.insert(0, QuerySource::new(dir.path().join("missing.sql")));
        let estimator = FakeEstimator::new(&[("SELECT 1", ScanEstimate::Scanned(512))]);
        let reporter = BatchReporter::with_options(estimator, plain_options());

        let mut output = Vec::new();
        let summary = reporter.report(&sources, &mut output).await.unwrap();

        assert_eq!(summary.failures, 1);
        assert_relative_eq!(summary.total_bytes, 512.0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().next().unwrap().ends_with(" ERROR"));
    }

    #[tokio::test]
    async fn test_line_alignment() {
        let dir = TempDir::new().unwrap();
        let sources = write_sources(&dir, &[("a.sql", "SELECT a")]);
        let estimator = FakeEstimator::new(&[("SELECT a", ScanEstimate::Scanned(1024))]);
        let reporter = BatchReporter::with_options(estimator, plain_options());

        let mut output = Vec::new();
        reporter.report(&sources, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        // "a.sql" (5) + "1.00 KB" (7) -> 48 dashes to fill width 60.
        assert_eq!(text.lines().next().unwrap(), format!("a.sql {} 1.00 KB", "-".repeat(48)));
    }

    #[test]
    fn test_dash_count_floor() {
        let estimator = FakeEstimator::new(&[]);
        let options = ReportOptions {
            width: 10,
            ..plain_options()
        };
        let reporter = BatchReporter::with_options(estimator, options);

        assert_eq!(reporter.dash_count("a_long_model_name.sql", "1.00 KB"), 1);
        // Exactly at the width also floors to one dash.
        assert_eq!(reporter.dash_count("abc", "1234567"), 1);
    }

    #[tokio::test]
    async fn test_empty_batch_prints_zero_total() {
        let estimator = FakeEstimator::new(&[]);
        let reporter = BatchReporter::with_options(estimator, plain_options());

        let mut output = Vec::new();
        let summary = reporter.report(&[], &mut output).await.unwrap();

        assert_eq!(summary.sources, 0);
        assert_relative_eq!(summary.total_bytes, 0.0);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Total Estimated Usage: 0.00 KB\n");
    }
}
