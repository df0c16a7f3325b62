//! Size formatting and batch reporting for the dryscan query scan estimator.
//!
//! This crate provides the reporting side of the pipeline:
//!
//! - [`format_bytes`] / [`format_scan_size`] - Human-readable size rendering
//! - [`BatchReporter`] - Ordered estimation loop with per-line output
//! - [`ReportOptions`] - Width, verbosity, and color settings
//! - [`ReportSummary`] - Totals returned to programmatic callers

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dryscan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod format;
mod reporter;

pub use format::{format_bytes, format_scan_size};
pub use reporter::{BatchReporter, ReportError, ReportOptions, ReportSummary};
