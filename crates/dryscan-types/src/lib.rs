//! Core types for the dryscan query scan estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! dryscan:
//!
//! - [`ScanEstimate`] - Result of a dry-run estimate: a byte count or an
//!   engine rejection with diagnostic text
//! - [`QuerySource`] - A SQL file to be estimated, identified by path
//! - [`Selection`] - An opaque dbt selection expression

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dryscan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimate;
mod selection;
mod source;

pub use estimate::ScanEstimate;
pub use selection::Selection;
pub use source::QuerySource;
