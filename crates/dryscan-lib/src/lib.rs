//! Rust library for estimating BigQuery scan volume without executing
//! queries.
//!
//! This is a facade crate that re-exports functionality from the dryscan
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use dryscan_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = AccessToken::resolve().await?;
//!     let client = EngineClient::new(EngineConfig::new("my-project"), token)?;
//!
//!     let sources = vec![QuerySource::new("reports/daily_spend.sql")];
//!     let reporter = BatchReporter::new(client);
//!     let summary = reporter.report(&sources, std::io::stdout().lock()).await?;
//!
//!     println!("{} bytes", summary.total_bytes);
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dryscan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use dryscan_types::*;

// Re-export the engine client
#[cfg(feature = "engine")]
pub use dryscan_engine::{
    AccessToken, EngineClient, EngineConfig, EngineError, QueryEstimator, TokenError,
};

// Re-export selection resolution
#[cfg(feature = "resolve")]
pub use dryscan_resolve::{
    DbtCli, ModelTool, SelectorResolver, ToolError, compiled_model_path, parse_model_listing,
};

// Re-export reporting
#[cfg(feature = "report")]
pub use dryscan_report::{
    BatchReporter, ReportError, ReportOptions, ReportSummary, format_bytes, format_scan_size,
};

/// Prelude module for convenient imports.
///
/// ```
/// use dryscan_lib::prelude::*;
/// ```
pub mod prelude {
    pub use dryscan_types::{QuerySource, ScanEstimate, Selection};

    #[cfg(feature = "engine")]
    pub use dryscan_engine::{AccessToken, EngineClient, EngineConfig, QueryEstimator};

    #[cfg(feature = "resolve")]
    pub use dryscan_resolve::{DbtCli, SelectorResolver};

    #[cfg(feature = "report")]
    pub use dryscan_report::{BatchReporter, ReportOptions, ReportSummary, format_bytes};
}
