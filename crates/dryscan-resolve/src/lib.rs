//! dbt selection resolution for the dryscan query scan estimator.
//!
//! This crate turns a logical selection expression into concrete compiled
//! SQL paths:
//!
//! - [`ModelTool`] - Trait over the listing and compilation operations
//! - [`DbtCli`] - Out-of-process `dbt` implementation
//! - [`parse_model_listing`] - Listing-output parser
//! - [`SelectorResolver`] - List, parse, and compile orchestration

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dryscan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod listing;
mod resolver;
mod tool;

pub use listing::{compiled_model_path, parse_model_listing};
pub use resolver::SelectorResolver;
pub use tool::{DbtCli, ModelTool, ToolError};
