//! BigQuery dry-run client for the dryscan query scan estimator.
//!
//! This crate provides the estimation side of the pipeline:
//!
//! - [`QueryEstimator`] - Trait the batch reporter consumes
//! - [`EngineClient`] - HTTP client submitting dry-run jobs to the engine
//! - [`EngineConfig`] - Project, endpoint, and timeout configuration
//! - [`AccessToken`] - Bearer-token resolution (env or `gcloud`)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/dryscan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod estimator;
mod token;
mod wire;

pub use client::{EngineClient, EngineConfig, EngineError};
pub use estimator::QueryEstimator;
pub use token::{AccessToken, TokenError};
