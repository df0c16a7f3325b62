//! Estimation trait consumed by the batch reporter.

use async_trait::async_trait;
use dryscan_types::ScanEstimate;

use crate::client::EngineError;

/// Obtains a scan-size estimate for raw query text.
///
/// A query the engine rejects (malformed SQL, unknown table) is a normal
/// [`ScanEstimate::Failed`] result; only transport, auth, and server faults
/// surface as errors.
#[async_trait]
pub trait QueryEstimator: Send + Sync {
    /// Estimates the bytes the given query would scan, without executing it.
    ///
    /// # Errors
    ///
    /// Returns an error on transport, auth, or server faults.
    async fn estimate(&self, query_text: &str) -> Result<ScanEstimate, EngineError>;
}
