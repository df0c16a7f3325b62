//! Dry-run estimate results.

use serde::{Deserialize, Serialize};

/// Result of a dry-run estimate for a single query.
///
/// A failed estimate is a distinct variant rather than a sentinel byte
/// value, so a legitimate zero-byte estimate is never confused with a
/// rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanEstimate {
    /// The engine accepted the query and reports it would scan this many bytes.
    Scanned(u64),
    /// The engine rejected the query (malformed SQL, unknown table).
    Failed {
        /// Diagnostic message returned by the engine.
        diagnostic: String,
    },
}

impl ScanEstimate {
    /// Creates a failed estimate carrying the engine's diagnostic message.
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self::Failed {
            diagnostic: diagnostic.into(),
        }
    }

    /// Returns the byte count for a successful estimate.
    #[must_use]
    pub const fn bytes(&self) -> Option<u64> {
        match self {
            Self::Scanned(bytes) => Some(*bytes),
            Self::Failed { .. } => None,
        }
    }

    /// Returns true if the engine rejected the query.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the diagnostic message for a failed estimate.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Scanned(_) => None,
            Self::Failed { diagnostic } => Some(diagnostic),
        }
    }
}
