//! dbt selection expressions.

use serde::{Deserialize, Serialize};

/// An opaque dbt selection expression (name, tag, or path pattern).
///
/// The expression is passed through to the model tool unmodified; dryscan
/// attaches no meaning to its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(String);

impl Selection {
    /// Creates a selection expression.
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// Returns the expression as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Selection {
    fn from(expression: &str) -> Self {
        Self::new(expression)
    }
}

impl From<String> for Selection {
    fn from(expression: String) -> Self {
        Self(expression)
    }
}
