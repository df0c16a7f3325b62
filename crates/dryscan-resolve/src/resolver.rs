//! Selection-to-paths resolution.

use std::path::PathBuf;

use dryscan_types::Selection;

use crate::listing::parse_model_listing;
use crate::tool::ModelTool;

/// Resolves selection expressions into compiled SQL paths.
///
/// Resolution is soft-failing by design: a tool that cannot be invoked, a
/// listing that matches nothing, or a failed compilation all resolve to an
/// empty sequence rather than an error. "No matches" is a valid outcome.
#[derive(Debug, Clone)]
pub struct SelectorResolver<T> {
    tool: T,
}

impl<T: ModelTool> SelectorResolver<T> {
    /// Creates a resolver backed by the given model tool.
    #[must_use]
    pub const fn new(tool: T) -> Self {
        Self { tool }
    }

    /// Resolves a selection to the ordered compiled paths of its models.
    ///
    /// Compilation is triggered only once a non-empty set of models has been
    /// confirmed, so an empty selection never touches the toolchain twice.
    pub async fn resolve(&self, selection: &Selection) -> Vec<PathBuf> {
        let listing = match self.tool.list_models(selection).await {
            Ok(listing) => listing,
            Err(_) => return Vec::new(),
        };

        let Some(paths) = parse_model_listing(&listing) else {
            return Vec::new();
        };

        if paths.is_empty() {
            return paths;
        }

        if self.tool.compile_models(selection).await.is_err() {
            return Vec::new();
        }

        paths
    }
}
