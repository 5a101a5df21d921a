use std::sync::Arc;

use crate::catalog::RecipeCatalog;

/// Shared application state
///
/// The catalog is immutable after startup, so it is shared as a plain `Arc`
/// with no interior locking; every handler reads the same recipes in the
/// same order.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
}

impl AppState {
    /// Creates state over a loaded catalog
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
