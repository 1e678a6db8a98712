//! Application state for the web layer.

use std::sync::Arc;

use crate::index::AdjacencyIndex;

/// Shared application state.
///
/// The index is built once at startup and only read afterwards, so it
/// is shared without any locking.
#[derive(Clone)]
pub struct AppState {
    /// Read-only adjacency index built from the route data file.
    pub index: Arc<AdjacencyIndex>,
}

impl AppState {
    /// Create a new app state around a fully built index.
    pub fn new(index: AdjacencyIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }
}
