use std::sync::Arc;

use crate::services::providers::{CatalogSearch, ResolveStreams};

/// Shared application state
///
/// The catalog handle is built once at startup and never replaced or
/// retried; `None` means construction failed and every search-dependent
/// endpoint answers 503 for the life of the process. The resolver handle is
/// stateless, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Option<Arc<dyn CatalogSearch>>,
    pub resolver: Arc<dyn ResolveStreams>,
}

impl AppState {
    pub fn new(catalog: Option<Arc<dyn CatalogSearch>>, resolver: Arc<dyn ResolveStreams>) -> Self {
        Self { catalog, resolver }
    }
}
