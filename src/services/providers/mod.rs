/// Upstream service clients
///
/// The two external collaborators are consumed through traits so the HTTP
/// layer can be exercised against mocks. Both sides are black boxes: no
/// retry or caching is layered on top of them beyond the resolver's fixed
/// two-endpoint fallback.
use crate::{
    error::AppResult,
    models::{ResolvedVideo, TrackCandidate},
};

pub mod catalog;
pub mod resolver;

pub use catalog::CatalogClient;
pub use resolver::ResolverClient;

/// Music catalog search service
#[async_trait::async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Search the catalog for up to `limit` song-type results, best match
    /// first. Ordering is the catalog's own ranking, taken on trust.
    async fn search_songs(&self, query: &str, limit: usize) -> AppResult<Vec<TrackCandidate>>;
}

/// Stream resolution service
///
/// Implementations carry no per-request state; a single handle is shared by
/// all request tasks without locking.
#[async_trait::async_trait]
pub trait ResolveStreams: Send + Sync {
    /// Resolve a normalized identifier to its audio-only stream set.
    ///
    /// Every call re-resolves from scratch: the returned URLs are
    /// time-limited and must never be reused across requests.
    async fn resolve(&self, video_id: &str) -> AppResult<ResolvedVideo>;
}
