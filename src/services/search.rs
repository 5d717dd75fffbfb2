use crate::{
    error::{AppError, AppResult},
    models::TrackCandidate,
    services::providers::CatalogSearch,
};

/// Upper bound on catalog results per query
pub const SEARCH_LIMIT: usize = 5;

/// Builds the free-text catalog query from the request fields.
pub fn build_query(song_name: &str, artist_name: &str) -> String {
    format!("{song_name} {artist_name}").trim().to_string()
}

/// Searches the catalog for song candidates, best match first.
///
/// `catalog` is `None` when client construction failed at startup; every
/// search then degrades to 503 for the life of the process. Ordering is
/// whatever the catalog returned, the first candidate is the best match.
pub async fn search_tracks(
    catalog: Option<&dyn CatalogSearch>,
    song_name: &str,
    artist_name: &str,
) -> AppResult<Vec<TrackCandidate>> {
    let catalog = catalog.ok_or(AppError::ServiceUnavailable)?;

    let query = build_query(song_name, artist_name);
    let candidates = catalog.search_songs(&query, SEARCH_LIMIT).await?;

    if candidates.is_empty() {
        return Err(AppError::NotFound("No results found".to_string()));
    }

    Ok(candidates)
}
