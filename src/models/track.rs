use serde::{Deserialize, Serialize};

/// A candidate track returned to the client from a catalog search.
///
/// Produced per request and discarded with the response; nothing here is
/// persisted or cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrackCandidate {
    pub video_id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub thumbnail: Option<String>,
}

// ============================================================================
// Catalog search API wire types
// ============================================================================

/// Raw search hit from the catalog API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogHit {
    /// Absent on non-track hits (albums, channels) the upstream filter
    /// occasionally lets through
    #[serde(default)]
    pub video_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<CatalogArtist>,
    #[serde(default)]
    pub thumbnails: Vec<CatalogThumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogThumbnail {
    pub url: String,
}

impl CatalogHit {
    /// Converts a raw hit into a candidate, dropping hits without an
    /// identifier since nothing downstream can resolve them.
    pub fn into_candidate(self) -> Option<TrackCandidate> {
        let video_id = self.video_id?;

        // Thumbnails are ordered small to large; keep the largest.
        let thumbnail = self.thumbnails.into_iter().last().map(|t| t.url);

        Some(TrackCandidate {
            video_id,
            title: self.title,
            artists: self.artists.into_iter().map(|a| a.name).collect(),
            thumbnail,
        })
    }
}
