mod stream;
mod track;

pub use stream::{AudioStream, ResolvedVideo, VideoFormat, VideoPage, VideoThumbnail};
pub use track::{CatalogArtist, CatalogHit, CatalogThumbnail, TrackCandidate};
