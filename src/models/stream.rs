use serde::{Deserialize, Serialize};

/// One playable audio-only stream variant.
///
/// The URL is time-limited and opaque; it must be re-resolved on every
/// request and is never cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AudioStream {
    pub itag: u32,
    pub quality: Option<String>,
    /// Bits per second; `None` when the resolver did not report a parsable
    /// bitrate for this entry
    pub bitrate: Option<u64>,
    pub codec: String,
    pub url: String,
    pub filesize: Option<u64>,
    /// True for DASH/adaptive ladder entries, false for progressive streams
    #[serde(skip)]
    pub adaptive: bool,
}

/// Resolver output for one content identifier, request-scoped.
#[derive(Debug, Clone)]
pub struct ResolvedVideo {
    pub video_id: String,
    pub title: String,
    pub duration: u64,
    pub thumbnail: Option<String>,
    /// Audio-only formats, adaptive and progressive, in upstream order
    pub audio_formats: Vec<AudioStream>,
}

// ============================================================================
// Stream resolution API wire types
// ============================================================================

/// Raw video page from the resolution API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub length_seconds: u64,
    #[serde(default)]
    pub video_thumbnails: Vec<VideoThumbnail>,
    #[serde(default)]
    pub adaptive_formats: Vec<VideoFormat>,
    #[serde(default)]
    pub format_streams: Vec<VideoFormat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoThumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFormat {
    pub itag: u32,
    /// Mime type with codec parameters, e.g. `audio/webm; codecs="opus"`
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(default)]
    pub bitrate: Option<u64>,
    #[serde(default)]
    pub audio_quality: Option<String>,
    pub url: String,
    #[serde(default)]
    pub content_length: Option<u64>,
}

impl VideoFormat {
    fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }

    fn into_stream(self, adaptive: bool) -> AudioStream {
        AudioStream {
            itag: self.itag,
            quality: self.audio_quality,
            bitrate: self.bitrate,
            codec: self.mime_type,
            url: self.url,
            filesize: self.content_length,
            adaptive,
        }
    }
}

impl VideoPage {
    /// Collapses the raw page into the request-scoped domain shape,
    /// discarding everything that is not audio-only.
    pub fn into_resolved(self, video_id: &str) -> ResolvedVideo {
        let thumbnail = self
            .video_thumbnails
            .into_iter()
            .max_by_key(|t| t.width)
            .map(|t| t.url);

        let audio_formats = self
            .adaptive_formats
            .into_iter()
            .filter(VideoFormat::is_audio)
            .map(|f| f.into_stream(true))
            .chain(
                self.format_streams
                    .into_iter()
                    .filter(VideoFormat::is_audio)
                    .map(|f| f.into_stream(false)),
            )
            .collect();

        ResolvedVideo {
            video_id: video_id.to_string(),
            title: self.title,
            duration: self.length_seconds,
            thumbnail,
            audio_formats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_page_deserialization() {
        let json = r#"{
            "title": "Never Gonna Give You Up",
            "lengthSeconds": 213,
            "videoThumbnails": [
                {"url": "https://img.example/mq.jpg", "width": 320},
                {"url": "https://img.example/hq.jpg", "width": 480}
            ],
            "adaptiveFormats": [
                {
                    "itag": 251,
                    "type": "audio/webm; codecs=\"opus\"",
                    "bitrate": 160000,
                    "audioQuality": "AUDIO_QUALITY_MEDIUM",
                    "url": "https://streams.example/251",
                    "contentLength": 3241856
                },
                {
                    "itag": 137,
                    "type": "video/mp4; codecs=\"avc1.640028\"",
                    "bitrate": 4400000,
                    "url": "https://streams.example/137"
                }
            ],
            "formatStreams": [
                {
                    "itag": 18,
                    "type": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"",
                    "url": "https://streams.example/18"
                }
            ]
        }"#;

        let page: VideoPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.title, "Never Gonna Give You Up");
        assert_eq!(page.length_seconds, 213);
        assert_eq!(page.adaptive_formats.len(), 2);
        assert_eq!(page.format_streams.len(), 1);
        assert_eq!(page.adaptive_formats[0].bitrate, Some(160000));
        assert_eq!(page.adaptive_formats[0].content_length, Some(3241856));
    }

    #[test]
    fn test_into_resolved_keeps_audio_only() {
        let page = VideoPage {
            title: "Never Gonna Give You Up".to_string(),
            length_seconds: 213,
            video_thumbnails: vec![],
            adaptive_formats: vec![
                format(251, "audio/webm; codecs=\"opus\"", Some(160000)),
                format(137, "video/mp4; codecs=\"avc1.640028\"", Some(4400000)),
            ],
            format_streams: vec![format(18, "video/mp4; codecs=\"avc1.42001E\"", None)],
        };

        let resolved = page.into_resolved("dQw4w9WgXcQ");
        assert_eq!(resolved.video_id, "dQw4w9WgXcQ");
        assert_eq!(resolved.audio_formats.len(), 1);
        assert_eq!(resolved.audio_formats[0].itag, 251);
        assert!(resolved.audio_formats[0].adaptive);
    }

    #[test]
    fn test_into_resolved_tags_progressive_audio() {
        let page = VideoPage {
            title: "t".to_string(),
            length_seconds: 0,
            video_thumbnails: vec![],
            adaptive_formats: vec![],
            format_streams: vec![format(140, "audio/mp4; codecs=\"mp4a.40.2\"", Some(128000))],
        };

        let resolved = page.into_resolved("dQw4w9WgXcQ");
        assert_eq!(resolved.audio_formats.len(), 1);
        assert!(!resolved.audio_formats[0].adaptive);
    }

    #[test]
    fn test_into_resolved_picks_widest_thumbnail() {
        let page = VideoPage {
            title: "t".to_string(),
            length_seconds: 0,
            video_thumbnails: vec![
                VideoThumbnail {
                    url: "https://img.example/mq.jpg".to_string(),
                    width: 320,
                },
                VideoThumbnail {
                    url: "https://img.example/hq.jpg".to_string(),
                    width: 480,
                },
            ],
            adaptive_formats: vec![],
            format_streams: vec![],
        };

        let resolved = page.into_resolved("dQw4w9WgXcQ");
        assert_eq!(
            resolved.thumbnail,
            Some("https://img.example/hq.jpg".to_string())
        );
    }

    fn format(itag: u32, mime: &str, bitrate: Option<u64>) -> VideoFormat {
        VideoFormat {
            itag,
            mime_type: mime.to_string(),
            bitrate,
            audio_quality: None,
            url: format!("https://streams.example/{itag}"),
            content_length: None,
        }
    }
}
