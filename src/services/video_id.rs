use crate::error::{AppError, AppResult};

/// Prefix some catalog exports put in front of the plain 11-character ID
const LEGACY_PREFIX: &str = "MUSIC_VIDEO_ID_";

/// Normalizes a candidate video identifier.
///
/// Inputs shorter than 10 characters are rejected outright. A canonical
/// 11-character ID passes through unchanged, and the legacy prefixed form is
/// stripped back to its 11-character remainder. Anything else is forwarded
/// as-is with a diagnostic warning, leaving the final verdict to the stream
/// resolver.
pub fn validate_video_id(raw: &str) -> AppResult<String> {
    if raw.len() < 10 {
        return Err(AppError::InvalidId(raw.to_string()));
    }

    if raw.len() == 11 && is_id_charset(raw) {
        return Ok(raw.to_string());
    }

    if let Some(remainder) = raw.strip_prefix(LEGACY_PREFIX) {
        if remainder.len() == 11 {
            return Ok(remainder.to_string());
        }
    }

    tracing::warn!(video_id = %raw, "potentially invalid video ID format, forwarding unchanged");
    Ok(raw.to_string())
}

fn is_id_charset(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
