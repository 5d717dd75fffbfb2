use crate::{
    error::{AppError, AppResult},
    models::{AudioStream, ResolvedVideo},
};

/// A chosen best stream plus the full set it was chosen from.
///
/// When `formats` is non-empty it contains `best` as its maximum-bitrate
/// entry among entries with a reported bitrate.
#[derive(Debug, Clone)]
pub struct StreamSelection {
    pub best: AudioStream,
    pub formats: Vec<AudioStream>,
}

/// Selects from the full audio-only set, adaptive and progressive alike.
pub fn select_audio(video: &ResolvedVideo) -> AppResult<StreamSelection> {
    choose(video.audio_formats.clone())
}

/// Selects from the DASH/adaptive entries only.
///
/// Some items expose no adaptive audio at all; for those the full audio-only
/// set is used instead so the endpoint still returns something playable.
pub fn select_dash(video: &ResolvedVideo) -> AppResult<StreamSelection> {
    let adaptive: Vec<AudioStream> = video
        .audio_formats
        .iter()
        .filter(|f| f.adaptive)
        .cloned()
        .collect();

    if adaptive.is_empty() {
        choose(video.audio_formats.clone())
    } else {
        choose(adaptive)
    }
}

fn choose(formats: Vec<AudioStream>) -> AppResult<StreamSelection> {
    let best = formats
        .iter()
        .filter(|f| f.bitrate.is_some())
        .max_by_key(|f| f.bitrate)
        // No entry reported a bitrate; upstream order is all we have.
        .or_else(|| formats.first())
        .cloned()
        .ok_or(AppError::NoAudioStreams)?;

    Ok(StreamSelection { best, formats })
}
