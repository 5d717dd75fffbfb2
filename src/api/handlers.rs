use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{AudioStream, TrackCandidate},
    services::{search, streams, video_id::validate_video_id},
};

use super::AppState;

const SERVICE_NAME: &str = "songstream-api";

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub song_name: Option<String>,
    #[serde(default)]
    pub artist_name: String,
}

impl SearchRequest {
    fn song_name(&self) -> AppResult<&str> {
        match self.song_name.as_deref().map(str::trim) {
            Some(song) if !song.is_empty() => Ok(song),
            _ => Err(AppError::InvalidInput("Provide song_name".to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<TrackCandidate>,
}

#[derive(Debug, Serialize)]
pub struct StreamResponse {
    pub video_id: String,
    pub title: String,
    pub duration: u64,
    pub thumbnail: Option<String>,
    pub best_stream: AudioStream,
    pub all_formats: Vec<AudioStream>,
}

#[derive(Debug, Serialize)]
pub struct DashResponse {
    pub video_id: String,
    pub title: String,
    pub duration: u64,
    pub thumbnail: Option<String>,
    pub best_stream: AudioStream,
    pub dash_audio_streams: Vec<AudioStream>,
}

#[derive(Debug, Serialize)]
pub struct SearchAndStreamResponse {
    pub video_id: String,
    pub title: String,
    pub artists: Vec<String>,
    pub duration: u64,
    pub thumbnail: Option<String>,
    pub best_stream: AudioStream,
    pub all_formats: Vec<AudioStream>,
}

// Handlers

/// Liveness endpoint; healthy regardless of catalog-client state.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "service": SERVICE_NAME,
    }))
}

/// Search the catalog and return cleaned candidates in upstream order.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<SearchResponse>> {
    let song_name = request.song_name()?;
    let results =
        search::search_tracks(state.catalog.as_deref(), song_name, &request.artist_name).await?;

    Ok(Json(SearchResponse { results }))
}

/// Search the catalog, then resolve the first candidate to playable streams.
pub async fn search_and_stream(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> AppResult<Json<SearchAndStreamResponse>> {
    let song_name = request.song_name()?;
    let candidates =
        search::search_tracks(state.catalog.as_deref(), song_name, &request.artist_name).await?;

    let Some(first) = candidates.into_iter().next() else {
        return Err(AppError::NotFound("No results found".to_string()));
    };

    let video = state.resolver.resolve(&first.video_id).await?;
    let selection = streams::select_audio(&video)?;

    Ok(Json(SearchAndStreamResponse {
        video_id: video.video_id,
        title: video.title,
        artists: first.artists,
        duration: video.duration,
        thumbnail: video.thumbnail,
        best_stream: selection.best,
        all_formats: selection.formats,
    }))
}

/// Resolve all audio streams for an explicit video ID.
pub async fn stream_by_id(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<StreamResponse>> {
    let clean_id = validate_video_id(&video_id)?;
    let video = state.resolver.resolve(&clean_id).await?;
    let selection = streams::select_audio(&video)?;

    Ok(Json(StreamResponse {
        video_id: video.video_id,
        title: video.title,
        duration: video.duration,
        thumbnail: video.thumbnail,
        best_stream: selection.best,
        all_formats: selection.formats,
    }))
}

/// Resolve the DASH/adaptive audio ladder for an explicit video ID.
pub async fn dash_by_id(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Json<DashResponse>> {
    let clean_id = validate_video_id(&video_id)?;
    let video = state.resolver.resolve(&clean_id).await?;
    let selection = streams::select_dash(&video)?;

    Ok(Json(DashResponse {
        video_id: video.video_id,
        title: video.title,
        duration: video.duration,
        thumbnail: video.thumbnail,
        best_stream: selection.best,
        dash_audio_streams: selection.formats,
    }))
}
