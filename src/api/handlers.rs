//! HTTP API handlers.

use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Serialize;

use crate::catalog::{self, VideoRecord, VideoStore};
use crate::error::ApiError;
use crate::metrics;
use crate::player::PlayerPage;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only video catalog.
    pub store: Arc<VideoStore>,
}

impl AppState {
    /// Create state backed by the seeded catalog.
    pub fn new() -> Self {
        Self {
            store: catalog::shared(),
        }
    }

    /// Create state backed by a specific catalog.
    pub fn with_store(store: VideoStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// List all catalog records in ascending id order.
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<VideoRecord>> {
    Json(state.store.iter().cloned().collect())
}

/// Look up one video's metadata by id.
///
/// The path segment is taken as an opaque string; unknown ids answer 404
/// with a fixed JSON error body.
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<VideoRecord>, ApiError> {
    match state.store.get(&video_id) {
        Some(record) => {
            metrics::inc_lookups_served();
            Ok(Json(record.clone()))
        }
        None => {
            metrics::inc_lookup_misses();
            Err(ApiError::NotFound)
        }
    }
}

/// Render the playback page for a numeric video id.
///
/// The segment must parse as a non-negative integer; anything else answers
/// 404, matching an integer-pattern route constraint. The id is not checked
/// against the catalog.
pub async fn player_page(Path(video_id): Path<String>) -> Result<Html<String>, ApiError> {
    let video_id: u64 = video_id.parse().map_err(|_| ApiError::NotFound)?;

    let html = PlayerPage { video_id }.render()?;
    metrics::inc_pages_rendered();

    Ok(Html(html))
}
