//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{get_video, health, list_videos, player_page, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Metadata endpoints
        .route("/videos", get(list_videos))
        .route("/videos/:video_id", get(get_video))
        // Playback page
        .route("/video/:video_id", get(player_page))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn send(uri: &str) -> axum::response::Response {
        let app = create_router(AppState::new());
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let response = send("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn lookup_returns_the_stored_record() {
        let response = send("/videos/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"id": "1", "title": "Video 1"})
        );
    }

    #[tokio::test]
    async fn lookup_unknown_id_returns_404_with_fixed_body() {
        let response = send("/videos/999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({"error": "Video not found"})
        );
    }

    #[tokio::test]
    async fn list_returns_catalog_in_id_order() {
        let response = send("/videos").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!([
                {"id": "1", "title": "Video 1"},
                {"id": "2", "title": "Video 2"}
            ])
        );
    }

    #[tokio::test]
    async fn player_page_embeds_the_id() {
        let response = send("/video/42").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("42"));
    }

    #[tokio::test]
    async fn player_page_rejects_non_integer_id() {
        let response = send("/video/not-a-number").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = send("/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
