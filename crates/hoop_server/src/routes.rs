//! HTTP route handlers.
//!
//! Thin boundary over the tracking pipeline: request validation, status
//! mapping, and file downloads from the output directory.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/track", post(track))
        .route("/api/download/video/{filename}", get(download_video))
        .route("/api/download/data/{filename}", get(download_data))
        .with_state(state)
}

/// Service banner and endpoint directory.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "status": "HoopTrack server is running",
        "version": hoop_core::version(),
        "endpoints": {
            "health": "/health",
            "track_video": "/api/track [POST]",
            "download_video": "/api/download/video/{filename}",
            "download_data": "/api/download/data/{filename}",
        },
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Local::now().to_rfc3339(),
        "tracker": "ready",
        "output_directory": state.pipeline.output_dir().display().to_string(),
    }))
}

#[derive(Debug, Deserialize)]
struct TrackRequest {
    #[serde(default)]
    video_path: Option<String>,
    #[serde(default)]
    output_name: Option<String>,
}

/// Run the tracking pipeline on a video path, synchronously.
async fn track(State(state): State<Arc<AppState>>, Json(request): Json<TrackRequest>) -> Response {
    let video_path = match request.video_path.filter(|p| !p.trim().is_empty()) {
        Some(path) => path,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "video_path is required" })),
            )
                .into_response();
        }
    };

    let output_name = request.output_name;
    let worker_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        worker_state
            .pipeline
            .run(&video_path, output_name.as_deref())
    })
    .await;

    match result {
        Ok(response) if response.is_error() => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": response })),
        )
            .into_response(),
        Ok(response) => Json(response).into_response(),
        Err(err) => {
            tracing::error!("Tracking task failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": format!("Tracking task failed: {}", err) })),
            )
                .into_response()
        }
    }
}

async fn download_video(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    serve_output_file(&state, &filename, "video/mp4", "Video file not found").await
}

async fn download_data(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Response {
    serve_output_file(
        &state,
        &filename,
        "application/json",
        "Tracking data file not found",
    )
    .await
}

/// Stream a file from the output directory with the given content type.
///
/// Names that would escape the output directory are treated as absent.
async fn serve_output_file(
    state: &AppState,
    filename: &str,
    content_type: &'static str,
    not_found_message: &'static str,
) -> Response {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return not_found(not_found_message);
    }

    let path = state.pipeline.output_dir().join(filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => not_found(not_found_message),
    }
}

fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoop_core::config::Settings;

    fn test_state() -> Arc<AppState> {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.paths.output_dir = dir.path().to_path_buf();
        // Leak the tempdir guard so the directory outlives the state.
        std::mem::forget(dir);
        Arc::new(AppState::new(settings))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let Json(body) = root().await;
        assert_eq!(body["endpoints"]["health"], "/health");
        assert_eq!(body["endpoints"]["track_video"], "/api/track [POST]");
    }

    #[tokio::test]
    async fn health_reports_ready() {
        let state = test_state();
        let Json(body) = health(State(state)).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tracker"], "ready");
        assert!(!body["output_directory"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn track_without_video_path_is_bad_request() {
        let state = test_state();
        let request = TrackRequest {
            video_path: None,
            output_name: None,
        };
        let response = track(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["detail"], "video_path is required");
    }

    #[tokio::test]
    async fn track_missing_file_is_internal_error_with_detail() {
        let state = test_state();
        let request = TrackRequest {
            video_path: Some("/nonexistent/game7.mp4".to_string()),
            output_name: None,
        };
        let response = track(State(state), Json(request)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["detail"]["status"], "error");
        assert_eq!(body["detail"]["error"], "FILE_NOT_FOUND");
    }

    #[tokio::test]
    async fn download_missing_file_is_not_found() {
        let state = test_state();
        let response = download_video(State(state), Path("absent.mp4".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn download_rejects_traversal_names() {
        let state = test_state();
        let response = download_data(State(state.clone()), Path("..secret".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = download_data(State(state), Path("a\\b.json".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn download_serves_existing_file() {
        let state = test_state();
        let path = state.pipeline.output_dir().join("clip_tracking_data.json");
        tokio::fs::write(&path, b"{\"ok\":true}").await.unwrap();

        let response =
            download_data(State(state), Path("clip_tracking_data.json".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "application/json"
        );
    }
}
