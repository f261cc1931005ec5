//! Per-run response returned to callers and serialized over HTTP.
//!
//! Optionals serialize as explicit nulls; existing clients read them.

use serde::{Deserialize, Serialize};

/// Outcome of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Result of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub output_video_path: Option<String>,
    pub tracking_data_path: Option<String>,
    /// Elapsed wall-clock seconds for the run.
    pub processing_time: Option<f64>,
    /// Error code (`FILE_NOT_FOUND` | `PROCESSING_ERROR`) when status is error.
    pub error: Option<String>,
}

impl TrackingResponse {
    /// Create a success response with both output paths.
    pub fn success(
        message: impl Into<String>,
        output_video_path: impl Into<String>,
        tracking_data_path: impl Into<String>,
    ) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            output_video_path: Some(output_video_path.into()),
            tracking_data_path: Some(tracking_data_path.into()),
            processing_time: None,
            error: None,
        }
    }

    /// Create an error response with a message and error code.
    pub fn failure(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            output_video_path: None,
            tracking_data_path: None,
            processing_time: None,
            error: Some(error_code.into()),
        }
    }

    /// Attach the elapsed processing time.
    pub fn with_processing_time(mut self, seconds: f64) -> Self {
        self.processing_time = Some(seconds);
        self
    }

    /// Whether this response reports a failed run.
    pub fn is_error(&self) -> bool {
        self.status == ResponseStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_serializes_nulls() {
        let resp = TrackingResponse::success("done", "/out/a.mp4", "/out/a.json");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"error\":null"));
        assert!(json.contains("\"processing_time\":null"));
    }

    #[test]
    fn failure_response_carries_code() {
        let resp = TrackingResponse::failure("Video file not found: /x.mp4", "FILE_NOT_FOUND");
        assert!(resp.is_error());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"error\":\"FILE_NOT_FOUND\""));
        assert!(json.contains("\"output_video_path\":null"));
    }

    #[test]
    fn processing_time_attaches() {
        let resp = TrackingResponse::success("done", "a", "b").with_processing_time(1.25);
        assert_eq!(resp.processing_time, Some(1.25));
    }
}
