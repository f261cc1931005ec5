//! Error types for the tracking pipeline.
//!
//! A run fails in exactly one of two ways: the source video does not
//! exist, or something went wrong while decoding/encoding/writing.
//! Both carry a stable error code that survives into the HTTP response.

use thiserror::Error;

/// Error code reported for a missing source video.
pub const CODE_FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";

/// Error code reported for any failure during processing.
pub const CODE_PROCESSING_ERROR: &str = "PROCESSING_ERROR";

/// Failure of a single pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input path did not exist at request time.
    #[error("Video file not found: {path}")]
    SourceNotFound { path: String },

    /// Any failure during decode, encode, or output writing.
    #[error("{message}")]
    ProcessingFailure { message: String },
}

impl PipelineError {
    /// Create a source-not-found error.
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create a processing failure with a message.
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingFailure {
            message: message.into(),
        }
    }

    /// Stable error code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceNotFound { .. } => CODE_FILE_NOT_FOUND,
            Self::ProcessingFailure { .. } => CODE_PROCESSING_ERROR,
        }
    }
}

impl From<opencv::Error> for PipelineError {
    fn from(err: opencv::Error) -> Self {
        Self::processing(format!("OpenCV error: {}", err))
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_not_found_carries_path_and_code() {
        let err = PipelineError::source_not_found("/clips/game7.mp4");
        assert_eq!(err.code(), CODE_FILE_NOT_FOUND);
        assert!(err.to_string().contains("/clips/game7.mp4"));
    }

    #[test]
    fn processing_failure_carries_message_and_code() {
        let err = PipelineError::processing("encoder refused frame size 0x0");
        assert_eq!(err.code(), CODE_PROCESSING_ERROR);
        assert!(err.to_string().contains("encoder refused"));
    }
}
