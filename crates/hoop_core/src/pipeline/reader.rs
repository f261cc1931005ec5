//! Video input wrapper around an OpenCV capture.

use std::path::Path;

use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::error::{PipelineError, PipelineResult};
use crate::models::VideoMetadata;

/// An opened video file with its properties.
///
/// Supports sequential frame retrieval only; no seeking. The underlying
/// capture is released explicitly by the driver, and again on drop for
/// early-exit paths.
pub struct VideoSource {
    capture: VideoCapture,
    metadata: VideoMetadata,
}

impl VideoSource {
    /// Open a video file and read its properties.
    ///
    /// Returns [`PipelineError::SourceNotFound`] when the path does not
    /// exist, and a processing failure when the container cannot be
    /// decoded or reports unusable properties.
    pub fn open(path: &Path) -> PipelineResult<Self> {
        if !path.exists() {
            return Err(PipelineError::source_not_found(path.display().to_string()));
        }

        let path_str = path.to_str().ok_or_else(|| {
            PipelineError::processing(format!("Video path is not valid UTF-8: {}", path.display()))
        })?;

        let capture = VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(PipelineError::processing(format!(
                "Failed to open video: {}",
                path.display()
            )));
        }

        let fps = capture.get(videoio::CAP_PROP_FPS)?;
        let width = capture.get(videoio::CAP_PROP_FRAME_WIDTH)? as i32;
        let height = capture.get(videoio::CAP_PROP_FRAME_HEIGHT)? as i32;
        let total_frames = capture.get(videoio::CAP_PROP_FRAME_COUNT)?.max(0.0) as u64;

        if fps <= 0.0 || width <= 0 || height <= 0 {
            return Err(PipelineError::processing(format!(
                "Video reports unusable properties ({}x{} @ {} fps): {}",
                width,
                height,
                fps,
                path.display()
            )));
        }

        tracing::debug!(
            "Opened video: {}x{} @ {:.3} fps, {} frames",
            width,
            height,
            fps,
            total_frames
        );

        Ok(Self {
            capture,
            metadata: VideoMetadata {
                path: path.to_path_buf(),
                fps,
                width,
                height,
                total_frames,
            },
        })
    }

    /// Properties read at open time.
    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// Read the next frame into `frame`.
    ///
    /// Returns `Ok(false)` at end of stream.
    pub fn read_frame(&mut self, frame: &mut Mat) -> PipelineResult<bool> {
        Ok(self.capture.read(frame)? && !frame.empty())
    }

    /// Release the underlying capture.
    pub fn release(&mut self) -> PipelineResult<()> {
        self.capture.release()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CODE_FILE_NOT_FOUND;

    #[test]
    fn open_nonexistent_is_source_not_found() {
        let result = VideoSource::open(Path::new("/nonexistent/game7.mp4"));
        match result {
            Err(err) => assert_eq!(err.code(), CODE_FILE_NOT_FOUND),
            Ok(_) => panic!("open unexpectedly succeeded"),
        }
    }

    #[test]
    fn open_non_video_file_is_processing_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"not a video").unwrap();
        let result = VideoSource::open(file.path());
        match result {
            Err(err) => assert_eq!(err.code(), crate::error::CODE_PROCESSING_ERROR),
            Ok(_) => panic!("open unexpectedly succeeded"),
        }
    }
}
