//! Pipeline driver: one synchronous run per input video.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use opencv::core::{Mat, Size};
use opencv::prelude::*;
use opencv::videoio::VideoWriter;

use crate::config::Settings;
use crate::error::{PipelineError, PipelineResult};
use crate::models::{FrameRecord, TrackingResponse};
use crate::tracker::{ObjectModel, SyntheticObjectModel};

use super::annotator::annotate_frame;
use super::export::{build_export, write_export};
use super::reader::VideoSource;
use super::sampling::Sampler;

const VIDEO_SUFFIX: &str = "_tracking_enhanced.mp4";
const DATA_SUFFIX: &str = "_tracking_data.json";

/// Synchronous tracking pipeline.
///
/// Holds the output directory and sampling configuration plus the object
/// model; one instance serves every run. Concurrent runs sharing an
/// output name race on the same output files.
pub struct TrackingPipeline {
    output_dir: PathBuf,
    sampler: Sampler,
    progress_interval: u64,
    model: Box<dyn ObjectModel>,
}

struct RunOutput {
    video_path: PathBuf,
    data_path: PathBuf,
}

impl TrackingPipeline {
    /// Create a pipeline with an explicit object model.
    pub fn new(settings: &Settings, model: Box<dyn ObjectModel>) -> Self {
        Self {
            output_dir: settings.paths.output_dir.clone(),
            sampler: Sampler::new(settings.pipeline.sample_interval),
            progress_interval: settings.pipeline.progress_interval.max(1),
            model,
        }
    }

    /// Create a pipeline with the default synthetic model.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings, Box::new(SyntheticObjectModel::new()))
    }

    /// Directory annotated videos and tracking JSON are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Name of the configured object model.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Run the pipeline on one video.
    ///
    /// Never panics and never returns `Err`: every failure is folded into
    /// an error [`TrackingResponse`] with its code. A missing source fails
    /// before any work starts and carries no processing time.
    pub fn run(&self, video_path: &str, output_name: Option<&str>) -> TrackingResponse {
        let start = Instant::now();
        tracing::info!("Processing video: {}", video_path);

        match self.process(video_path, output_name) {
            Ok(output) => {
                let elapsed = start.elapsed().as_secs_f64();
                tracing::info!("Video processing completed in {:.2}s", elapsed);
                TrackingResponse::success(
                    "Video processed successfully",
                    output.video_path.display().to_string(),
                    output.data_path.display().to_string(),
                )
                .with_processing_time(elapsed)
            }
            Err(err) => {
                tracing::error!("Error processing video: {}", err);
                let response = TrackingResponse::failure(err.to_string(), err.code());
                match err {
                    PipelineError::SourceNotFound { .. } => response,
                    PipelineError::ProcessingFailure { .. } => {
                        response.with_processing_time(start.elapsed().as_secs_f64())
                    }
                }
            }
        }
    }

    fn process(&self, video_path: &str, output_name: Option<&str>) -> PipelineResult<RunOutput> {
        let input = Path::new(video_path);
        let mut source = VideoSource::open(input)?;
        let meta = source.metadata().clone();

        let name = match output_name.filter(|n| !n.trim().is_empty()) {
            Some(name) => name.to_string(),
            None => input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "output".to_string()),
        };

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            PipelineError::processing(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;
        let video_path = self.output_dir.join(format!("{}{}", name, VIDEO_SUFFIX));
        let data_path = self.output_dir.join(format!("{}{}", name, DATA_SUFFIX));

        let mut writer = open_writer(&video_path, &meta)?;

        tracing::info!(
            "Processing {} frames with the {} model",
            meta.total_frames,
            self.model.name()
        );

        let mut records: Vec<FrameRecord> = Vec::new();
        let mut frame = Mat::default();
        let mut frame_number: u64 = 0;

        loop {
            if !source.read_frame(&mut frame)? {
                break;
            }

            if self.sampler.should_annotate(frame_number) {
                let timestamp = frame_number as f64 / meta.fps;
                let objects =
                    self.model
                        .objects_at(frame_number, meta.fps, meta.width, meta.height);
                let annotated = annotate_frame(&frame, &objects, frame_number, timestamp)?;
                writer.write(&annotated)?;
                records.push(FrameRecord::new(
                    frame_number,
                    timestamp,
                    objects,
                    meta.width,
                    meta.height,
                ));
            } else {
                writer.write(&frame)?;
            }

            frame_number += 1;
            if frame_number % self.progress_interval == 0 {
                if meta.total_frames > 0 {
                    let progress = frame_number as f64 / meta.total_frames as f64 * 100.0;
                    tracing::info!("Progress: {:.1}%", progress);
                } else {
                    tracing::info!("Processed {} frames", frame_number);
                }
            }
        }

        source.release()?;
        writer.release()?;

        let export = build_export(&meta, records);
        write_export(&export, &data_path)?;

        tracing::info!("Tracking video created: {}", video_path.display());
        tracing::info!("Tracking data exported: {}", data_path.display());

        Ok(RunOutput {
            video_path,
            data_path,
        })
    }
}

fn open_writer(path: &Path, meta: &crate::models::VideoMetadata) -> PipelineResult<VideoWriter> {
    let path_str = path.to_str().ok_or_else(|| {
        PipelineError::processing(format!("Output path is not valid UTF-8: {}", path.display()))
    })?;
    let fourcc = VideoWriter::fourcc('m', 'p', '4', 'v')?;
    let writer = VideoWriter::new(
        path_str,
        fourcc,
        meta.fps,
        Size::new(meta.width, meta.height),
        true,
    )?;
    if !writer.is_opened()? {
        return Err(PipelineError::processing(format!(
            "Failed to initialize mp4v encoder for {}",
            path.display()
        )));
    }
    Ok(writer)
}
