//! Frame-sampling annotation-and-export pipeline.
//!
//! A single synchronous pass over the input video: sampled frames get
//! the object-model overlay and a JSON record, the rest pass through
//! unchanged, and the run finalizes by writing the re-encoded video and
//! the aggregated tracking document.

mod annotator;
mod driver;
mod export;
mod reader;
mod sampling;

pub use annotator::annotate_frame;
pub use driver::TrackingPipeline;
pub use export::{build_export, write_export};
pub use reader::VideoSource;
pub use sampling::Sampler;
