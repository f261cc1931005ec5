//! Data structures for tracking records, export documents, and responses.

mod response;
mod tracking;

pub use response::{ResponseStatus, TrackingResponse};
pub use tracking::{
    BoundingBox, FrameRecord, ObjectKind, Resolution, Team, TrackedObject, TrackingExport,
    VideoInfo, VideoMetadata,
};
