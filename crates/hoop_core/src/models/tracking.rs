//! Tracking data model.
//!
//! Serialized field names and nesting are pinned to the export schema
//! existing consumers parse; confidence lives inside the bounding box
//! and `team`/`jersey_number` are omitted for the ball.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kind of tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Player,
    Ball,
}

/// Team assignment for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    TeamA,
    TeamB,
}

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Detection confidence in [0, 1].
    pub confidence: f64,
}

impl BoundingBox {
    /// Build a box of the given size centered on a point.
    pub fn centered(cx: f64, cy: f64, width: f64, height: f64, confidence: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
            confidence,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One detected/simulated entity (player or ball) for a single frame.
///
/// Ephemeral: computed fresh for every sampled frame. The id is stable
/// only because the object model assigns it deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedObject {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub bbox: BoundingBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u32>,
}

impl TrackedObject {
    /// Create a player object with team and jersey number.
    pub fn player(id: u32, bbox: BoundingBox, team: Team, jersey_number: u32) -> Self {
        Self {
            id,
            kind: ObjectKind::Player,
            bbox,
            team: Some(team),
            jersey_number: Some(jersey_number),
        }
    }

    /// Create a ball object.
    pub fn ball(id: u32, bbox: BoundingBox) -> Self {
        Self {
            id,
            kind: ObjectKind::Ball,
            bbox,
            team: None,
            jersey_number: None,
        }
    }
}

/// Tracked objects and metadata for one sampled frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame_number: u64,
    /// Seconds from the start of the video (`frame_number / fps`).
    pub timestamp: f64,
    /// Players first (ascending id), ball last.
    pub objects: Vec<TrackedObject>,
    pub frame_width: i32,
    pub frame_height: i32,
}

impl FrameRecord {
    /// Wrap a frame's object list plus dimensions into a record.
    pub fn new(
        frame_number: u64,
        timestamp: f64,
        objects: Vec<TrackedObject>,
        frame_width: i32,
        frame_height: i32,
    ) -> Self {
        Self {
            frame_number,
            timestamp,
            objects,
            frame_width,
            frame_height,
        }
    }
}

/// Properties of an opened video, read once at pipeline start.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub path: PathBuf,
    pub fps: f64,
    pub width: i32,
    pub height: i32,
    pub total_frames: u64,
}

impl VideoMetadata {
    /// Video duration in seconds.
    pub fn duration(&self) -> f64 {
        self.total_frames as f64 / self.fps
    }
}

/// Frame dimensions as serialized in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

/// Video properties as serialized in the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub original_path: String,
    pub fps: f64,
    pub total_frames: u64,
    pub duration: f64,
    pub resolution: Resolution,
}

impl From<&VideoMetadata> for VideoInfo {
    fn from(meta: &VideoMetadata) -> Self {
        Self {
            original_path: meta.path.display().to_string(),
            fps: meta.fps,
            total_frames: meta.total_frames,
            duration: meta.duration(),
            resolution: Resolution {
                width: meta.width,
                height: meta.height,
            },
        }
    }
}

/// The full per-video tracking document, built once and written once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingExport {
    pub video_info: VideoInfo,
    pub export_timestamp: String,
    pub total_tracking_frames: usize,
    pub tracking_frames: Vec<FrameRecord>,
}
