//! Formula-driven placeholder object model.
//!
//! Stands in for a real multi-camera tracking engine: three players and
//! one ball move along fixed trajectories derived from the frame
//! timestamp. The constants are frozen; downstream consumers of the JSON
//! export parse these exact boxes.

use crate::models::{BoundingBox, Team, TrackedObject};

use super::ObjectModel;

const PLAYER_COUNT: u32 = 3;
const PLAYER_BOX_WIDTH: f64 = 60.0;
const PLAYER_BOX_HEIGHT: f64 = 120.0;
const FIRST_JERSEY_NUMBER: u32 = 21;

const BALL_ID: u32 = 999;
const BALL_BOX_SIZE: f64 = 20.0;
const BALL_CONFIDENCE: f64 = 0.78;

/// Deterministic synthetic object model.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticObjectModel;

impl SyntheticObjectModel {
    pub fn new() -> Self {
        Self
    }

    /// Clamped center of a player at the given timestamp.
    fn player_center(player: u32, timestamp: f64, width: f64, height: f64) -> (f64, f64) {
        let p = player as f64;
        let x = width * (0.2 + 0.6 * (0.5 + 0.3 * p + 0.1 * timestamp));
        let y = height * (0.3 + 0.4 * (0.5 + 0.2 * p + 0.05 * timestamp));
        // min-then-max: the lower bound wins on frames narrower than the clamp window
        let x = x.min(width - 90.0).max(30.0);
        let y = y.min(height - 60.0).max(60.0);
        (x, y)
    }

    /// Clamped center of the ball at the given timestamp.
    fn ball_center(timestamp: f64, width: f64, height: f64) -> (f64, f64) {
        let x = width * (0.3 + 0.4 * (0.5 + 0.2 * timestamp));
        let y = height * (0.4 + 0.2 * (0.5 + 0.1 * timestamp));
        let x = x.min(width - 20.0).max(10.0);
        let y = y.min(height - 20.0).max(10.0);
        (x, y)
    }

    fn player_at(player: u32, timestamp: f64, width: f64, height: f64) -> TrackedObject {
        let (cx, cy) = Self::player_center(player, timestamp, width, height);
        let confidence = 0.85 + 0.1 * (player % 3) as f64 / 3.0;
        let team = if player % 2 == 0 {
            Team::TeamA
        } else {
            Team::TeamB
        };
        TrackedObject::player(
            player + 1,
            BoundingBox::centered(cx, cy, PLAYER_BOX_WIDTH, PLAYER_BOX_HEIGHT, confidence),
            team,
            player + FIRST_JERSEY_NUMBER,
        )
    }

    fn ball_at(timestamp: f64, width: f64, height: f64) -> TrackedObject {
        let (cx, cy) = Self::ball_center(timestamp, width, height);
        TrackedObject::ball(
            BALL_ID,
            BoundingBox::centered(cx, cy, BALL_BOX_SIZE, BALL_BOX_SIZE, BALL_CONFIDENCE),
        )
    }
}

impl ObjectModel for SyntheticObjectModel {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn objects_at(
        &self,
        frame_number: u64,
        fps: f64,
        width: i32,
        height: i32,
    ) -> Vec<TrackedObject> {
        let timestamp = frame_number as f64 / fps;
        let (w, h) = (width as f64, height as f64);

        let mut objects: Vec<TrackedObject> = (0..PLAYER_COUNT)
            .map(|player| Self::player_at(player, timestamp, w, h))
            .collect();
        objects.push(Self::ball_at(timestamp, w, h));
        objects
    }
}
