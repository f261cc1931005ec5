//! Frame overlay rendering.
//!
//! Draws the object model's output onto a copy of the frame. Geometry
//! comes straight from the tracked objects' bounding boxes, so overlay
//! and JSON record always agree.

use opencv::core::{Mat, Point, Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::error::PipelineResult;
use crate::models::{ObjectKind, Team, TrackedObject};

const BALL_RADIUS: i32 = 10;

fn team_color(team: Option<Team>) -> Scalar {
    // BGR
    match team {
        Some(Team::TeamB) => Scalar::new(255.0, 0.0, 0.0, 0.0), // blue
        _ => Scalar::new(0.0, 255.0, 0.0, 0.0),                 // green
    }
}

fn ball_color() -> Scalar {
    Scalar::new(0.0, 255.0, 255.0, 0.0) // yellow
}

fn hud_color() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

/// Render tracking overlays onto a copy of `frame`.
///
/// The input frame is never mutated.
pub fn annotate_frame(
    frame: &Mat,
    objects: &[TrackedObject],
    frame_number: u64,
    timestamp: f64,
) -> PipelineResult<Mat> {
    let mut annotated = frame.clone();

    for object in objects {
        match object.kind {
            ObjectKind::Player => draw_player(&mut annotated, object)?,
            ObjectKind::Ball => draw_ball(&mut annotated, object)?,
        }
    }

    draw_hud(&mut annotated, frame_number, timestamp)?;
    Ok(annotated)
}

fn draw_player(frame: &mut Mat, object: &TrackedObject) -> PipelineResult<()> {
    let color = team_color(object.team);
    let bbox = &object.bbox;
    let rect = Rect::new(
        bbox.x as i32,
        bbox.y as i32,
        bbox.width as i32,
        bbox.height as i32,
    );
    imgproc::rectangle(frame, rect, color, 2, imgproc::LINE_8, 0)?;

    let (cx, cy) = bbox.center();
    let label = format!("P{}", object.id);
    imgproc::put_text(
        frame,
        &label,
        Point::new((cx - 20.0) as i32, (cy - 65.0) as i32),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.5,
        color,
        1,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}

fn draw_ball(frame: &mut Mat, object: &TrackedObject) -> PipelineResult<()> {
    let color = ball_color();
    let (cx, cy) = object.bbox.center();
    imgproc::circle(
        frame,
        Point::new(cx as i32, cy as i32),
        BALL_RADIUS,
        color,
        2,
        imgproc::LINE_8,
        0,
    )?;
    imgproc::put_text(
        frame,
        "Ball",
        Point::new((cx - 15.0) as i32, (cy - 15.0) as i32),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.4,
        color,
        1,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}

fn draw_hud(frame: &mut Mat, frame_number: u64, timestamp: f64) -> PipelineResult<()> {
    let text = format!("Frame: {} | Time: {:.1}s", frame_number, timestamp);
    imgproc::put_text(
        frame,
        &text,
        Point::new(10, 30),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.7,
        hud_color(),
        2,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}
