//! Per-frame scene geometry.
//!
//! Everything here is a pure function of a [`SceneParams`] snapshot and a [`Frame`] record. The
//! result is in world units (x in radians, y in wave units); mapping to pixels is the renderer's
//! job.

use std::f64::consts::TAU;

use crate::animation::driver::Frame;
use crate::animation::wave::{TrigFunction, Wave, linspace};
use crate::foundation::core::{Line, Point, Rect};
use crate::scene::props::SceneParams;

pub const MIN_X: f64 = -TAU;
pub const MAX_X: f64 = 2.0 * TAU;
pub const MIN_Y: f64 = -3.0;
pub const MAX_Y: f64 = 3.0;

/// Samples per world unit along a curve.
pub const SAMPLES_PER_UNIT: f64 = 25.0;

/// Radius of the small angle circle drawn around the rolling circle's center.
pub const THETA_CIRCLE_FACTOR: f64 = 0.3;

/// World rectangle shown by the renderer.
pub fn view_rect() -> Rect {
    Rect::new(MIN_X, MIN_Y, MAX_X, MAX_Y)
}

/// Everything a sink needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneGeometry {
    /// Whole wave across the view.
    pub full_wave: Vec<Point>,
    /// Wave traced from the phase shift up to the current phase.
    pub period_wave: Vec<Point>,
    /// Tip of the period wave.
    pub point: Point,
    pub circle_center: Point,
    /// Signed; follows the amplitude.
    pub circle_radius: f64,
    pub theta_circle: Vec<Point>,
    pub terminal_arm: Line,
    pub connecting_arm: Line,
    /// Equation title; only present on frames that follow a state change.
    pub title: Option<String>,
}

fn sample_count(extent: f64, amplitude: f64) -> usize {
    (extent * amplitude * SAMPLES_PER_UNIT).trunc().abs() as usize
}

fn trace(wave: &Wave, xs: &[f64]) -> Vec<Point> {
    xs.iter().map(|&x| Point::new(x, wave.evaluate(x))).collect()
}

/// Sampled wave over the full view width, widened for frequencies of 1 and above.
pub fn full_wave(params: &SceneParams) -> Vec<Point> {
    let max_x = if params.horizontal_scalar < 1.0 {
        MAX_X
    } else {
        MAX_X * params.horizontal_scalar
    };
    let n = sample_count(max_x, params.vertical_scalar);
    trace(&params.wave(), &linspace(MIN_X, max_x, n))
}

/// Sampled wave from `phase_shift` to `phase_shift + phase`.
pub fn period_wave(params: &SceneParams, phase: f64) -> Vec<Point> {
    let start = params.phase_shift;
    let end = start + phase;
    let n = sample_count(end, params.vertical_scalar);
    trace(&params.wave(), &linspace(start, end, n))
}

/// Geometry for one frame. `params` are expected within the slider ranges.
pub fn compute(params: &SceneParams, frame: &Frame) -> SceneGeometry {
    let full_wave = full_wave(params);
    let period_wave = period_wave(params, frame.phase);

    let end_x = params.phase_shift + frame.phase;
    let point = Point::new(end_x, period_wave.last().map_or(0.0, |p| p.y));

    let center = Point::new(end_x, params.vertical_shift);
    let theta_circle: Vec<Point> = period_wave
        .iter()
        .map(|p| {
            Point::new(
                center.x + p.x.cos() * THETA_CIRCLE_FACTOR,
                center.y + p.x.sin() * THETA_CIRCLE_FACTOR,
            )
        })
        .collect();

    let cos = Wave::scaled(
        TrigFunction::Cosine,
        params.vertical_scalar,
        params.horizontal_scalar,
    );
    let sin = Wave::scaled(
        TrigFunction::Sine,
        params.vertical_scalar,
        params.horizontal_scalar,
    );
    let arm_tip = Point::new(center.x + cos.evaluate(end_x), center.y + sin.evaluate(end_x));
    let arm_root = theta_circle.last().copied().unwrap_or(Point::ZERO);

    SceneGeometry {
        full_wave,
        period_wave,
        point,
        circle_center: center,
        circle_radius: params.vertical_scalar,
        theta_circle,
        terminal_arm: Line::new(arm_root, arm_tip),
        connecting_arm: Line::new(arm_tip, point),
        title: frame.changed.then(|| params.title()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/geometry.rs"]
mod tests;
