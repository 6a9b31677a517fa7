use crate::forces::ghost_position;
use glam::Vec2;

/// Input state read once at the top of a frame.
///
/// Every particle in the frame sees the same snapshot; nothing in the update
/// reads the live trackers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub progress: f32,
    /// Pointer on the z = 0 plane, world units.
    pub pointer_world: Vec2,
    /// Ghost on the z = 0 plane, world units.
    pub ghost_world: Vec2,
    /// Animation time in seconds.
    pub time: f64,
}

impl FrameSnapshot {
    /// Build a snapshot from tracker values and the visible world `extent`.
    ///
    /// Non-finite components (e.g. a viewport measured before layout) are
    /// replaced with 0 so they never reach the position buffer.
    pub fn capture(progress: f32, pointer_ndc: Vec2, extent: Vec2, time: f64) -> Self {
        let time = if time.is_finite() { time } else { 0.0 };
        Self {
            progress: finite_or_zero(progress),
            pointer_world: finite_vec2(pointer_ndc * extent * 0.5),
            ghost_world: finite_vec2(ghost_position(time, extent)),
            time,
        }
    }
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

#[inline]
fn finite_vec2(v: Vec2) -> Vec2 {
    Vec2::new(finite_or_zero(v.x), finite_or_zero(v.y))
}
