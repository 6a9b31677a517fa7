//! Scroll-driven formations.
//!
//! The field has three formations and picks one purely from the current
//! scroll progress. Nothing about the transition is stored: switching phase
//! only changes where each particle is heading, and the per-frame blend in
//! [`crate::field`] turns that jump into a visible morph.

use crate::constants::{
    GRID_COLUMNS, GRID_COLUMN_OFFSET, GRID_ROW_OFFSET, GRID_SPACING, HELIX_ANGLE_STEP,
    HELIX_ANGULAR_SPEED, HELIX_RADIUS_BASE, HELIX_RADIUS_FREQUENCY, HELIX_RADIUS_SWING,
    HELIX_STACK_OFFSET, HELIX_STACK_PERIOD, HELIX_STACK_SPACING, WAVE_AMPLITUDE, WAVE_FREQUENCY,
};
use crate::clock::cycle_angle;
use crate::options::PhaseThresholds;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Particles rest on their original shell positions.
    Sphere,
    /// A flattened grid rippling along x.
    Wave,
    /// A rotating tube around the vertical axis.
    Helix,
}

/// Select the formation for a scroll progress value.
///
/// Thresholds are hard: `s <= waves_at` is Sphere, `waves_at < s < helix_at`
/// is Wave and `s >= helix_at` is Helix. NaN falls through to Sphere.
pub fn phase_for(progress: f32, thresholds: &PhaseThresholds) -> Phase {
    if progress >= thresholds.helix_at {
        Phase::Helix
    } else if progress > thresholds.waves_at {
        Phase::Wave
    } else {
        Phase::Sphere
    }
}

impl Phase {
    /// Unperturbed target for particle `index` given its original shell
    /// position and the animation time in seconds.
    #[inline]
    pub fn target(self, index: usize, original: Vec3, time: f64) -> Vec3 {
        match self {
            Phase::Sphere => sphere_target(original),
            Phase::Wave => wave_target(index, time),
            Phase::Helix => helix_target(index, time),
        }
    }
}

#[inline]
pub fn sphere_target(original: Vec3) -> Vec3 {
    original
}

#[inline]
pub fn wave_target(index: usize, time: f64) -> Vec3 {
    let x = ((index % GRID_COLUMNS) as f32 - GRID_COLUMN_OFFSET) * GRID_SPACING;
    let y = ((index / GRID_COLUMNS) as f32 - GRID_ROW_OFFSET) * GRID_SPACING;
    let z = (x * WAVE_FREQUENCY + cycle_angle(time, 1.0)).sin() * WAVE_AMPLITUDE;
    Vec3::new(x, y, z)
}

/// Radius of particle `index` around the helix axis.
#[inline]
pub fn helix_radius(index: usize) -> f32 {
    HELIX_RADIUS_BASE + (index as f32 * HELIX_RADIUS_FREQUENCY).sin() * HELIX_RADIUS_SWING
}

#[inline]
pub fn helix_target(index: usize, time: f64) -> Vec3 {
    let angle = index as f32 * HELIX_ANGLE_STEP + cycle_angle(time, HELIX_ANGULAR_SPEED);
    let radius = helix_radius(index);
    let y = (index % HELIX_STACK_PERIOD) as f32 * HELIX_STACK_SPACING - HELIX_STACK_OFFSET;
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}
