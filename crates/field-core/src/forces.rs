use crate::constants::{
    DISTANCE_EPSILON, GHOST_DEPTH_SCALE, GHOST_EXTENT_FRACTION, GHOST_FREQ_X, GHOST_FREQ_Y,
    GHOST_STRENGTH, POINTER_DEPTH_SCALE, POINTER_STRENGTH,
};
use crate::clock::cycle_angle;
use glam::{Vec2, Vec3};

/// A planar repulsor acting on particle targets.
///
/// Inside `radius` the target is pushed away from `center` in the xy plane by
/// `(radius - d) * strength` and pushed back along -z by that amount times
/// `depth_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repulsor {
    pub center: Vec2,
    pub radius: f32,
    pub strength: f32,
    pub depth_scale: f32,
}

impl Repulsor {
    /// The user's pointer, in world units.
    pub fn pointer(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            strength: POINTER_STRENGTH,
            depth_scale: POINTER_DEPTH_SCALE,
        }
    }

    /// The wandering ghost; softer than the pointer.
    pub fn ghost(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            strength: GHOST_STRENGTH,
            depth_scale: GHOST_DEPTH_SCALE,
        }
    }

    /// Largest planar push this repulsor can apply.
    pub fn max_planar_push(&self) -> f32 {
        self.radius * self.strength
    }

    /// Largest depth push this repulsor can apply.
    pub fn max_depth_push(&self) -> f32 {
        self.max_planar_push() * self.depth_scale
    }

    /// Return `target` displaced by this repulsor.
    ///
    /// A target sitting on the centre has no push direction and is returned
    /// unchanged.
    #[inline]
    pub fn displace(&self, target: Vec3) -> Vec3 {
        let delta = self.center - target.truncate();
        let dist = delta.length();
        if !(dist < self.radius) || dist <= DISTANCE_EPSILON {
            return target;
        }
        let force = (self.radius - dist) * self.strength;
        let dir = delta / dist;
        Vec3::new(
            target.x - dir.x * force,
            target.y - dir.y * force,
            target.z - force * self.depth_scale,
        )
    }
}

/// Position of the ghost at time `t` for a visible world `extent` (w, h).
#[inline]
pub fn ghost_position(time: f64, extent: Vec2) -> Vec2 {
    Vec2::new(
        cycle_angle(time, GHOST_FREQ_X).sin() * extent.x * GHOST_EXTENT_FRACTION,
        cycle_angle(time, GHOST_FREQ_Y).cos() * extent.y * GHOST_EXTENT_FRACTION,
    )
}
