use crate::constants::{
    GHOST_REPULSION_RADIUS, HELIX_AT, PARTICLE_COUNT, POINTER_REPULSION_RADIUS, SMOOTHING_FACTOR,
    SPHERE_RADIUS_MAX, SPHERE_RADIUS_MIN, WAVES_AT,
};
use crate::error::FieldError;

/// Scroll-progress values at which the formation changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseThresholds {
    pub waves_at: f32,
    pub helix_at: f32,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            waves_at: WAVES_AT,
            helix_at: HELIX_AT,
        }
    }
}

/// Build-time knobs for a [`ParticleField`](crate::ParticleField).
///
/// The page always uses [`FieldOptions::default`]; other sizes exist for the
/// native preview and for tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldOptions {
    pub particle_count: usize,
    /// Shell radius is sampled uniformly from `[min, max)`.
    pub sphere_radius_range: (f32, f32),
    pub phase_thresholds: PhaseThresholds,
    pub smoothing_factor: f32,
    pub pointer_repulsion_radius: f32,
    pub ghost_repulsion_radius: f32,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            sphere_radius_range: (SPHERE_RADIUS_MIN, SPHERE_RADIUS_MAX),
            phase_thresholds: PhaseThresholds::default(),
            smoothing_factor: SMOOTHING_FACTOR,
            pointer_repulsion_radius: POINTER_REPULSION_RADIUS,
            ghost_repulsion_radius: GHOST_REPULSION_RADIUS,
        }
    }
}

impl FieldOptions {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::EmptyField);
        }

        let (min, max) = self.sphere_radius_range;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(FieldError::InvalidRadiusRange { min, max });
        }

        let PhaseThresholds { waves_at, helix_at } = self.phase_thresholds;
        if !(0.0..=1.0).contains(&waves_at)
            || !(0.0..=1.0).contains(&helix_at)
            || waves_at >= helix_at
        {
            return Err(FieldError::InvalidThresholds { waves_at, helix_at });
        }

        let k = self.smoothing_factor;
        if !(k > 0.0 && k <= 1.0) {
            return Err(FieldError::InvalidSmoothing(k));
        }

        for (name, value) in [
            ("pointer repulsion", self.pointer_repulsion_radius),
            ("ghost repulsion", self.ghost_repulsion_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidRadius { name, value });
            }
        }
        Ok(())
    }
}
