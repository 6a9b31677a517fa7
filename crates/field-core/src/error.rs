use thiserror::Error;

/// Reasons a [`FieldOptions`](crate::FieldOptions) set cannot build a field.
///
/// Only construction is fallible. The per-frame update never returns an
/// error; bad numeric input degrades to zero displacement instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("particle count must be non-zero")]
    EmptyField,
    #[error("sphere radius range [{min}, {max}) must be finite, positive and non-empty")]
    InvalidRadiusRange { min: f32, max: f32 },
    #[error("phase thresholds must satisfy 0 <= waves_at ({waves_at}) < helix_at ({helix_at}) <= 1")]
    InvalidThresholds { waves_at: f32, helix_at: f32 },
    #[error("smoothing factor {0} must lie in (0, 1]")]
    InvalidSmoothing(f32),
    #[error("{name} radius {value} must be finite and non-negative")]
    InvalidRadius { name: &'static str, value: f32 },
}
