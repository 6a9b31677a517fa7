pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod forces;
pub mod options;
pub mod phase;
pub mod pointer;
pub mod render;
pub mod scroll;
pub mod snapshot;

pub use camera::Camera;
pub use clock::cycle_angle;
pub use error::FieldError;
pub use field::{blend_toward, next_positions, spin_angle, spin_matrix, target_position, ParticleField};
pub use forces::{ghost_position, Repulsor};
pub use options::{FieldOptions, PhaseThresholds};
pub use phase::{phase_for, Phase};
pub use pointer::{normalize_client, ClickRecord, PointerTracker, PrimaryTouch};
pub use render::{PointRenderer, SceneUniforms};
pub use scroll::{scroll_progress, ScrollTracker};
pub use snapshot::FrameSnapshot;
