// Tuning constants shared by the web and native frontends.

// Field population
pub const PARTICLE_COUNT: usize = 4000;
pub const SPHERE_RADIUS_MIN: f32 = 4.0; // inner shell radius
pub const SPHERE_RADIUS_MAX: f32 = 6.0; // outer shell radius (exclusive)

// Palette: narrow green-blue hue band, full saturation, mid lightness
pub const HUE_MIN: f32 = 0.4;
pub const HUE_SPAN: f32 = 0.2;
pub const SATURATION: f32 = 1.0;
pub const LIGHTNESS: f32 = 0.5;

// Scroll thresholds for the three formations
pub const WAVES_AT: f32 = 0.1;
pub const HELIX_AT: f32 = 0.5;

// Wave formation (flattened grid)
pub const GRID_COLUMNS: usize = 100;
pub const GRID_COLUMN_OFFSET: f32 = 50.0;
pub const GRID_ROW_OFFSET: f32 = 20.0;
pub const GRID_SPACING: f32 = 0.5;
pub const WAVE_FREQUENCY: f32 = 0.2;
pub const WAVE_AMPLITUDE: f32 = 2.0;

// Helix formation
pub const HELIX_ANGLE_STEP: f32 = 0.1; // radians per particle index
pub const HELIX_ANGULAR_SPEED: f32 = 0.2; // radians per second
pub const HELIX_RADIUS_BASE: f32 = 5.0;
pub const HELIX_RADIUS_SWING: f32 = 2.0;
pub const HELIX_RADIUS_FREQUENCY: f32 = 0.01;
pub const HELIX_STACK_PERIOD: usize = 200;
pub const HELIX_STACK_SPACING: f32 = 0.1;
pub const HELIX_STACK_OFFSET: f32 = 10.0;

// Pointer repulsion
pub const POINTER_REPULSION_RADIUS: f32 = 3.0;
pub const POINTER_STRENGTH: f32 = 2.0;
pub const POINTER_DEPTH_SCALE: f32 = 2.0; // z push relative to planar push

// Ghost attractor: autonomous wandering repulsor
pub const GHOST_REPULSION_RADIUS: f32 = 4.0;
pub const GHOST_STRENGTH: f32 = 0.5;
pub const GHOST_DEPTH_SCALE: f32 = 1.0;
pub const GHOST_FREQ_X: f32 = 0.5;
pub const GHOST_FREQ_Y: f32 = 0.3;
pub const GHOST_EXTENT_FRACTION: f32 = 0.3; // of the visible world width/height

// Planar distances below this skip repulsion (no direction to push along)
pub const DISTANCE_EPSILON: f32 = 1e-6;

// Per-frame exponential blend toward the target
pub const SMOOTHING_FACTOR: f32 = 0.05;

// Whole-cloud rotation about +Y, radians per second
pub const SPIN_RATE: f32 = 0.05;

// Camera
pub const CAMERA_Z: f32 = 12.0;
pub const CAMERA_FOVY_DEGREES: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Point sprites
pub const POINT_SIZE: f32 = 0.08; // world units, attenuated by perspective
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 30.0;

// Overlay canvas
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MIN_DEVICE_PIXEL_RATIO: f64 = 1.0;
