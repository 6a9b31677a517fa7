use crate::clock::cycle_angle;
use crate::color::hsl_to_rgb;
use crate::constants::{HUE_MIN, HUE_SPAN, LIGHTNESS, SATURATION, SPIN_RATE};
use crate::error::FieldError;
use crate::forces::Repulsor;
use crate::options::FieldOptions;
use crate::phase::{phase_for, Phase};
use crate::snapshot::FrameSnapshot;
use glam::{Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

/// Fixed-size point cloud that morphs between formations.
///
/// The particle count, the original shell positions and the colors are set
/// at construction and never change. Only `positions` moves, and only through
/// [`ParticleField::step`]; everything else gets read access.
#[derive(Clone, Debug)]
pub struct ParticleField {
    options: FieldOptions,
    originals: Vec<Vec3>,
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(options: FieldOptions, rng: &mut R) -> Result<Self, FieldError> {
        options.validate()?;
        let n = options.particle_count;
        let mut originals = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        for _ in 0..n {
            originals.push(sample_shell_point(rng, options.sphere_radius_range));
            colors.push(sample_color(rng));
        }
        log::debug!("[field] built {} particles", n);
        Ok(Self {
            options,
            positions: originals.clone(),
            originals,
            colors,
        })
    }

    /// Deterministic construction, used by tests and the native preview.
    pub fn with_seed(options: FieldOptions, seed: u64) -> Result<Self, FieldError> {
        Self::new(options, &mut StdRng::seed_from_u64(seed))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn originals(&self) -> &[Vec3] {
        &self.originals
    }

    pub fn phase(&self, snapshot: &FrameSnapshot) -> Phase {
        phase_for(snapshot.progress, &self.options.phase_thresholds)
    }

    /// Advance every particle one frame toward its target.
    ///
    /// In-place equivalent of [`next_positions`].
    pub fn step(&mut self, snapshot: &FrameSnapshot) {
        let factor = self.options.smoothing_factor;
        let phase = self.phase(snapshot);
        let (pointer, ghost) = repulsors(snapshot, &self.options);
        for (i, (current, original)) in self
            .positions
            .iter_mut()
            .zip(self.originals.iter())
            .enumerate()
        {
            let target = displaced_target(phase, i, *original, snapshot.time, &pointer, &ghost);
            *current = advance(*current, target, factor);
        }
    }
}

/// Target for particle `index`: formation target, then pointer repulsion,
/// then ghost repulsion.
pub fn target_position(
    index: usize,
    original: Vec3,
    snapshot: &FrameSnapshot,
    options: &FieldOptions,
) -> Vec3 {
    let phase = phase_for(snapshot.progress, &options.phase_thresholds);
    let (pointer, ghost) = repulsors(snapshot, options);
    displaced_target(phase, index, original, snapshot.time, &pointer, &ghost)
}

/// First-order low-pass step: `current + (target - current) * factor`.
#[inline]
pub fn blend_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Next frame's positions for `prev`, without touching it.
///
/// `prev` and `originals` must have the same length; the particle count
/// never changes, so a mismatch panics.
pub fn next_positions(
    prev: &[Vec3],
    originals: &[Vec3],
    snapshot: &FrameSnapshot,
    options: &FieldOptions,
) -> Vec<Vec3> {
    assert_eq!(
        prev.len(),
        originals.len(),
        "positions and originals differ in length"
    );
    let phase = phase_for(snapshot.progress, &options.phase_thresholds);
    let (pointer, ghost) = repulsors(snapshot, options);
    prev.iter()
        .zip(originals.iter())
        .enumerate()
        .map(|(i, (current, original))| {
            let target = displaced_target(phase, i, *original, snapshot.time, &pointer, &ghost);
            advance(*current, target, options.smoothing_factor)
        })
        .collect()
}

/// Rotation of the whole cloud about +y at `time` seconds.
#[inline]
pub fn spin_angle(time: f64) -> f32 {
    cycle_angle(time, SPIN_RATE)
}

pub fn spin_matrix(time: f64) -> Mat4 {
    Mat4::from_rotation_y(spin_angle(time))
}

/// Uniform point on a shell whose radius is drawn from `[min, max)`.
pub fn sample_shell_point<R: Rng + ?Sized>(rng: &mut R, radius_range: (f32, f32)) -> Vec3 {
    let (min, max) = radius_range;
    let r = rng.gen_range(min..max);
    let theta = TAU * rng.gen::<f32>();
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

pub fn sample_color<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let hue = HUE_MIN + rng.gen::<f32>() * HUE_SPAN;
    Vec3::from(hsl_to_rgb(hue, SATURATION, LIGHTNESS))
}

#[inline]
fn repulsors(snapshot: &FrameSnapshot, options: &FieldOptions) -> (Repulsor, Repulsor) {
    (
        Repulsor::pointer(snapshot.pointer_world, options.pointer_repulsion_radius),
        Repulsor::ghost(snapshot.ghost_world, options.ghost_repulsion_radius),
    )
}

#[inline]
fn displaced_target(
    phase: Phase,
    index: usize,
    original: Vec3,
    time: f64,
    pointer: &Repulsor,
    ghost: &Repulsor,
) -> Vec3 {
    ghost.displace(pointer.displace(phase.target(index, original, time)))
}

// A non-finite target or result keeps the particle where it is; NaN would
// otherwise stick to it through every later blend.
#[inline]
fn advance(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    if !target.is_finite() {
        return current;
    }
    let next = blend_toward(current, target, factor);
    if next.is_finite() {
        next
    } else {
        current
    }
}
