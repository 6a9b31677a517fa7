// Host-side tests for pointer and ghost repulsion.

use field_core::{ghost_position, Repulsor};
use glam::{Vec2, Vec3};

#[test]
fn pointer_push_magnitude() {
    let pointer = Repulsor::pointer(Vec2::ZERO, 3.0);
    // d = 1, force = (3 - 1) * 2 = 4, depth = 4 * 2
    let out = pointer.displace(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(out, Vec3::new(5.0, 0.0, -8.0));
}

#[test]
fn ghost_push_is_softer() {
    let ghost = Repulsor::ghost(Vec2::ZERO, 4.0);
    // d = 1, force = (4 - 1) * 0.5, depth = force * 1
    let out = ghost.displace(Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(out, Vec3::new(2.5, 0.0, -1.5));
}

#[test]
fn push_points_away_from_centre() {
    let pointer = Repulsor::pointer(Vec2::new(1.0, 1.0), 3.0);
    let target = Vec3::new(2.0, 2.0, 0.5);
    let out = pointer.displace(target);
    let before = target.truncate().distance(pointer.center);
    let after = out.truncate().distance(pointer.center);
    assert!(after > before);
    assert!(out.z < target.z);
    // Direction is preserved
    let dir = (out.truncate() - pointer.center).normalize();
    assert!((dir - Vec2::splat(std::f32::consts::FRAC_1_SQRT_2)).length() < 1e-5);
}

#[test]
fn outside_radius_is_untouched() {
    let pointer = Repulsor::pointer(Vec2::ZERO, 3.0);
    let target = Vec3::new(3.0, 0.0, 1.0);
    assert_eq!(pointer.displace(target), target);
    let target = Vec3::new(10.0, -10.0, 0.0);
    assert_eq!(pointer.displace(target), target);
}

#[test]
fn depth_does_not_affect_distance() {
    let pointer = Repulsor::pointer(Vec2::ZERO, 3.0);
    let a = pointer.displace(Vec3::new(1.0, 0.0, 0.0));
    let b = pointer.displace(Vec3::new(1.0, 0.0, 50.0));
    assert_eq!(a.truncate(), b.truncate());
    assert_eq!(b.z - a.z, 50.0);
}

#[test]
fn target_on_the_centre_is_untouched() {
    let pointer = Repulsor::pointer(Vec2::new(0.25, -0.75), 3.0);
    let target = Vec3::new(0.25, -0.75, 4.0);
    assert_eq!(pointer.displace(target), target);
}

#[test]
fn zero_radius_disables_repulsion() {
    let pointer = Repulsor::pointer(Vec2::ZERO, 0.0);
    let target = Vec3::new(0.1, 0.0, 0.0);
    assert_eq!(pointer.displace(target), target);
}

#[test]
fn nan_centre_is_ignored() {
    let ghost = Repulsor::ghost(Vec2::new(f32::NAN, 0.0), 4.0);
    let target = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(ghost.displace(target), target);
}

#[test]
fn max_pushes() {
    let pointer = Repulsor::pointer(Vec2::ZERO, 3.0);
    assert_eq!(pointer.max_planar_push(), 6.0);
    assert_eq!(pointer.max_depth_push(), 12.0);
    let ghost = Repulsor::ghost(Vec2::ZERO, 4.0);
    assert_eq!(ghost.max_planar_push(), 2.0);
    assert_eq!(ghost.max_depth_push(), 2.0);
}

#[test]
fn ghost_wanders_within_its_fraction_of_the_view() {
    let extent = Vec2::new(10.0, 8.0);
    let start = ghost_position(0.0, extent);
    assert_eq!(start.x, 0.0);
    assert!((start.y - 2.4).abs() < 1e-5);
    for step in 0..1000 {
        let p = ghost_position(step as f64 * 0.1, extent);
        assert!(p.x.abs() <= 3.0 + 1e-5);
        assert!(p.y.abs() <= 2.4 + 1e-5);
    }
}
