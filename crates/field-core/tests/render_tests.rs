// Host-side tests for the camera, colors and the point renderer's CPU side.
// Nothing here needs a GPU; the shader is checked with naga.

use field_core::color::hsl_to_rgb;
use field_core::render::{pack_instances, PointInstance, POINTS_WGSL};
use field_core::{spin_matrix, Camera, SceneUniforms};
use glam::{Mat4, Vec2, Vec3, Vec4};

#[test]
fn default_camera_sees_a_square_window() {
    let camera = Camera::default();
    let extent = camera.world_extent();
    let expected = 2.0 * 12.0 * 30f32.to_radians().tan();
    assert!((extent.y - expected).abs() < 1e-4);
    assert!((extent.x - extent.y).abs() < 1e-6);
}

#[test]
fn surface_aspect_widens_the_extent() {
    let camera = Camera::for_surface(1600, 900);
    let extent = camera.world_extent();
    assert!((extent.x / extent.y - 16.0 / 9.0).abs() < 1e-5);

    // Zero-sized surfaces fall back to a 1x1 aspect instead of dividing by zero
    let camera = Camera::for_surface(0, 0);
    assert_eq!(camera.aspect, 1.0);
    assert!(camera.world_extent().is_finite());
}

#[test]
fn pointer_world_projects_back_to_its_ndc() {
    let camera = Camera::for_surface(1280, 720);
    let extent = camera.world_extent();
    let view_proj = camera.projection_matrix() * camera.view_matrix();
    for ndc in [Vec2::new(1.0, 1.0), Vec2::new(-0.5, 0.25), Vec2::ZERO] {
        let world = ndc * extent * 0.5;
        let clip = view_proj * Vec4::new(world.x, world.y, 0.0, 1.0);
        let projected = Vec2::new(clip.x, clip.y) / clip.w;
        assert!((projected - ndc).length() < 1e-4, "{ndc:?} -> {projected:?}");
    }
}

#[test]
fn uniforms_layout_matches_the_shader() {
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 208);
    assert_eq!(std::mem::size_of::<PointInstance>(), 24);
}

#[test]
fn uniforms_carry_point_size_and_fog() {
    let camera = Camera::default();
    let u = SceneUniforms::with_defaults(&camera, Mat4::IDENTITY);
    let expected_side = 0.08 * 30f32.to_radians().tan();
    assert!((u.params[0] - expected_side).abs() < 1e-6);
    assert_eq!(u.params[1], 10.0);
    assert_eq!(u.params[2], 30.0);
    assert_eq!(u.model, Mat4::IDENTITY.to_cols_array_2d());
    assert_eq!(u.view, camera.view_matrix().to_cols_array_2d());
}

#[test]
fn spin_rotates_about_y() {
    let m = spin_matrix(20.0);
    let p = m.transform_point3(Vec3::new(0.0, 3.0, 0.0));
    assert!((p - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-6);
    let q = m.transform_point3(Vec3::X);
    assert!((q.length() - 1.0).abs() < 1e-6);
    assert!((q.x - 1.0f32.cos()).abs() < 1e-6);
}

#[test]
fn pack_instances_respects_capacity() {
    let positions = vec![Vec3::new(1.0, 2.0, 3.0); 10];
    let colors = vec![Vec3::new(0.0, 0.5, 1.0); 10];
    let mut out = Vec::new();
    pack_instances(&positions, &colors, 4, &mut out);
    assert_eq!(out.len(), 4);
    assert_eq!(
        out[0],
        PointInstance {
            position: [1.0, 2.0, 3.0],
            color: [0.0, 0.5, 1.0],
        }
    );

    // The buffer is reused, not appended to
    pack_instances(&positions[..2], &colors, 4, &mut out);
    assert_eq!(out.len(), 2);
}

fn assert_rgb(actual: [f32; 3], expected: [f32; 3]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-5, "{actual:?} != {expected:?}");
    }
}

#[test]
fn hsl_primaries() {
    assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    assert_rgb(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
    assert_rgb(hsl_to_rgb(0.5, 1.0, 0.5), [0.0, 1.0, 1.0]);
    assert_eq!(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
}

#[test]
fn hsl_hue_wraps() {
    assert_rgb(hsl_to_rgb(1.45, 1.0, 0.5), hsl_to_rgb(0.45, 1.0, 0.5));
    assert_rgb(hsl_to_rgb(-0.55, 1.0, 0.5), hsl_to_rgb(0.45, 1.0, 0.5));
}

#[test]
fn points_shader_validates() {
    let module = naga::front::wgsl::parse_str(POINTS_WGSL)
        .unwrap_or_else(|e| panic!("WGSL parse error: {e:?}"));
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("WGSL validation error: {e:?}"));

    let entry_points: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(entry_points.contains(&"vs_main"));
    assert!(entry_points.contains(&"fs_main"));
}
