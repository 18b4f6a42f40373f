// Host-side tests for easing curves, the orbit camera and the viewer camera.

use glam::{Vec3, Vec4};
use proptest::prelude::*;
use showcase_core::easing::{ease_out_cubic, lerp, zoom_offset};
use showcase_core::{
    Camera, OrbitCamera, CAMERA_Z, DEMO_ZOOM_AMPLITUDE, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR,
    ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

fn settle(orbit: &mut OrbitCamera) {
    for _ in 0..1_000 {
        orbit.update();
    }
}

#[test]
fn ease_out_cubic_endpoints_and_clamping() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-3.0), 0.0);
    assert_eq!(ease_out_cubic(7.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn lerp_hits_both_ends() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}

#[test]
fn zoom_offset_peaks_at_quarter_cycle() {
    assert!(zoom_offset(0.0).abs() < 1e-6);
    assert!((zoom_offset(FRAC_PI_2) - DEMO_ZOOM_AMPLITUDE).abs() < 1e-6);
    assert!((zoom_offset(PI + FRAC_PI_2) - DEMO_ZOOM_AMPLITUDE).abs() < 1e-5);
    assert!(zoom_offset(TAU).abs() < 1e-5);
    // past the cycle it stays closed
    assert!(zoom_offset(TAU + 1.0).abs() < 1e-5);
}

proptest! {
    #[test]
    fn zoom_offset_is_symmetric(t in 0.0f32..TAU) {
        prop_assert!((zoom_offset(t) - zoom_offset(TAU - t)).abs() < 1e-4);
        prop_assert!(zoom_offset(t) >= -1e-5);
        prop_assert!(zoom_offset(t) <= DEMO_ZOOM_AMPLITUDE + 1e-5);
    }

    #[test]
    fn ease_out_cubic_is_monotone(a in 0.0f32..1.0, b in 0.0f32..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi));
        // ease-out runs ahead of linear
        prop_assert!(ease_out_cubic(lo) >= lo - 1e-6);
    }

    #[test]
    fn orbit_stays_inside_limits(
        drags in prop::collection::vec((-800.0f32..800.0, -800.0f32..800.0), 1..30),
        wheel in prop::collection::vec(-3i32..=3, 0..40),
    ) {
        let mut orbit = OrbitCamera::new(CAMERA_Z);
        for (dx, dy) in drags {
            orbit.rotate_by_pixels(dx, dy, 600.0);
            orbit.update();
        }
        for notch in wheel {
            orbit.zoom_wheel(notch as f32);
            orbit.update();
        }
        prop_assert!(orbit.polar >= ORBIT_MIN_POLAR && orbit.polar <= ORBIT_MAX_POLAR);
        prop_assert!(orbit.distance >= ORBIT_MIN_DISTANCE && orbit.distance <= ORBIT_MAX_DISTANCE);
        prop_assert!((orbit.eye().length() - orbit.distance).abs() < 1e-3);
    }
}

#[test]
fn orbit_starts_on_positive_z() {
    let orbit = OrbitCamera::new(CAMERA_Z);
    let eye = orbit.eye();
    assert!(eye.abs_diff_eq(Vec3::new(0.0, 0.0, CAMERA_Z), 1e-5), "{eye:?}");
}

#[test]
fn drag_is_damped_but_reaches_full_turn() {
    let mut orbit = OrbitCamera::new(CAMERA_Z);
    orbit.rotate_by_pixels(100.0, 0.0, 600.0);

    assert!(orbit.update());
    let first = orbit.azimuth;
    // only the damping fraction lands on the first frame
    let target = -TAU * 100.0 / 600.0;
    assert!((first - target * 0.05).abs() < 1e-6);

    settle(&mut orbit);
    assert!((orbit.azimuth - target).abs() < 1e-3, "{}", orbit.azimuth);
    assert!(!orbit.update());
}

#[test]
fn polar_angle_is_clamped() {
    let mut orbit = OrbitCamera::new(CAMERA_Z);
    orbit.rotate_by_pixels(0.0, -10_000.0, 600.0);
    settle(&mut orbit);
    assert_eq!(orbit.polar, ORBIT_MAX_POLAR);

    orbit.rotate_by_pixels(0.0, 20_000.0, 600.0);
    settle(&mut orbit);
    assert_eq!(orbit.polar, ORBIT_MIN_POLAR);
}

#[test]
fn wheel_zoom_scales_and_clamps_distance() {
    let mut orbit = OrbitCamera::new(CAMERA_Z);
    orbit.zoom_wheel(-120.0);
    orbit.update();
    assert!((orbit.distance - CAMERA_Z * 0.95).abs() < 1e-5);

    for _ in 0..100 {
        orbit.zoom_wheel(-1.0);
        orbit.update();
    }
    assert_eq!(orbit.distance, ORBIT_MIN_DISTANCE);

    for _ in 0..100 {
        orbit.zoom_wheel(1.0);
        orbit.update();
    }
    assert_eq!(orbit.distance, ORBIT_MAX_DISTANCE);

    // zero delta changes nothing
    orbit.zoom_wheel(0.0);
    assert!(!orbit.update());
}

#[test]
fn set_distance_is_clamped_on_next_update() {
    let mut orbit = OrbitCamera::new(CAMERA_Z);
    orbit.set_distance(2.0);
    assert_eq!(orbit.distance, 2.0);
    orbit.update();
    assert_eq!(orbit.distance, ORBIT_MIN_DISTANCE);
}

#[test]
fn reset_drops_pending_motion() {
    let mut orbit = OrbitCamera::new(CAMERA_Z);
    orbit.rotate_by_pixels(300.0, 120.0, 600.0);
    orbit.zoom_wheel(-1.0);
    orbit.update();
    orbit.reset(CAMERA_Z);
    assert!(!orbit.update());
    assert_eq!(orbit.azimuth, 0.0);
    assert_eq!(orbit.polar, FRAC_PI_2);
    assert_eq!(orbit.distance, CAMERA_Z);
}

#[test]
fn viewer_camera_projects_origin_to_screen_center() {
    let camera = Camera::viewer(Vec3::new(0.0, 0.0, CAMERA_Z), 16.0 / 9.0);
    assert!((camera.fovy_radians - 50f32.to_radians()).abs() < 1e-6);

    let clip = camera.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);

    // a point above the origin lands in the upper half
    let clip = camera.view_proj() * Vec4::new(0.0, 1.0, 0.0, 1.0);
    assert!(clip.y / clip.w > 0.0);
}

#[test]
fn viewport_updates_aspect_and_ignores_zero_sizes() {
    let mut camera = Camera::viewer(Vec3::new(0.0, 0.0, CAMERA_Z), 1.0);
    camera.set_viewport(800, 400);
    assert_eq!(camera.aspect, 2.0);
    camera.set_viewport(800, 0);
    assert_eq!(camera.aspect, 2.0);
    camera.set_viewport(0, 300);
    assert_eq!(camera.aspect, 2.0);
}
