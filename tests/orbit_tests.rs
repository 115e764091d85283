// Host-side tests for the orbit camera.

use blocks_core::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

fn camera(controls: OrbitConfig) -> OrbitCamera {
    OrbitCamera::new(&SceneConfig::default().camera, controls)
}

fn still() -> OrbitConfig {
    OrbitConfig {
        auto_rotate: false,
        damping: 0.0,
        ..OrbitConfig::default()
    }
}

fn angle_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

#[test]
fn starts_at_configured_position() {
    let cam = camera(OrbitConfig::default());
    assert!((cam.eye() - Vec3::new(12.0, 0.0, -13.0)).length() < 1e-4);
    assert!((cam.radius - 313f32.sqrt()).abs() < 1e-4);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn auto_rotate_rate_matches_speed() {
    let cam = camera(OrbitConfig::default());
    assert!((cam.auto_rotate_rate() - TAU / 60.0 * 1.5).abs() < 1e-6);
    // speed 2.0 is one full turn in 30 seconds
    let fast = camera(OrbitConfig {
        auto_rotate_speed: 2.0,
        ..OrbitConfig::default()
    });
    assert!((fast.auto_rotate_rate() * 30.0 - TAU).abs() < 1e-4);
}

#[test]
fn auto_rotation_changes_only_azimuth() {
    let mut cam = camera(OrbitConfig::default());
    let (radius, polar, azimuth) = (cam.radius, cam.polar, cam.azimuth);
    for _ in 0..60 {
        cam.update(1.0 / 60.0);
    }
    assert_eq!(cam.radius, radius);
    assert!((cam.polar - polar).abs() < 1e-6);
    assert!((angle_diff(cam.azimuth, azimuth) - cam.auto_rotate_rate()).abs() < 1e-3);
    assert!((cam.eye().length() - radius).abs() < 1e-3);
}

#[test]
fn auto_rotation_can_be_disabled() {
    let mut cam = camera(still());
    let eye = cam.eye();
    cam.update(1.0);
    assert!((cam.eye() - eye).length() < 1e-5);
}

#[test]
fn zoom_is_clamped_to_radius_limits() {
    let mut cam = camera(still());
    for _ in 0..500 {
        cam.zoom_by_wheel(-100.0);
    }
    assert_eq!(cam.radius, ORBIT_MIN_RADIUS);
    for _ in 0..500 {
        cam.zoom_by_wheel(100.0);
    }
    assert_eq!(cam.radius, ORBIT_MAX_RADIUS);
}

#[test]
fn single_wheel_notch_scales_radius() {
    let mut cam = camera(still());
    let r = cam.radius;
    cam.zoom_by_wheel(-1.0);
    assert!((cam.radius - r * ORBIT_ZOOM_STEP).abs() < 1e-4);
    cam.zoom_by_wheel(0.0);
    assert!((cam.radius - r * ORBIT_ZOOM_STEP).abs() < 1e-4);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = camera(still());
    cam.rotate_by_pixels(0.0, -100_000.0, 800.0);
    cam.update(0.016);
    assert!(cam.polar <= PI - ORBIT_POLAR_EPS + 1e-6);
    cam.rotate_by_pixels(0.0, 100_000.0, 800.0);
    cam.update(0.016);
    assert!(cam.polar >= ORBIT_POLAR_EPS - 1e-6);
}

#[test]
fn damped_rotation_eases_in() {
    let mut cam = camera(OrbitConfig {
        auto_rotate: false,
        ..OrbitConfig::default()
    });
    let start = cam.azimuth;
    cam.rotate_by_pixels(80.0, 0.0, 800.0);
    cam.update(0.016);
    let first = angle_diff(cam.azimuth, start);
    let full = TAU * 80.0 / 800.0;
    assert!((first - full * ORBIT_DAMPING).abs() < 1e-4);
    for _ in 0..400 {
        cam.update(0.016);
    }
    assert!((angle_diff(cam.azimuth, start) - full).abs() < 1e-3);
}

#[test]
fn pan_moves_target_sideways_and_keeps_distance() {
    let mut cam = camera(still());
    let forward = (cam.target - cam.eye()).normalize();
    let radius = cam.radius;
    cam.pan_by_pixels(120.0, -40.0, 800.0);
    cam.update(0.016);
    assert!(cam.target.length() > 0.0);
    assert!(cam.target.dot(forward).abs() < 1e-4);
    assert!(((cam.eye() - cam.target).length() - radius).abs() < 1e-4);
}

#[test]
fn disabled_controls_ignore_input() {
    let mut cam = camera(OrbitConfig {
        enable_rotate: false,
        enable_zoom: false,
        enable_pan: false,
        ..still()
    });
    let (eye, radius) = (cam.eye(), cam.radius);
    cam.rotate_by_pixels(300.0, 300.0, 800.0);
    cam.zoom_by_wheel(-100.0);
    cam.pan_by_pixels(50.0, 50.0, 800.0);
    cam.update(0.016);
    assert_eq!(cam.radius, radius);
    assert!((cam.eye() - eye).length() < 1e-5);
}

#[test]
fn view_projection_puts_target_in_front() {
    let cam = camera(OrbitConfig::default());
    let clip = cam.view_proj(16.0 / 9.0) * cam.target.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(clip.w > 0.0);
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
