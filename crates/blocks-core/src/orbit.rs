//! Orbit camera.
//!
//! Spherical camera around a target, driven by auto-rotation and pointer
//! input. Input is accumulated as pending deltas and bled into the camera
//! each update by the damping factor, so motion eases out after a drag.

use crate::config::{CameraConfig, OrbitConfig};
use crate::constants::{
    ORBIT_MAX_RADIUS, ORBIT_MIN_RADIUS, ORBIT_POLAR_EPS, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub radius: f32,
    /// Angle around +Y, measured from +Z toward +X.
    pub azimuth: f32,
    /// Angle down from +Y.
    pub polar: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub controls: OrbitConfig,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_pan: Vec3,
}

impl OrbitCamera {
    pub fn new(camera: &CameraConfig, controls: OrbitConfig) -> Self {
        let offset = camera.position - camera.target;
        let radius = offset.length().max(ORBIT_MIN_RADIUS);
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            target: camera.target,
            radius,
            azimuth,
            polar: polar.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS),
            fovy_radians: camera.fov_deg.to_radians(),
            znear: camera.znear,
            zfar: camera.zfar,
            controls,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_pan: Vec3::ZERO,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.radius * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Radians per second of auto-rotation; `speed` 2.0 is one turn in 30 s.
    pub fn auto_rotate_rate(&self) -> f32 {
        TAU / 60.0 * self.controls.auto_rotate_speed
    }

    /// Advance by `dt_sec`: apply auto-rotation, then bleed pending input.
    pub fn update(&mut self, dt_sec: f32) {
        if self.controls.auto_rotate {
            self.azimuth -= self.auto_rotate_rate() * dt_sec.max(0.0);
        }
        let k = if self.controls.damping > 0.0 {
            self.controls.damping.min(1.0)
        } else {
            1.0
        };
        self.azimuth += self.pending_azimuth * k;
        self.polar = (self.polar + self.pending_polar * k)
            .clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
        self.target += self.pending_pan * k;
        self.pending_azimuth *= 1.0 - k;
        self.pending_polar *= 1.0 - k;
        self.pending_pan *= 1.0 - k;
        self.azimuth = self.azimuth.rem_euclid(TAU);
    }

    /// Pointer drag in pixels over a viewport `viewport_h` pixels tall.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        if !self.controls.enable_rotate {
            return;
        }
        let h = viewport_h.max(1.0);
        self.pending_azimuth -= TAU * dx / h * ORBIT_ROTATE_SPEED;
        self.pending_polar -= TAU * dy / h * ORBIT_ROTATE_SPEED;
    }

    /// Wheel input: negative `delta_y` moves closer. Applied immediately.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if !self.controls.enable_zoom || delta_y == 0.0 {
            return;
        }
        let factor = if delta_y < 0.0 {
            ORBIT_ZOOM_STEP
        } else {
            1.0 / ORBIT_ZOOM_STEP
        };
        self.radius = (self.radius * factor).clamp(ORBIT_MIN_RADIUS, ORBIT_MAX_RADIUS);
    }

    /// Pan so the point under the cursor follows it at the target's depth.
    pub fn pan_by_pixels(&mut self, dx: f32, dy: f32, viewport_h: f32) {
        if !self.controls.enable_pan {
            return;
        }
        let h = viewport_h.max(1.0);
        let world_per_px = 2.0 * self.radius * (self.fovy_radians * 0.5).tan() / h;
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        self.pending_pan += (-dx * right + dy * up) * world_per_px;
    }
}
