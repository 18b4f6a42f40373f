//! Damped orbit camera around the origin.
//!
//! Angles follow the usual spherical convention with +Y up: `polar` is the
//! angle from +Y, `azimuth` turns around Y starting at +Z. Rotation input
//! accumulates into a velocity that bleeds off by the damping factor every
//! update; wheel zoom is applied on the next update without damping.

use crate::constants::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_MIN_POLAR,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SCALE,
};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub azimuth: f32,
    pub polar: f32,
    pub distance: f32,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    azimuth_delta: f32,
    polar_delta: f32,
    pending_scale: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32) -> Self {
        Self {
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            azimuth_delta: 0.0,
            polar_delta: 0.0,
            pending_scale: 1.0,
        }
    }

    /// Put the camera back on the +Z axis at `distance` and drop any motion.
    pub fn reset(&mut self, distance: f32) {
        self.azimuth = 0.0;
        self.polar = FRAC_PI_2;
        self.distance = distance;
        self.azimuth_delta = 0.0;
        self.polar_delta = 0.0;
        self.pending_scale = 1.0;
    }

    /// Set the distance directly, bypassing the orbit limits.
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
        self.pending_scale = 1.0;
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.azimuth_delta -= TAU * dx / h * ORBIT_ROTATE_SPEED;
        self.polar_delta -= TAU * dy / h * ORBIT_ROTATE_SPEED;
    }

    /// Queue a zoom from a wheel event; negative `delta_y` moves closer.
    pub fn zoom_wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= ORBIT_ZOOM_SCALE;
        } else if delta_y > 0.0 {
            self.pending_scale /= ORBIT_ZOOM_SCALE;
        }
    }

    /// Integrate queued input and clamp to the limits. Returns true while moving.
    pub fn update(&mut self) -> bool {
        let before = (self.azimuth, self.polar, self.distance);

        self.azimuth += self.azimuth_delta * self.damping;
        self.polar += self.polar_delta * self.damping;
        self.azimuth_delta *= 1.0 - self.damping;
        self.polar_delta *= 1.0 - self.damping;
        if self.azimuth_delta.abs() < 1e-6 {
            self.azimuth_delta = 0.0;
        }
        if self.polar_delta.abs() < 1e-6 {
            self.polar_delta = 0.0;
        }

        self.polar = self.polar.clamp(self.min_polar, self.max_polar);
        self.distance =
            (self.distance * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_scale = 1.0;

        before != (self.azimuth, self.polar, self.distance)
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        Vec3::new(
            self.distance * sin_polar * self.azimuth.sin(),
            self.distance * self.polar.cos(),
            self.distance * sin_polar * self.azimuth.cos(),
        )
    }
}
