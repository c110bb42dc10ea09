use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::anim::easing::clamp;

/// Orthographic camera for the diorama.
/// Frustum is `[-aspect, aspect] x [-1, 1]`, looking down at the origin from
/// 30° above the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthoCamera {
    /// Width / height of the canvas.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
    pub target: Vec3,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
}

impl Default for OrthoCamera {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl OrthoCamera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            near: 0.1,
            far: 10.0,
            eye: Vec3::new(0.0, 2.0 * FRAC_PI_6.tan(), 2.0),
            target: Vec3::ZERO,
        }
    }

    /// Recompute the frustum for a new canvas size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(-self.aspect, self.aspect, -1.0, 1.0, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }
}

/// Degenerate canvases (zero height during layout) fall back to square.
fn aspect_ratio(width: f32, height: f32) -> f32 {
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Orbit constraints for the character scene's perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    pub eye: Vec3,
    /// Polar angle range, measured from +Y.
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_pan: bool,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            min_polar: FRAC_PI_6,
            max_polar: FRAC_PI_2,
            min_distance: 3.0,
            max_distance: 8.0,
            enable_pan: false,
        }
    }
}

impl OrbitLimits {
    /// Clamp a requested `(polar, distance)` pair into the allowed orbit.
    pub fn constrain(&self, polar: f32, distance: f32) -> (f32, f32) {
        let polar = clamp(polar as f64, self.min_polar as f64, self.max_polar as f64);
        let distance = clamp(distance as f64, self.min_distance as f64, self.max_distance as f64);
        (polar as f32, distance as f32)
    }

    /// Camera position for an orbit around the origin, after constraints.
    pub fn orbit_position(&self, azimuth: f32, polar: f32, distance: f32) -> Vec3 {
        let (polar, distance) = self.constrain(polar, distance);
        let (sin_p, cos_p) = polar.sin_cos();
        let (sin_a, cos_a) = azimuth.sin_cos();
        Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a) * distance
    }
}
