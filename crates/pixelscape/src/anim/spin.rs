// anim/spin.rs
//
// Per-frame auto-rotation for the character model.

use std::f64::consts::TAU;

use glam::{Mat4, Quat, Vec3};

/// Radians added per rendered frame while auto-rotating.
pub const AUTO_ROTATE_STEP: f64 = 0.005;

/// Frame-driven turntable. Advances a fixed step per frame (not per second),
/// so the spin speed follows the display refresh rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoRotate {
    pub enabled: bool,
    angle: f64,
    /// Rotation used while auto-rotation is off.
    pub manual_angle: f64,
}

impl Default for AutoRotate {
    fn default() -> Self {
        Self {
            enabled: true,
            angle: 0.0,
            manual_angle: 0.0,
        }
    }
}

impl AutoRotate {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    /// Advance one frame. Does nothing while disabled.
    pub fn step(&mut self) {
        if self.enabled {
            self.angle = (self.angle + AUTO_ROTATE_STEP) % TAU;
        }
    }

    /// Flip auto-rotation on/off. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Accumulated turntable angle, kept in [0, 2π).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotation to apply to the model this frame.
    pub fn rotation(&self) -> f64 {
        if self.enabled {
            self.angle
        } else {
            self.manual_angle
        }
    }
}

/// Placement of the loaded character inside the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPose {
    pub scale: f32,
    pub translation: Vec3,
    pub rotation_y: f32,
}

impl Default for ModelPose {
    fn default() -> Self {
        Self {
            scale: 3.0,
            translation: Vec3::new(0.0, -0.5, 0.0),
            rotation_y: 0.0,
        }
    }
}

impl ModelPose {
    pub fn with_rotation(mut self, rotation_y: f64) -> Self {
        self.rotation_y = rotation_y as f32;
        self
    }

    /// Model-to-world matrix: scale, then rotate about Y, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.translation,
        )
    }
}
