//! Post-processing parameters for the diorama:
//! pixelated render pass -> bloom -> pixelate upscale.
//!
//! Only the numbers live here. The passes themselves are built by the
//! JS renderer from [`PostProcessUniform`].

use bytemuck::{Pod, Zeroable};
use glam::UVec2;

use crate::settings::RenderSettings;

/// Bloom pass radius (fixed).
pub const BLOOM_RADIUS: f32 = 0.1;
/// Luminance threshold above which pixels bloom (fixed).
pub const BLOOM_THRESHOLD: f32 = 0.9;

/// Low-resolution target size: `screen / pixelation`, truncated per axis.
/// A pixelation of 0 is treated as 1.
pub fn render_resolution(screen: UVec2, pixelation: u32) -> UVec2 {
    screen / pixelation.max(1)
}

/// Bloom pass parameters. Runs at full screen resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomParams {
    pub resolution: UVec2,
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

/// Resolved parameters for the whole post-processing chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostProcess {
    pub screen: UVec2,
    pub render: UVec2,
    pub bloom: BloomParams,
}

/// GPU-side uniform for the post-processing chain (32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PostProcessUniform {
    pub screen_size: [f32; 2],
    pub render_size: [f32; 2],
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    pub _pad: f32,
}

impl PostProcess {
    pub fn new(screen: UVec2, settings: &RenderSettings) -> Self {
        Self {
            screen,
            render: render_resolution(screen, settings.pixelation),
            bloom: BloomParams {
                resolution: screen,
                strength: settings.bloom,
                radius: BLOOM_RADIUS,
                threshold: BLOOM_THRESHOLD,
            },
        }
    }

    pub fn uniform(&self) -> PostProcessUniform {
        PostProcessUniform {
            screen_size: self.screen.as_vec2().to_array(),
            render_size: self.render.as_vec2().to_array(),
            bloom_strength: self.bloom.strength,
            bloom_radius: self.bloom.radius,
            bloom_threshold: self.bloom.threshold,
            _pad: 0.0,
        }
    }
}
