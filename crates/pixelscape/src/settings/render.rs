use serde::{Deserialize, Serialize};

use crate::anim::easing::clamp;

pub const PIXELATION_MIN: u32 = 1;
pub const PIXELATION_MAX: u32 = 10;
pub const DEFAULT_PIXELATION: u32 = 6;

pub const BLOOM_MIN: f32 = 0.0;
pub const BLOOM_MAX: f32 = 1.0;
/// Slider granularity for bloom.
pub const BLOOM_STEP: f32 = 0.1;
pub const DEFAULT_BLOOM: f32 = 0.4;

/// User-adjustable post-processing settings for the diorama.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Screen pixels per rendered pixel, in [1, 10].
    pub pixelation: u32,
    /// Bloom strength in [0, 1], in steps of 0.1.
    pub bloom: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pixelation: DEFAULT_PIXELATION,
            bloom: DEFAULT_BLOOM,
        }
    }
}

impl RenderSettings {
    pub fn set_pixelation(&mut self, value: u32) {
        self.pixelation = value.clamp(PIXELATION_MIN, PIXELATION_MAX);
    }

    /// Clamp to [0, 1] and snap to the nearest slider step. NaN resets to the default.
    pub fn set_bloom(&mut self, value: f32) {
        if value.is_nan() {
            self.bloom = DEFAULT_BLOOM;
            return;
        }
        let bounded = clamp(value as f64, BLOOM_MIN as f64, BLOOM_MAX as f64);
        let step = BLOOM_STEP as f64;
        self.bloom = ((bounded / step).round() * step) as f32;
    }

    /// Bring deserialized values back into slider range.
    pub fn normalize(&mut self) {
        let (pixelation, bloom) = (self.pixelation, self.bloom);
        self.set_pixelation(pixelation);
        self.set_bloom(bloom);
    }

    /// Bloom as shown next to the slider (one decimal).
    pub fn bloom_label(&self) -> String {
        format!("{:.1}", self.bloom)
    }

    /// Restore slider defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
