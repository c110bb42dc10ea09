// anim/mod.rs
//
// Animation math and per-frame animated values.
// The easing/wave functions are pure; crystal and spin build on them.

pub mod crystal;
pub mod easing;
pub mod spin;
pub mod wave;

pub use crystal::CrystalPose;
pub use easing::{clamp, ease_in_out_cubic, lerp, linear_step};
pub use spin::{AutoRotate, ModelPose};
pub use wave::{sawtooth, sawtooth_unit, stop_go, stop_go_eased};
