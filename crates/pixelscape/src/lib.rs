pub mod anim;
pub mod api;
pub mod bridge;
pub mod core;
pub mod error;
pub mod renderer;
pub mod settings;

// Re-export key types at crate root for convenience
pub use anim::{
    clamp, ease_in_out_cubic, lerp, linear_step, sawtooth, sawtooth_unit, stop_go, stop_go_eased,
    AutoRotate, CrystalPose, ModelPose,
};
pub use api::scene::SceneState;
pub use bridge::protocol::{write_frame, FRAME_FLOATS, PROTOCOL_VERSION};
pub use crate::core::time::SceneClock;
pub use error::SettingsError;
pub use renderer::camera::{CameraUniform, OrbitLimits, OrthoCamera};
pub use renderer::post::{render_resolution, BloomParams, PostProcess, PostProcessUniform};
pub use settings::{EnvironmentPreset, RenderSettings, SceneKind, SceneSettings};
