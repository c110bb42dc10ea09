//! Per-frame buffer layout shared with the JS render loop.
//! Must stay in sync with TypeScript `frame.ts`.
//!
//! Layout (all values f32 / 4 bytes):
//! ```text
//! [0]  frame counter        [8]  render width
//! [1]  elapsed seconds      [9]  render height
//! [2]  crystal emissive     [10] screen width
//! [3]  crystal y            [11] screen height
//! [4]  crystal rotation y   [12] auto-rotate (0/1)
//!      (wrapped to [0, 2π))
//! [5]  model rotation y     [13] environment preset index
//! [6]  pixelation           [14] scene kind (0 character, 1 diorama)
//! [7]  bloom                [15] protocol version
//! ```

use std::f64::consts::TAU;

use crate::api::scene::SceneState;
use crate::settings::SceneKind;

/// Number of floats in one frame record.
pub const FRAME_FLOATS: usize = 16;

pub const FRAME_COUNTER: usize = 0;
pub const FRAME_ELAPSED: usize = 1;
pub const FRAME_CRYSTAL_EMISSIVE: usize = 2;
pub const FRAME_CRYSTAL_Y: usize = 3;
pub const FRAME_CRYSTAL_ROTATION: usize = 4;
pub const FRAME_MODEL_ROTATION: usize = 5;
pub const FRAME_PIXELATION: usize = 6;
pub const FRAME_BLOOM: usize = 7;
pub const FRAME_RENDER_WIDTH: usize = 8;
pub const FRAME_RENDER_HEIGHT: usize = 9;
pub const FRAME_SCREEN_WIDTH: usize = 10;
pub const FRAME_SCREEN_HEIGHT: usize = 11;
pub const FRAME_AUTO_ROTATE: usize = 12;
pub const FRAME_ENVIRONMENT: usize = 13;
pub const FRAME_SCENE_KIND: usize = 14;
pub const FRAME_PROTOCOL_VERSION: usize = 15;

/// Protocol version written into every frame.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Serialize the scene's per-frame outputs into `out`.
pub fn write_frame(scene: &SceneState, out: &mut [f32; FRAME_FLOATS]) {
    let crystal = scene.crystal();
    let settings = scene.settings();
    let post = scene.post_process();

    out[FRAME_COUNTER] = scene.frame() as f32;
    out[FRAME_ELAPSED] = scene.elapsed() as f32;
    out[FRAME_CRYSTAL_EMISSIVE] = crystal.emissive_intensity as f32;
    out[FRAME_CRYSTAL_Y] = crystal.position_y as f32;
    // Unwrapped turns outgrow f32 precision in long sessions.
    out[FRAME_CRYSTAL_ROTATION] = crystal.rotation_y.rem_euclid(TAU) as f32;
    out[FRAME_MODEL_ROTATION] = scene.model_rotation() as f32;
    out[FRAME_PIXELATION] = settings.render.pixelation as f32;
    out[FRAME_BLOOM] = settings.render.bloom;
    out[FRAME_RENDER_WIDTH] = post.render.x as f32;
    out[FRAME_RENDER_HEIGHT] = post.render.y as f32;
    out[FRAME_SCREEN_WIDTH] = post.screen.x as f32;
    out[FRAME_SCREEN_HEIGHT] = post.screen.y as f32;
    out[FRAME_AUTO_ROTATE] = if settings.auto_rotate { 1.0 } else { 0.0 };
    out[FRAME_ENVIRONMENT] = settings.environment.index() as f32;
    out[FRAME_SCENE_KIND] = match scene.kind() {
        SceneKind::Character => 0.0,
        SceneKind::Diorama => 1.0,
    };
    out[FRAME_PROTOCOL_VERSION] = PROTOCOL_VERSION;
}
