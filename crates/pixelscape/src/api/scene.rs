use glam::UVec2;

use crate::anim::{AutoRotate, CrystalPose, ModelPose};
use crate::core::time::SceneClock;
use crate::renderer::camera::{OrbitLimits, OrthoCamera};
use crate::renderer::post::PostProcess;
use crate::settings::{EnvironmentPreset, SceneKind, SceneSettings};

/// Mutable scene state driven once per rendered frame.
///
/// The JS side owns the meshes and passes; it reads the values computed here
/// (crystal pose, model rotation, camera and post-process parameters) after
/// each [`SceneState::tick`].
pub struct SceneState {
    settings: SceneSettings,
    clock: SceneClock,
    spin: AutoRotate,
    crystal: CrystalPose,
    camera: OrthoCamera,
    orbit: OrbitLimits,
    screen: UVec2,
    initialized: bool,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(SceneSettings::default())
    }
}

impl SceneState {
    pub fn new(settings: SceneSettings) -> Self {
        let spin = AutoRotate::new(settings.auto_rotate);
        Self {
            settings,
            clock: SceneClock::new(),
            spin,
            crystal: CrystalPose::default(),
            camera: OrthoCamera::default(),
            orbit: OrbitLimits::default(),
            screen: UVec2::ONE,
            initialized: false,
        }
    }

    /// Mark the scene as mounted. Restarts the clock.
    pub fn init(&mut self) {
        self.clock.reset();
        self.crystal = CrystalPose::default();
        self.initialized = true;
        log::info!("scene: {} initialized", self.settings.kind);
    }

    /// Unmount. Ticks become no-ops until the next [`SceneState::init`].
    pub fn teardown(&mut self) {
        if self.initialized {
            log::info!(
                "scene: {} torn down after {} frames",
                self.settings.kind,
                self.clock.frame()
            );
        }
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Advance one rendered frame by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if !self.initialized {
            return;
        }
        let t = self.clock.advance(dt);
        self.spin.step();
        self.crystal = CrystalPose::at(t);
    }

    /// Canvas resized. Zero-sized dimensions are bumped to 1.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = UVec2::new(width, height).max(UVec2::ONE);
        self.camera.resize(self.screen.x as f32, self.screen.y as f32);
        log::debug!("scene: resized to {}x{}", self.screen.x, self.screen.y);
    }

    // ---- Settings ----

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Swap in a whole settings document (e.g. restored from storage).
    pub fn apply_settings(&mut self, settings: SceneSettings) {
        self.spin.enabled = settings.auto_rotate;
        self.settings = settings;
        log::debug!("scene: settings replaced: {:?}", self.settings);
    }

    pub fn set_pixelation(&mut self, value: u32) {
        self.settings.render.set_pixelation(value);
        log::debug!("scene: pixelation = {}", self.settings.render.pixelation);
    }

    pub fn set_bloom(&mut self, value: f32) {
        self.settings.render.set_bloom(value);
        log::debug!("scene: bloom = {}", self.settings.render.bloom_label());
    }

    pub fn reset_render_settings(&mut self) {
        self.settings.render.reset();
        log::debug!("scene: render settings reset");
    }

    /// Returns whether auto-rotation is now on.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = self.spin.toggle();
        self.settings.auto_rotate = enabled;
        enabled
    }

    pub fn set_manual_rotation(&mut self, angle: f64) {
        self.spin.manual_angle = angle;
    }

    pub fn set_environment(&mut self, preset: EnvironmentPreset) {
        self.settings.environment = preset;
        log::debug!("scene: environment = {}", preset);
    }

    // ---- Per-frame outputs ----

    pub fn kind(&self) -> SceneKind {
        self.settings.kind
    }

    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    pub fn crystal(&self) -> CrystalPose {
        self.crystal
    }

    /// Current Y rotation of the character model.
    pub fn model_rotation(&self) -> f64 {
        self.spin.rotation()
    }

    pub fn model_pose(&self) -> ModelPose {
        ModelPose::default().with_rotation(self.spin.rotation())
    }

    pub fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    pub fn orbit(&self) -> &OrbitLimits {
        &self.orbit
    }

    pub fn screen(&self) -> UVec2 {
        self.screen
    }

    pub fn post_process(&self) -> PostProcess {
        PostProcess::new(self.screen, &self.settings.render)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::anim::spin::AUTO_ROTATE_STEP;

    fn diorama() -> SceneState {
        let mut scene = SceneState::new(SceneSettings::for_kind(SceneKind::Diorama));
        scene.resize(1200, 600);
        scene.init();
        scene
    }

    #[test]
    fn tick_before_init_is_noop() {
        let mut scene = SceneState::default();
        scene.tick(1.0);
        assert_eq!(scene.frame(), 0);
        assert_eq!(scene.model_rotation(), 0.0);
        assert!(!scene.is_initialized());
    }

    #[test]
    fn crystal_follows_elapsed_time() {
        let mut scene = diorama();
        for _ in 0..6 {
            scene.tick(0.5);
        }
        assert!((scene.elapsed() - 3.0).abs() < 1e-12);
        assert!((scene.crystal().rotation_y - TAU / 2.0).abs() < 1e-9);
        assert_eq!(scene.crystal(), CrystalPose::at(3.0));
    }

    #[test]
    fn auto_rotate_steps_per_frame_and_toggles() {
        let mut scene = SceneState::default();
        scene.init();
        scene.tick(0.016);
        scene.tick(0.016);
        assert!((scene.model_rotation() - 2.0 * AUTO_ROTATE_STEP).abs() < 1e-12);

        assert!(!scene.toggle_auto_rotate());
        assert!(!scene.settings().auto_rotate);
        scene.set_manual_rotation(0.3);
        scene.tick(0.016);
        assert_eq!(scene.model_rotation(), 0.3);
    }

    #[test]
    fn post_process_tracks_settings_and_size() {
        let mut scene = diorama();
        assert_eq!(scene.post_process().render, UVec2::new(200, 100));
        scene.set_pixelation(3);
        scene.set_bloom(0.9);
        let post = scene.post_process();
        assert_eq!(post.render, UVec2::new(400, 200));
        assert!((post.bloom.strength - 0.9).abs() < 1e-6);
        scene.reset_render_settings();
        assert_eq!(scene.settings().render.pixelation, 6);
    }

    #[test]
    fn resize_updates_camera_and_guards_zero() {
        let mut scene = diorama();
        assert!((scene.camera().aspect - 2.0).abs() < 1e-6);
        scene.resize(0, 0);
        assert_eq!(scene.screen(), UVec2::ONE);
    }

    #[test]
    fn teardown_then_init_restarts_clock() {
        let mut scene = diorama();
        scene.tick(5.0);
        scene.teardown();
        scene.tick(1.0);
        assert!((scene.elapsed() - 5.0).abs() < 1e-12);
        scene.init();
        assert_eq!(scene.elapsed(), 0.0);
        assert_eq!(scene.crystal(), CrystalPose::default());
    }

    #[test]
    fn apply_settings_syncs_spin() {
        let mut scene = SceneState::default();
        let mut settings = SceneSettings::default();
        settings.auto_rotate = false;
        settings.environment = EnvironmentPreset::Night;
        scene.apply_settings(settings);
        scene.init();
        scene.tick(0.1);
        assert_eq!(scene.model_rotation(), 0.0);
        assert_eq!(scene.settings().environment, EnvironmentPreset::Night);
    }
}
