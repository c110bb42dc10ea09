use pixelscape::bridge::protocol::{write_frame, FRAME_FLOATS};
use pixelscape::{EnvironmentPreset, SceneKind, SceneSettings, SceneState, SettingsError};

/// Owns the scene state and the frame buffer JS reads after every tick.
///
/// `lib.rs` keeps one of these in a `thread_local!` and exports free
/// functions via `#[wasm_bindgen]`.
pub struct SceneRunner {
    scene: SceneState,
    frame: [f32; FRAME_FLOATS],
    /// Timestamp of the previous `tick_at`, in seconds.
    last_timestamp: Option<f64>,
}

impl Default for SceneRunner {
    fn default() -> Self {
        Self::new(SceneSettings::default())
    }
}

impl SceneRunner {
    pub fn new(settings: SceneSettings) -> Self {
        let mut runner = Self {
            scene: SceneState::new(settings),
            frame: [0.0; FRAME_FLOATS],
            last_timestamp: None,
        };
        runner.publish();
        runner
    }

    /// Build a runner for the named scene. Unknown names fall back to the default scene.
    pub fn for_kind(kind: &str) -> Self {
        let kind = match kind.parse::<SceneKind>() {
            Ok(kind) => kind,
            Err(err) => {
                log::warn!("{err}; using {}", SceneKind::default());
                SceneKind::default()
            }
        };
        Self::new(SceneSettings::for_kind(kind))
    }

    pub fn init(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
        self.scene.init();
        self.last_timestamp = None;
        self.publish();
    }

    pub fn teardown(&mut self) {
        self.scene.teardown();
    }

    /// Run one frame: advance the scene, then refresh the frame buffer.
    pub fn tick(&mut self, dt: f64) {
        if !self.scene.is_initialized() {
            return;
        }
        self.scene.tick(dt);
        self.publish();
    }

    /// Run one frame stamped with an absolute clock reading (seconds).
    /// The first call after init advances by zero.
    pub fn tick_at(&mut self, now: f64) {
        let dt = match self.last_timestamp {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_timestamp = Some(now);
        self.tick(dt);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
        self.publish();
    }

    // ---- Settings panel ----

    pub fn set_pixelation(&mut self, value: u32) {
        self.scene.set_pixelation(value);
        self.publish();
    }

    pub fn set_bloom(&mut self, value: f32) {
        self.scene.set_bloom(value);
        self.publish();
    }

    pub fn reset_settings(&mut self) {
        self.scene.reset_render_settings();
        self.publish();
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        let enabled = self.scene.toggle_auto_rotate();
        self.publish();
        enabled
    }

    pub fn set_environment(&mut self, name: &str) -> Result<(), SettingsError> {
        let preset: EnvironmentPreset = name.parse()?;
        self.scene.set_environment(preset);
        self.publish();
        Ok(())
    }

    /// Replace all settings from a JSON document. The scene kind is fixed
    /// at construction and is kept as-is.
    pub fn load_settings(&mut self, json: &str) -> Result<(), SettingsError> {
        let mut settings = SceneSettings::from_json(json)?;
        settings.kind = self.scene.kind();
        self.scene.apply_settings(settings);
        self.publish();
        Ok(())
    }

    pub fn settings_json(&self) -> Result<String, SettingsError> {
        self.scene.settings().to_json()
    }

    // ---- Frame buffer accessors ----

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        FRAME_FLOATS as u32
    }

    fn publish(&mut self) {
        write_frame(&self.scene, &mut self.frame);
    }
}
