pub mod runner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use runner::SceneRunner;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the mounted scene. Returns `None` (and logs) before `scene_init`.
fn with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Some(f(runner)),
            None => {
                log::warn!("scene not initialized; call scene_init() first");
                None
            }
        }
    })
}

// ---- Lifecycle ----

/// Mount a scene (`"character"` or `"diorama"`) on a canvas of the given size.
#[wasm_bindgen]
pub fn scene_init(kind: &str, width: u32, height: u32) {
    console_error_panic_hook::set_once();
    // Already installed on remount.
    let _ = console_log::init_with_level(log::Level::Info);

    let mut runner = SceneRunner::for_kind(kind);
    runner.init(width, height);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
}

/// Unmount the scene. Later calls are no-ops until the next `scene_init`.
#[wasm_bindgen]
pub fn scene_teardown() {
    RUNNER.with(|cell| {
        if let Some(mut runner) = cell.borrow_mut().take() {
            runner.teardown();
        }
    });
}

#[wasm_bindgen]
pub fn scene_tick(dt: f64) {
    with_runner(|r| r.tick(dt));
}

/// Tick using the page's `performance.now()` clock.
/// Call from `requestAnimationFrame`.
#[wasm_bindgen]
pub fn scene_animate() {
    let now = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now() / 1000.0);
    match now {
        Some(now) => {
            with_runner(|r| r.tick_at(now));
        }
        None => log::warn!("performance clock unavailable; use scene_tick(dt)"),
    }
}

#[wasm_bindgen]
pub fn scene_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Settings panel ----

#[wasm_bindgen]
pub fn scene_set_pixelation(value: u32) {
    with_runner(|r| r.set_pixelation(value));
}

#[wasm_bindgen]
pub fn scene_set_bloom(value: f32) {
    with_runner(|r| r.set_bloom(value));
}

#[wasm_bindgen]
pub fn scene_reset_settings() {
    with_runner(|r| r.reset_settings());
}

/// Returns whether auto-rotation is now on.
#[wasm_bindgen]
pub fn scene_toggle_auto_rotate() -> bool {
    with_runner(|r| r.toggle_auto_rotate()).unwrap_or(false)
}

/// Returns false for an unknown preset name.
#[wasm_bindgen]
pub fn scene_set_environment(name: &str) -> bool {
    match with_runner(|r| r.set_environment(name)) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::warn!("{err}");
            false
        }
        None => false,
    }
}

/// Returns false if the document was rejected; the current settings stay.
#[wasm_bindgen]
pub fn scene_load_settings(json: &str) -> bool {
    match with_runner(|r| r.load_settings(json)) {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::warn!("{err}");
            false
        }
        None => false,
    }
}

#[wasm_bindgen]
pub fn scene_settings_json() -> String {
    match with_runner(|r| r.settings_json()) {
        Some(Ok(json)) => json,
        Some(Err(err)) => {
            log::warn!("{err}");
            String::new()
        }
        None => String::new(),
    }
}

// ---- Frame buffer ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

/// Copy of the current frame record.
#[wasm_bindgen]
pub fn frame_view() -> js_sys::Float32Array {
    with_runner(|r| js_sys::Float32Array::from(r.frame()))
        .unwrap_or_else(|| js_sys::Float32Array::new_with_length(0))
}

// ---- Easing functions for direct use from JS ----

#[wasm_bindgen]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    pixelscape::clamp(x, min, max)
}

#[wasm_bindgen(js_name = easeInOutCubic)]
pub fn ease_in_out_cubic(x: f64) -> f64 {
    pixelscape::ease_in_out_cubic(x)
}

/// `radius` and `height` default to 1 when omitted.
#[wasm_bindgen]
pub fn sawtooth(x: f64, radius: Option<f64>, height: Option<f64>) -> f64 {
    pixelscape::sawtooth(x, radius.unwrap_or(1.0), height.unwrap_or(1.0))
}

#[wasm_bindgen(js_name = linearStep)]
pub fn linear_step(x: f64, edge0: f64, edge1: f64) -> f64 {
    pixelscape::linear_step(x, edge0, edge1)
}

#[wasm_bindgen(js_name = stopGo)]
pub fn stop_go(x: f64, downtime: f64, period: f64) -> f64 {
    pixelscape::stop_go(x, downtime, period)
}

#[wasm_bindgen(js_name = stopGoEased)]
pub fn stop_go_eased(x: f64, downtime: f64, period: f64) -> f64 {
    pixelscape::stop_go_eased(x, downtime, period)
}
