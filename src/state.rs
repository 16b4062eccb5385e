//! Browser-facing application state
//!
//! `App` owns the frame driver and the GPU renderer. JavaScript drives it from
//! `requestAnimationFrame`: one `tick()` per animation frame, dropping the
//! `App` (or simply no longer scheduling frames) ends the animation.

use wasm_bindgen::prelude::*;

use crate::config::SceneConfig;
use crate::driver::FrameDriver;
use crate::gpu::GpuRenderer;

#[wasm_bindgen]
pub struct App {
    driver: FrameDriver,
    gpu: GpuRenderer,
}

/// Initialize logging and the GPU on the given canvas, with the default scene
#[wasm_bindgen]
pub async fn start(canvas_id: String) -> Result<App, JsValue> {
    crate::init_logging();

    let mut gpu = GpuRenderer::from_canvas(&canvas_id)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let scene = SceneConfig::default();
    gpu.set_scene_size(scene.width, scene.height);
    let driver = FrameDriver::new(scene).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(App { driver, gpu })
}

#[wasm_bindgen]
impl App {
    /// Advance one fixed step and render (call once per animation frame)
    pub fn tick(&mut self) -> Result<(), JsValue> {
        self.driver
            .tick(&mut self.gpu)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current animation time in seconds
    pub fn time(&self) -> f64 {
        self.driver.time()
    }

    /// Target frame interval in milliseconds, for hosts that pace with timers
    pub fn frame_interval_ms(&self) -> f64 {
        self.driver.timing().step() * 1000.0
    }

    /// Replace the scene from a JSON string and restart the animation
    pub fn load_scene(&mut self, json: &str) -> Result<(), JsValue> {
        let scene = SceneConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Failed to load scene: {}", e)))?;

        log::info!(
            "Scene loaded: {}x{} @ {} fps, {} lights",
            scene.width,
            scene.height,
            scene.fps,
            scene.lights.len()
        );
        let (width, height) = (scene.width, scene.height);
        self.driver
            .set_scene(scene)
            .map_err(|e| JsValue::from_str(&format!("Failed to load scene: {}", e)))?;
        self.gpu.set_scene_size(width, height);
        Ok(())
    }

    /// Resize the drawing surface (canvas pixels)
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }
}
