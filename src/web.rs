//! Browser facade.
//!
//! [`WebScene`] wraps a [`SceneEngine`] and an [`InputProcessor`] behind a
//! `wasm-bindgen` surface. The page forwards DOM events and calls
//! [`WebScene::frame`] from `requestAnimationFrame`; drawn frames come back
//! as JSON for a JavaScript renderer.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::{
    catalog::Catalog, engine::FrameOutcome, options::Options,
    selection::ProjectRef, InputEvent, InputProcessor, MouseButton,
    PickTarget, SceneCommand, SceneEngine,
};

/// Install the panic hook and route `log` to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("console logger already installed");
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The scene engine as seen from JavaScript.
#[wasm_bindgen]
pub struct WebScene {
    engine: SceneEngine,
    input: InputProcessor,
}

#[wasm_bindgen]
impl WebScene {
    /// Build a scene from optional TOML catalog and options text. Missing
    /// text falls back to the reference catalog and default options.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation message if either text is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(
        catalog_toml: Option<String>,
        options_toml: Option<String>,
    ) -> Result<WebScene, JsValue> {
        let catalog = match catalog_toml {
            Some(text) => Catalog::from_toml_str(&text),
            None => Catalog::reference(),
        }
        .map_err(js_error)?;
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text).map_err(js_error)?,
            None => Options::default(),
        };
        let input = InputProcessor::new(options.keybindings.clone());
        Ok(Self {
            engine: SceneEngine::new(Arc::new(catalog), options),
            input,
        })
    }

    // ── Host ────────────────────────────────────────────────────────────

    /// Report asset loading progress in percent.
    pub fn asset_progress(&mut self, percent: f32) {
        self.engine.execute(SceneCommand::AssetProgress { percent });
    }

    /// Report that assets finished loading.
    pub fn assets_loaded(&mut self) {
        self.engine.execute(SceneCommand::AssetsLoaded);
    }

    /// Loading indicator text, or `undefined` once ready.
    #[must_use]
    pub fn loading_message(&self) -> Option<String> {
        self.engine.loading_message()
    }

    /// The canvas changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.execute(SceneCommand::Resize { width, height });
    }

    /// Run one animation callback. Returns the frame as JSON when it should
    /// be drawn, `undefined` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the serialization message if the frame cannot be encoded.
    pub fn frame(&mut self, now_ms: f64) -> Result<Option<String>, JsValue> {
        match self.engine.frame(now_ms) {
            FrameOutcome::Draw { frame, .. } => {
                serde_json::to_string(frame).map(Some).map_err(js_error)
            }
            FrameOutcome::Loading { .. }
            | FrameOutcome::Fallback
            | FrameOutcome::Idle => Ok(None),
        }
    }

    /// Whether the page should keep requesting animation frames.
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.engine.wants_frame()
    }

    // ── Pointer and keyboard ────────────────────────────────────────────

    /// Pointer moved to canvas pixel `(x, y)`.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.dispatch(InputEvent::CursorMoved { x, y });
    }

    /// Primary button pressed (`true`) or released (`false`).
    pub fn pointer_button(&mut self, pressed: bool) {
        self.dispatch(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    /// Pointer left the canvas.
    pub fn pointer_leave(&mut self) {
        self.dispatch(InputEvent::CursorLeft);
    }

    /// Wheel scrolled by `delta` lines (positive = zoom in).
    pub fn wheel(&mut self, delta: f32) {
        self.dispatch(InputEvent::Scroll { delta });
    }

    /// A key with DOM `code` (e.g. `"KeyD"`) was pressed. Returns whether it
    /// was bound.
    pub fn key(&mut self, code: &str) -> bool {
        let Some(cmd) = self.input.handle_key_press(code) else {
            return false;
        };
        self.engine.execute(cmd);
        true
    }

    // ── Presentation intents ────────────────────────────────────────────

    /// Toggle the node called `name`.
    pub fn click_node(&mut self, name: &str) {
        self.engine.click_node_named(name);
    }

    /// Select the node called `name`, or return to overview.
    pub fn select_node(&mut self, name: Option<String>) {
        self.engine.select_node_named(name.as_deref());
    }

    /// Open project `index` of the focused node, or close the popup.
    pub fn select_project(&mut self, index: Option<usize>) {
        let project = index.and_then(|index| {
            self.engine
                .selection()
                .focused()
                .map(|node| ProjectRef { node, index })
        });
        self.engine.execute(SceneCommand::SelectProject { project });
    }

    /// Dismiss the detail panel.
    pub fn close_panel(&mut self) {
        self.engine.execute(SceneCommand::ClosePanel);
    }

    /// Switch palettes.
    pub fn toggle_dark_mode(&mut self) {
        self.engine.execute(SceneCommand::ToggleDarkMode);
    }

    /// Flip the gyroscope flag.
    pub fn toggle_gyroscope(&mut self) {
        self.engine.execute(SceneCommand::ToggleGyroscope);
    }

    /// Enable or disable audio cues.
    pub fn toggle_audio(&mut self) {
        self.engine.execute(SceneCommand::ToggleAudio);
    }

    /// Switch between the 3D scene and the flat list.
    pub fn toggle_fallback_view(&mut self) {
        self.engine.execute(SceneCommand::ToggleFallbackView);
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Status widget contents as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialization message on failure.
    pub fn status(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.status()).map_err(js_error)
    }

    /// Detail panel for the focused node as JSON, `undefined` in overview.
    ///
    /// # Errors
    ///
    /// Returns the serialization message on failure.
    pub fn detail_panel(&self) -> Result<Option<String>, JsValue> {
        self.engine
            .detail_panel()
            .map(|panel| serde_json::to_string(&panel))
            .transpose()
            .map_err(js_error)
    }

    /// The flat fallback list as text.
    #[must_use]
    pub fn fallback_text(&self) -> String {
        self.engine.fallback_view().to_string()
    }
}

impl WebScene {
    fn dispatch(&mut self, event: InputEvent) {
        let hovered = event
            .position()
            .map(|p| (p.x, p.y))
            .or_else(|| self.input.mouse_pos())
            .map_or(PickTarget::None, |(x, y)| {
                self.engine.pick_in_viewport(x, y)
            });
        for cmd in self.input.handle_event(event, hovered) {
            self.engine.execute(cmd);
        }
    }
}
