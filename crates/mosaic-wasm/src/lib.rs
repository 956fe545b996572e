//! Mosaic WASM - browser bindings for the video wall
//!
//! Adapts the core session to a real page: a DOM rendering surface over a
//! CSS-grid container, an `alert()` notification sink, and `YT.Player`
//! handles for YouTube embeds.
//!
//! # Integration
//!
//! ```javascript
//! import init, { MosaicApp } from "mosaic-wasm";
//!
//! await init();
//! const app = MosaicApp.attach("grid");
//!
//! addButton.onclick = () => { app.add_video(input.value); input.value = ""; };
//! sizeSelect.onchange = () => app.set_grid_size(Number(sizeSelect.value));
//! fullscreenButton.onclick = () => app.toggle_fullscreen();
//! reloadButton.onclick = () => app.fast_forward_all();
//! grid.onclick = (event) => {
//!   const button = event.target.closest(".video-control");
//!   if (button) app.control(button.dataset.action, button.dataset.slot);
//! };
//! ```

use mosaic_core::{ControlAction, MultiViewSession, RegistryConfig, SlotId};
use wasm_bindgen::prelude::*;

mod dom;
mod player;

pub use dom::{player_element_id, AlertSink, DomSurface};
pub use player::{YtPlayerFactory, YtPlayerHandle};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Mosaic] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Human-readable reason behind a JS exception value.
pub(crate) fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Wall options exposed to JavaScript
#[wasm_bindgen]
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct WallOptions {
    /// Start embeds playing immediately
    pub autoplay: bool,
    /// Start embeds muted
    pub mute: bool,
    /// Initially selected grid size
    pub initial_grid_size: u32,
    /// Hostname handed to Twitch as the embedding parent
    parent_host: String,
}

#[wasm_bindgen]
impl WallOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let parent_host = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| "localhost".to_string());
        Self {
            autoplay: true,
            mute: true,
            initial_grid_size: 2,
            parent_host,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn parent_host(&self) -> String {
        self.parent_host.clone()
    }

    #[wasm_bindgen(setter)]
    pub fn set_parent_host(&mut self, host: String) {
        self.parent_host = host;
    }
}

impl Default for WallOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The wall application: one session behind a single JS handle
#[wasm_bindgen]
pub struct MosaicApp {
    session: MultiViewSession,
}

#[wasm_bindgen]
impl MosaicApp {
    /// Attach to the grid container element and start a session.
    #[wasm_bindgen]
    pub fn attach(
        grid_element_id: &str,
        options: Option<WallOptions>,
    ) -> std::result::Result<MosaicApp, JsValue> {
        let options = options.unwrap_or_default();
        let config = RegistryConfig {
            autoplay: options.autoplay,
            mute: options.mute,
            initial_grid_size: options.initial_grid_size,
            parent_host: options.parent_host.clone(),
            ..RegistryConfig::default()
        };

        let surface = DomSurface::attach(grid_element_id).map_err(to_js)?;
        let sink = AlertSink::new().map_err(to_js)?;
        let session = MultiViewSession::new(
            config,
            Box::new(surface),
            Box::new(YtPlayerFactory),
            Box::new(sink),
        )
        .map_err(to_js)?;

        Ok(Self { session })
    }

    /// Resolve the URL input and add the video. Returns the new slot id,
    /// or `undefined` for empty input and for failures (which were already
    /// reported through the alert sink).
    pub fn add_video(&mut self, input: &str) -> Option<String> {
        match self.session.add_from_input(input) {
            Ok(slot) => slot.map(|s| s.to_string()),
            Err(_) => None,
        }
    }

    /// Handle a per-slot control button (`data-action` / `data-slot`).
    /// Unknown actions are ignored.
    pub fn control(&mut self, action: &str, slot: &str) -> std::result::Result<(), JsValue> {
        let slot: SlotId = slot
            .parse()
            .map_err(|_| JsValue::from_str("malformed slot id"))?;
        match ControlAction::from_dataset(action, slot) {
            Some(action) => self.session.dispatch(action).map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn set_grid_size(&mut self, size: u32) -> std::result::Result<(), JsValue> {
        self.session
            .dispatch(ControlAction::SetGridSize { size })
            .map_err(to_js)
    }

    /// Enter or leave fullscreen. A denied request was already reported
    /// through the alert sink.
    pub fn toggle_fullscreen(&mut self) {
        let _ = self.session.toggle_fullscreen();
    }

    /// Fast-forward every active player (the reload control).
    pub fn fast_forward_all(&mut self) {
        self.session.registry_mut().fast_forward_all();
    }

    pub fn slot_count(&self) -> usize {
        self.session.registry().len()
    }

    /// Slot ids of the player handles, left to right.
    pub fn player_order(&self) -> Vec<String> {
        self.session
            .registry()
            .player_order()
            .iter()
            .map(|slot| slot.to_string())
            .collect()
    }

    /// Event records as JS objects.
    pub fn events(&self) -> JsValue {
        let records: Vec<_> = self.session.registry().events().records().collect();
        serde_wasm_bindgen::to_value(&records).unwrap_or(JsValue::NULL)
    }

    /// Event records as a JSON string.
    pub fn events_json(&self) -> String {
        self.session.registry().events().to_json()
    }
}

fn to_js(err: mosaic_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
