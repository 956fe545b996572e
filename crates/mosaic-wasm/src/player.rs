//! YouTube iframe API bindings
//!
//! `YT.Player` is constructed against the embed iframe once it is in the
//! document. Readiness is never awaited: commands sent before the
//! underlying player is ready follow the API's buffer-or-drop contract,
//! and every call is catch-wrapped so a not-ready player degrades to a
//! registry fault instead of an exception.

use crate::dom::player_element_id;
use crate::js_reason;
use mosaic_core::{EmbedSpec, Error, PlayerFactory, PlayerHandle, Result, SlotId};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Player object from the YouTube iframe API
    /// (`https://www.youtube.com/iframe_api`, loaded by the host page).
    #[wasm_bindgen(js_namespace = YT, js_name = Player)]
    type YtPlayer;

    #[wasm_bindgen(constructor, catch, js_namespace = YT, js_class = "Player")]
    fn new(element_id: &str) -> std::result::Result<YtPlayer, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setPlaybackRate)]
    fn set_playback_rate(this: &YtPlayer, rate: f64) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = seekTo)]
    fn seek_to(
        this: &YtPlayer,
        seconds: f64,
        allow_seek_ahead: bool,
    ) -> std::result::Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = getDuration)]
    fn get_duration(this: &YtPlayer) -> std::result::Result<f64, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &YtPlayer) -> std::result::Result<(), JsValue>;
}

fn command_error(command: &'static str, value: JsValue) -> Error {
    Error::player_command(command, js_reason(&value))
}

/// A live `YT.Player` bound to one slot's iframe
pub struct YtPlayerHandle {
    slot: SlotId,
    player: YtPlayer,
}

impl PlayerHandle for YtPlayerHandle {
    fn slot(&self) -> SlotId {
        self.slot
    }

    fn set_playback_rate(&mut self, rate: f64) -> Result<()> {
        self.player
            .set_playback_rate(rate)
            .map_err(|e| command_error("setPlaybackRate", e))
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        self.player
            .seek_to(seconds, true)
            .map_err(|e| command_error("seekTo", e))
    }

    fn duration(&self) -> Result<f64> {
        self.player
            .get_duration()
            .map_err(|e| command_error("getDuration", e))
    }

    fn destroy(&mut self) -> Result<()> {
        self.player.destroy().map_err(|e| command_error("destroy", e))
    }
}

/// Constructs `YT.Player` instances against slot iframes by element id
#[derive(Default)]
pub struct YtPlayerFactory;

impl PlayerFactory for YtPlayerFactory {
    fn create(&mut self, slot: SlotId, _embed: &EmbedSpec) -> Result<Box<dyn PlayerHandle>> {
        let player = YtPlayer::new(&player_element_id(slot)).map_err(|e| Error::PlayerSetup {
            slot,
            reason: js_reason(&e),
        })?;
        Ok(Box::new(YtPlayerHandle { slot, player }))
    }
}
