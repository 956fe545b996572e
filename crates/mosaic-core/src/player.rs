//! Player control seam
//!
//! YouTube embeds expose a controllable player object; the registry owns
//! one handle per YouTube slot and tears it down with the slot. Twitch
//! embeds offer no in-process control surface, so Twitch slots never get a
//! handle. Handles are constructed synchronously and never awaited:
//! commands sent before the underlying embed is ready follow the provider
//! library's buffer-or-drop contract, and every call is fallible.

use crate::{embed::EmbedSpec, types::SlotId, Result};

/// Playback rate applied before the seek-to-end fast-forward.
pub const FAST_FORWARD_RATE: f64 = 2.0;

/// Controllable reference to an active embed
pub trait PlayerHandle {
    /// The slot this handle is bound to (lookup key, not ownership).
    fn slot(&self) -> SlotId;

    fn set_playback_rate(&mut self, rate: f64) -> Result<()>;

    /// Seek to an absolute position in seconds.
    fn seek_to(&mut self, seconds: f64) -> Result<()>;

    /// Total media duration in seconds.
    fn duration(&self) -> Result<f64>;

    /// Release provider-side resources. Called once, on removal.
    fn destroy(&mut self) -> Result<()>;
}

/// Constructs player handles for newly added slots
pub trait PlayerFactory {
    fn create(&mut self, slot: SlotId, embed: &EmbedSpec) -> Result<Box<dyn PlayerHandle>>;
}

/// Rate up, then seek to the end of the media - the wall's reload control
/// applies this to every handle.
pub fn fast_forward(player: &mut dyn PlayerHandle) -> Result<()> {
    player.set_playback_rate(FAST_FORWARD_RATE)?;
    let end = player.duration()?;
    player.seek_to(end)
}

/// Factory for headless walls: hands out inert handles that accept every
/// command and do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertPlayerFactory;

impl PlayerFactory for InertPlayerFactory {
    fn create(&mut self, slot: SlotId, _embed: &EmbedSpec) -> Result<Box<dyn PlayerHandle>> {
        Ok(Box::new(InertPlayer { slot }))
    }
}

#[derive(Debug)]
struct InertPlayer {
    slot: SlotId,
}

impl PlayerHandle for InertPlayer {
    fn slot(&self) -> SlotId {
        self.slot
    }

    fn set_playback_rate(&mut self, _rate: f64) -> Result<()> {
        Ok(())
    }

    fn seek_to(&mut self, _seconds: f64) -> Result<()> {
        Ok(())
    }

    fn duration(&self) -> Result<f64> {
        Ok(0.0)
    }

    fn destroy(&mut self) -> Result<()> {
        Ok(())
    }
}
