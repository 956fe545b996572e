//! The video registry - ordered slots and their player handles
//!
//! Owns the wall's state: the ordered slot sequence, the player-handle
//! list for controllable (YouTube) slots, the grid size selector and the
//! event log. Collaborators are injected as boxed traits; the registry is
//! single-threaded and every operation runs to completion on one discrete
//! UI event.
//!
//! The load-bearing invariant: the handle list, projected through each
//! handle's slot id onto the ordered sequence of YouTube slots, matches
//! that sequence after every add, move and remove. Order is always
//! re-derived from the registry's own slot sequence, never by querying the
//! surface.

use crate::{
    embed::EmbedSpec,
    events::{EventLog, RegistryEvent},
    grid::{auto_dimension, GridLayout, GridSizeSelector},
    player::{fast_forward, PlayerFactory, PlayerHandle},
    surface::RenderSurface,
    types::{MediaSource, MoveDirection, Provider, RegistryConfig, Slot, SlotId},
    Error, Result,
};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Registry managing one wall of embedded players
pub struct VideoRegistry {
    config: RegistryConfig,
    slots: Vec<Slot>,
    players: Vec<Box<dyn PlayerHandle>>,
    surface: Box<dyn RenderSurface>,
    factory: Box<dyn PlayerFactory>,
    grid: GridSizeSelector,
    events: EventLog,
}

impl VideoRegistry {
    /// Create a registry over a surface and a player factory.
    pub fn new(
        config: RegistryConfig,
        surface: Box<dyn RenderSurface>,
        factory: Box<dyn PlayerFactory>,
    ) -> Result<Self> {
        config.validate()?;
        let grid = GridSizeSelector::new(config.grid_sizes.clone(), config.initial_grid_size)?;
        let events = EventLog::new(config.event_capacity);
        let mut registry = Self {
            config,
            slots: Vec::new(),
            players: Vec::new(),
            surface,
            factory,
            grid,
            events,
        };
        // The empty wall starts at the selected size.
        registry.surface.set_layout(registry.grid.layout_for(0));
        Ok(registry)
    }

    /// Add a video at the end of the wall.
    ///
    /// YouTube slots also get a player handle; the visual node and the
    /// handle are created together, so a handle failure rolls the node
    /// back. The grid is recomputed to the smallest square holding the new
    /// count.
    pub fn add(&mut self, source: MediaSource) -> Result<SlotId> {
        let slot_id = SlotId::new();
        let provider = source.provider();
        let embed = EmbedSpec::for_source(&source, &self.config)?;

        self.surface.append(slot_id, &embed)?;

        if provider == Provider::YouTube {
            match self.factory.create(slot_id, &embed) {
                Ok(handle) => self.players.push(handle),
                Err(err) => {
                    let _ = self.surface.remove(slot_id);
                    return Err(err);
                }
            }
        }

        self.slots.push(Slot {
            id: slot_id,
            source,
            embed_url: embed.url,
        });
        self.refresh_layout();
        self.sync_player_order();

        info!(slot = %slot_id, provider = %provider, total = self.slots.len(), "Video added");
        self.events.record(RegistryEvent::SlotAdded {
            slot: slot_id,
            provider,
        });
        Ok(slot_id)
    }

    /// Swap a slot with its neighbor in the given direction.
    ///
    /// Moving the first slot toward the front, or the last toward the
    /// back, is a no-op.
    pub fn move_slot(&mut self, slot: SlotId, direction: MoveDirection) -> Result<()> {
        let from = self.position(slot)?;
        let to = from as isize + direction.offset();
        if to < 0 || to as usize >= self.slots.len() {
            debug!(slot = %slot, %direction, "Move out of bounds, ignoring");
            return Ok(());
        }
        let to = to as usize;

        self.slots.swap(from, to);
        let reference = self.slots.get(to + 1).map(|s| s.id);
        if let Err(err) = self.surface.insert_before(slot, reference) {
            self.slots.swap(from, to);
            return Err(err);
        }
        self.sync_player_order();

        debug!(slot = %slot, from, to, "Slot moved");
        self.events.record(RegistryEvent::SlotMoved { slot, from, to });
        Ok(())
    }

    /// Remove a video from the wall.
    ///
    /// The handle bound to the slot, if any, is detached and explicitly
    /// destroyed; a Twitch slot simply has none. A teardown fault is
    /// isolated and removal proceeds. At count zero the grid reverts to
    /// the user-selected size.
    pub fn remove(&mut self, slot: SlotId) -> Result<()> {
        let index = self.position(slot)?;
        self.surface.remove(slot)?;

        let had_player = match self.players.iter().position(|p| p.slot() == slot) {
            Some(pos) => {
                let mut handle = self.players.remove(pos);
                if let Err(err) = handle.destroy() {
                    warn!(slot = %slot, error = %err, "Player teardown failed");
                    self.events.record(RegistryEvent::PlayerFault {
                        slot,
                        code: err.error_code().to_string(),
                        message: err.to_string(),
                    });
                }
                true
            }
            None => false,
        };

        let removed = self.slots.remove(index);
        self.refresh_layout();
        self.sync_player_order();

        info!(slot = %slot, provider = %removed.provider(), total = self.slots.len(), "Video removed");
        self.events.record(RegistryEvent::SlotRemoved {
            slot,
            provider: removed.provider(),
            had_player,
        });
        Ok(())
    }

    /// Best-effort fast-forward of every active player: rate 2x, then seek
    /// to the end of the media. Wired to the wall's reload control. A
    /// fault on one handle never blocks the rest.
    pub fn fast_forward_all(&mut self) {
        for player in self.players.iter_mut() {
            if let Err(err) = fast_forward(player.as_mut()) {
                let slot = player.slot();
                warn!(slot = %slot, error = %err, "Fast-forward failed");
                self.events.record(RegistryEvent::PlayerFault {
                    slot,
                    code: err.error_code().to_string(),
                    message: err.to_string(),
                });
            }
        }
    }

    /// Explicit user selection from the size control. Applied regardless
    /// of slot count; the next add or remove recomputes the auto square.
    pub fn set_grid_size(&mut self, size: u32) -> Result<()> {
        self.grid.select(size)?;
        let layout = GridLayout::square(size);
        self.surface.set_layout(layout);
        info!(%layout, "Grid size selected");
        self.events.record(RegistryEvent::LayoutChanged {
            columns: layout.columns,
            rows: layout.rows,
            slot_count: self.slots.len(),
        });
        Ok(())
    }

    pub fn enter_fullscreen(&mut self) -> Result<()> {
        self.surface.enter_fullscreen()
    }

    pub fn exit_fullscreen(&mut self) {
        self.surface.exit_fullscreen();
    }

    pub fn is_fullscreen(&self) -> bool {
        self.surface.is_fullscreen()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in visual order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// The layout currently in effect for the slot count.
    pub fn layout(&self) -> GridLayout {
        self.grid.layout_for(self.slots.len())
    }

    pub fn selected_grid_size(&self) -> u32 {
        self.grid.selected()
    }

    /// Handle order projected onto slot ids (left-to-right).
    pub fn player_order(&self) -> Vec<SlotId> {
        self.players.iter().map(|p| p.slot()).collect()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<crate::events::EventRecord> {
        self.events.drain()
    }

    /// Read access to the surface, for adapters and assertions.
    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    fn position(&self, slot: SlotId) -> Result<usize> {
        self.slots
            .iter()
            .position(|s| s.id == slot)
            .ok_or(Error::UnknownSlot(slot))
    }

    /// Re-derive handle order from the registry's own slot sequence.
    fn sync_player_order(&mut self) {
        if self.players.is_empty() {
            return;
        }
        let positions: HashMap<SlotId, usize> = self
            .slots
            .iter()
            .filter(|s| s.provider() == Provider::YouTube)
            .enumerate()
            .map(|(index, s)| (s.id, index))
            .collect();
        self.players
            .sort_by_key(|p| positions.get(&p.slot()).copied().unwrap_or(usize::MAX));
    }

    /// Auto square for the current count; at count zero the selected size
    /// stands. The selector snaps to the auto dimension when it is one of
    /// the options.
    fn refresh_layout(&mut self) {
        let count = self.slots.len();
        if count > 0 {
            self.grid.snap_to(auto_dimension(count));
        }
        let layout = self.grid.layout_for(count);
        self.surface.set_layout(layout);
        self.events.record(RegistryEvent::LayoutChanged {
            columns: layout.columns,
            rows: layout.rows,
            slot_count: count,
        });
    }
}
