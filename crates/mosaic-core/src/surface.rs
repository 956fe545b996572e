//! Collaborator seams: rendering surface and notification sink
//!
//! The registry never touches a concrete UI. A surface owns the ordered
//! visual slot nodes (DOM, in-memory, anything that keeps order); a sink
//! delivers user-facing notices. [`InMemorySurface`] and [`BufferedSink`]
//! are complete headless implementations.

use crate::{embed::EmbedSpec, grid::GridLayout, types::SlotId, Error, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Ordered container of visual slot nodes
pub trait RenderSurface {
    /// Append a new slot node at the end of the visual order.
    fn append(&mut self, slot: SlotId, embed: &EmbedSpec) -> Result<()>;

    /// Move an existing slot node before `reference` (`None` = to the end).
    fn insert_before(&mut self, slot: SlotId, reference: Option<SlotId>) -> Result<()>;

    /// Remove a slot node.
    fn remove(&mut self, slot: SlotId) -> Result<()>;

    /// Apply column/row counts.
    fn set_layout(&mut self, layout: GridLayout);

    /// Current left-to-right slot order.
    fn slot_order(&self) -> Vec<SlotId>;

    fn enter_fullscreen(&mut self) -> Result<()>;

    fn exit_fullscreen(&mut self);

    fn is_fullscreen(&self) -> bool;
}

/// User-facing notice delivery (a blocking modal in the browser)
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

/// Headless rendering surface backed by plain collections
#[derive(Debug, Default)]
pub struct InMemorySurface {
    order: Vec<SlotId>,
    embeds: HashMap<SlotId, EmbedSpec>,
    layout: Option<GridLayout>,
    fullscreen: bool,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently applied layout.
    pub fn layout(&self) -> Option<GridLayout> {
        self.layout
    }

    pub fn embed(&self, slot: SlotId) -> Option<&EmbedSpec> {
        self.embeds.get(&slot)
    }

    fn position(&self, op: &'static str, slot: SlotId) -> Result<usize> {
        self.order
            .iter()
            .position(|&s| s == slot)
            .ok_or_else(|| Error::surface(op, format!("unknown slot {slot}")))
    }
}

impl RenderSurface for InMemorySurface {
    fn append(&mut self, slot: SlotId, embed: &EmbedSpec) -> Result<()> {
        if self.embeds.contains_key(&slot) {
            return Err(Error::surface("append", format!("duplicate slot {slot}")));
        }
        self.order.push(slot);
        self.embeds.insert(slot, embed.clone());
        Ok(())
    }

    fn insert_before(&mut self, slot: SlotId, reference: Option<SlotId>) -> Result<()> {
        let from = self.position("insert_before", slot)?;
        self.order.remove(from);
        match reference {
            Some(reference) => {
                let to = self.position("insert_before", reference).map_err(|err| {
                    // Keep the node rather than dropping it on a bad reference.
                    self.order.insert(from, slot);
                    err
                })?;
                self.order.insert(to, slot);
            }
            None => self.order.push(slot),
        }
        Ok(())
    }

    fn remove(&mut self, slot: SlotId) -> Result<()> {
        let index = self.position("remove", slot)?;
        self.order.remove(index);
        self.embeds.remove(&slot);
        Ok(())
    }

    fn set_layout(&mut self, layout: GridLayout) {
        self.layout = Some(layout);
    }

    fn slot_order(&self) -> Vec<SlotId> {
        self.order.clone()
    }

    fn enter_fullscreen(&mut self) -> Result<()> {
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

/// Sink that retains messages in memory.
///
/// Clones share one buffer, so a handle kept outside the session observes
/// everything the session reports.
#[derive(Debug, Clone, Default)]
pub struct BufferedSink {
    messages: Rc<RefCell<Vec<String>>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        self.messages.borrow_mut().drain(..).collect()
    }
}

impl NotificationSink for BufferedSink {
    fn notify(&mut self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
