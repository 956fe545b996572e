//! DOM rendering surface and alert sink
//!
//! One container element per slot: a controls strip (move/remove buttons
//! carrying `data-action` and `data-slot`) above the provider iframe. The
//! iframe gets a deterministic element id derived from the slot id so the
//! player factory can bind to it without any DOM-order coupling.

use crate::js_reason;
use mosaic_core::{EmbedSpec, Error, GridLayout, NotificationSink, RenderSurface, Result, SlotId};
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Element id carried by a slot's player iframe.
pub fn player_element_id(slot: SlotId) -> String {
    format!("mosaic-player-{slot}")
}

const CONTROL_BUTTONS: [(&str, &str, &str); 3] = [
    ("move-prev", "Move earlier", "fa-solid fa-arrow-left"),
    ("move-next", "Move later", "fa-solid fa-arrow-right"),
    ("remove", "Remove video", "fa-solid fa-xmark"),
];

/// Rendering surface over a CSS-grid container element
pub struct DomSurface {
    document: Document,
    grid: HtmlElement,
    containers: HashMap<SlotId, Element>,
    order: Vec<SlotId>,
}

impl DomSurface {
    /// Attach to the grid container element with the given id.
    pub fn attach(grid_element_id: &str) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| Error::surface("attach", "no window"))?;
        let document = window
            .document()
            .ok_or_else(|| Error::surface("attach", "no document"))?;
        let grid = document
            .get_element_by_id(grid_element_id)
            .ok_or_else(|| {
                Error::surface("attach", format!("no element with id {grid_element_id:?}"))
            })?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::surface("attach", "grid element has no style"))?;

        Ok(Self {
            document,
            grid,
            containers: HashMap::new(),
            order: Vec::new(),
        })
    }

    fn create(&self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| Error::surface("append", js_reason(&e)))
    }

    fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
        element
            .set_attribute(name, value)
            .map_err(|e| Error::surface("append", js_reason(&e)))
    }

    fn build_container(&self, slot: SlotId, embed: &EmbedSpec) -> Result<Element> {
        let container = self.create("div")?;
        container.set_class_name("video-item");
        Self::set_attr(&container, "data-slot", &slot.to_string())?;
        Self::set_attr(&container, "data-provider", embed.provider.as_str())?;

        let controls = self.create("div")?;
        controls.set_class_name("video-controls");
        for (action, label, icon_class) in CONTROL_BUTTONS {
            let button = self.create("button")?;
            button.set_class_name(if action == "remove" {
                "video-control video-control--remove"
            } else {
                "video-control video-control--move"
            });
            Self::set_attr(&button, "type", "button")?;
            Self::set_attr(&button, "data-action", action)?;
            Self::set_attr(&button, "data-slot", &slot.to_string())?;
            Self::set_attr(&button, "title", label)?;
            Self::set_attr(&button, "aria-label", label)?;

            let icon = self.create("i")?;
            icon.set_class_name(icon_class);
            Self::set_attr(&icon, "aria-hidden", "true")?;
            button
                .append_child(&icon)
                .map_err(|e| Error::surface("append", js_reason(&e)))?;

            controls
                .append_child(&button)
                .map_err(|e| Error::surface("append", js_reason(&e)))?;
        }

        let iframe = self.create("iframe")?;
        iframe.set_id(&player_element_id(slot));
        Self::set_attr(&iframe, "src", embed.url.as_str())?;
        Self::set_attr(&iframe, "data-provider", embed.provider.as_str())?;
        Self::set_attr(&iframe, "allowfullscreen", "true")?;
        Self::set_attr(&iframe, "frameborder", "0")?;
        if let Some(allow) = embed.iframe_allow() {
            Self::set_attr(&iframe, "allow", allow)?;
        }

        container
            .append_child(&controls)
            .map_err(|e| Error::surface("append", js_reason(&e)))?;
        container
            .append_child(&iframe)
            .map_err(|e| Error::surface("append", js_reason(&e)))?;
        Ok(container)
    }

    fn container(&self, op: &'static str, slot: SlotId) -> Result<&Element> {
        self.containers
            .get(&slot)
            .ok_or_else(|| Error::surface(op, format!("unknown slot {slot}")))
    }
}

impl RenderSurface for DomSurface {
    fn append(&mut self, slot: SlotId, embed: &EmbedSpec) -> Result<()> {
        let container = self.build_container(slot, embed)?;
        self.grid
            .append_child(&container)
            .map_err(|e| Error::surface("append", js_reason(&e)))?;
        self.containers.insert(slot, container);
        self.order.push(slot);
        Ok(())
    }

    fn insert_before(&mut self, slot: SlotId, reference: Option<SlotId>) -> Result<()> {
        let node = self.container("insert_before", slot)?.clone();
        let reference_node: Option<web_sys::Node> = match reference {
            Some(r) => Some(self.container("insert_before", r)?.clone().into()),
            None => None,
        };
        self.grid
            .insert_before(&node, reference_node.as_ref())
            .map_err(|e| Error::surface("insert_before", js_reason(&e)))?;

        self.order.retain(|&s| s != slot);
        match reference.and_then(|r| self.order.iter().position(|&s| s == r)) {
            Some(to) => self.order.insert(to, slot),
            None => self.order.push(slot),
        }
        Ok(())
    }

    fn remove(&mut self, slot: SlotId) -> Result<()> {
        let container = self
            .containers
            .remove(&slot)
            .ok_or_else(|| Error::surface("remove", format!("unknown slot {slot}")))?;
        container.remove();
        self.order.retain(|&s| s != slot);
        Ok(())
    }

    fn set_layout(&mut self, layout: GridLayout) {
        let style = self.grid.style();
        let _ = style.set_property(
            "grid-template-columns",
            &format!("repeat({}, 1fr)", layout.columns),
        );
        let _ = style.set_property(
            "grid-template-rows",
            &format!("repeat({}, 1fr)", layout.rows),
        );
    }

    fn slot_order(&self) -> Vec<SlotId> {
        self.order.clone()
    }

    fn enter_fullscreen(&mut self) -> Result<()> {
        self.grid
            .request_fullscreen()
            .map_err(|e| Error::FullscreenDenied(js_reason(&e)))
    }

    fn exit_fullscreen(&mut self) {
        if self.document.fullscreen_element().is_some() {
            self.document.exit_fullscreen();
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }
}

/// Blocking modal alert
pub struct AlertSink {
    window: Window,
}

impl AlertSink {
    pub fn new() -> Result<Self> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or_else(|| Error::surface("alert", "no window"))
    }
}

impl NotificationSink for AlertSink {
    fn notify(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}
