//! Mosaic Core - multi-stream video wall library
//!
//! Everything needed to run a wall of embedded video players:
//! - URL resolution for YouTube and Twitch paste input
//! - Embed URL construction
//! - Square grid layout with a user-facing size selector
//! - The video registry: ordered slots plus per-slot player handles
//! - Session orchestration and control routing
//! - A bounded event log for observability
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Mosaic Core                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐      │
//! │  │     URL      │   │    Embed     │   │     Grid     │      │
//! │  │   Resolver   │   │   Builder    │   │    Layout    │      │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘      │
//! │         │                  │                  │              │
//! │         └──────────────────┼──────────────────┘              │
//! │                            │                                 │
//! │                     ┌──────┴──────┐                          │
//! │                     │    Video    │                          │
//! │                     │   Registry  │                          │
//! │                     └──────┬──────┘                          │
//! │                            │                                 │
//! │  ┌──────────────┐   ┌──────┴──────┐   ┌──────────────┐       │
//! │  │    Render    │   │   Session   │   │    Player    │       │
//! │  │   Surface    │   │             │   │   Factory    │       │
//! │  └──────────────┘   └─────────────┘   └──────────────┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is single-threaded and synchronous: every operation runs
//! to completion on one discrete UI event. Surfaces, sinks and player
//! factories are trait seams, so the same session drives a browser DOM or
//! a headless harness.

pub mod controls;
pub mod embed;
pub mod error;
pub mod events;
pub mod grid;
pub mod player;
pub mod registry;
pub mod resolve;
pub mod session;
pub mod surface;
pub mod types;

pub use controls::ControlAction;
pub use embed::{EmbedSpec, YOUTUBE_IFRAME_ALLOW};
pub use error::{Error, Result};
pub use events::{EventLog, EventRecord, RegistryEvent};
pub use grid::{auto_dimension, GridLayout, GridSizeSelector};
pub use player::{fast_forward, InertPlayerFactory, PlayerFactory, PlayerHandle, FAST_FORWARD_RATE};
pub use registry::VideoRegistry;
pub use resolve::resolve;
pub use session::MultiViewSession;
pub use surface::{BufferedSink, InMemorySurface, NotificationSink, RenderSurface};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library with default configuration
pub fn init() {
    tracing::info!(version = VERSION, "Mosaic Core initialized");
}
