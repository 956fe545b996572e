//! Session orchestration - wiring user input to the registry
//!
//! One session per page. Resolves pasted input, drives the registry,
//! reports failures through the notification sink and toggles fullscreen.

use crate::{
    controls::ControlAction,
    player::PlayerFactory,
    registry::VideoRegistry,
    resolve::resolve,
    surface::{NotificationSink, RenderSurface},
    types::{MoveDirection, RegistryConfig, SlotId},
    Error, Result,
};
use tracing::warn;

/// Orchestrator for one wall session
pub struct MultiViewSession {
    registry: VideoRegistry,
    sink: Box<dyn NotificationSink>,
}

impl MultiViewSession {
    pub fn new(
        config: RegistryConfig,
        surface: Box<dyn RenderSurface>,
        factory: Box<dyn PlayerFactory>,
        sink: Box<dyn NotificationSink>,
    ) -> Result<Self> {
        Ok(Self {
            registry: VideoRegistry::new(config, surface, factory)?,
            sink,
        })
    }

    /// Resolve pasted input and add the video.
    ///
    /// Empty input is a quiet no-op. An unrecognized URL is reported
    /// through the sink and returned as the error.
    pub fn add_from_input(&mut self, raw: &str) -> Result<Option<SlotId>> {
        let source = match resolve(raw) {
            Ok(Some(source)) => source,
            Ok(None) => return Ok(None),
            Err(err) => {
                warn!(input = raw, error = %err, "Could not resolve input");
                self.sink.notify(resolution_notice(&err));
                return Err(err);
            }
        };
        self.registry.add(source).map(Some)
    }

    /// Enter fullscreen when out of it, leave it otherwise. A denied
    /// request is reported through the sink and returned.
    pub fn toggle_fullscreen(&mut self) -> Result<()> {
        if self.registry.is_fullscreen() {
            self.registry.exit_fullscreen();
            return Ok(());
        }
        if let Err(err) = self.registry.enter_fullscreen() {
            self.sink.notify(&err.to_string());
            return Err(err);
        }
        Ok(())
    }

    /// Route a control event to the matching operation.
    pub fn dispatch(&mut self, action: ControlAction) -> Result<()> {
        match action {
            ControlAction::Add { input } => self.add_from_input(&input).map(|_| ()),
            ControlAction::MovePrev { slot } => self.registry.move_slot(slot, MoveDirection::Prev),
            ControlAction::MoveNext { slot } => self.registry.move_slot(slot, MoveDirection::Next),
            ControlAction::Remove { slot } => self.registry.remove(slot),
            ControlAction::SetGridSize { size } => self.registry.set_grid_size(size),
            ControlAction::ToggleFullscreen => self.toggle_fullscreen(),
            ControlAction::FastForwardAll => {
                self.registry.fast_forward_all();
                Ok(())
            }
        }
    }

    pub fn registry(&self) -> &VideoRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut VideoRegistry {
        &mut self.registry
    }
}

fn resolution_notice(err: &Error) -> &'static str {
    match err {
        Error::MalformedTwitchUrl(_) => "Enter a valid Twitch URL",
        _ => "Enter a valid YouTube or Twitch URL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::InertPlayerFactory;
    use crate::surface::{BufferedSink, InMemorySurface};

    fn session() -> (MultiViewSession, BufferedSink) {
        let sink = BufferedSink::new();
        let session = MultiViewSession::new(
            RegistryConfig::default(),
            Box::new(InMemorySurface::new()),
            Box::new(InertPlayerFactory),
            Box::new(sink.clone()),
        )
        .unwrap();
        (session, sink)
    }

    #[test]
    fn test_empty_input_is_quiet() {
        let (mut session, sink) = session();
        assert_eq!(session.add_from_input("   ").unwrap(), None);
        assert!(sink.messages().is_empty());
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_unresolvable_input_notifies() {
        let (mut session, sink) = session();
        assert!(session.add_from_input("not a url").is_err());
        assert_eq!(sink.messages(), vec!["Enter a valid YouTube or Twitch URL"]);
    }

    #[test]
    fn test_malformed_twitch_notice_is_specific() {
        let (mut session, sink) = session();
        assert!(session.add_from_input("https://twitch.tv/").is_err());
        assert_eq!(sink.messages(), vec!["Enter a valid Twitch URL"]);
    }

    #[test]
    fn test_add_through_dispatch() {
        let (mut session, _sink) = session();
        session
            .dispatch(ControlAction::Add {
                input: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            })
            .unwrap();
        assert_eq!(session.registry().len(), 1);
    }

    #[test]
    fn test_fullscreen_toggles() {
        let (mut session, _sink) = session();
        session.toggle_fullscreen().unwrap();
        assert!(session.registry().is_fullscreen());
        session.toggle_fullscreen().unwrap();
        assert!(!session.registry().is_fullscreen());
    }
}
