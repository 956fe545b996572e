//! Integration tests for Mosaic Core

use mosaic_core::{
    BufferedSink, ControlAction, Error, GridLayout, InMemorySurface, InertPlayerFactory,
    MediaSource, MoveDirection, MultiViewSession, PlayerFactory, PlayerHandle, Provider,
    RegistryConfig, Result, SlotId,
};
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// Harness
// =============================================================================

/// Player double that records commands and can fail seeks.
struct ProbePlayer {
    slot: SlotId,
    commands: Rc<RefCell<Vec<(SlotId, String)>>>,
    fail_seek: bool,
}

impl PlayerHandle for ProbePlayer {
    fn slot(&self) -> SlotId {
        self.slot
    }

    fn set_playback_rate(&mut self, rate: f64) -> Result<()> {
        self.commands
            .borrow_mut()
            .push((self.slot, format!("rate:{rate}")));
        Ok(())
    }

    fn seek_to(&mut self, seconds: f64) -> Result<()> {
        if self.fail_seek {
            return Err(Error::player_command("seekTo", "player not ready"));
        }
        self.commands
            .borrow_mut()
            .push((self.slot, format!("seek:{seconds}")));
        Ok(())
    }

    fn duration(&self) -> Result<f64> {
        Ok(90.0)
    }

    fn destroy(&mut self) -> Result<()> {
        self.commands
            .borrow_mut()
            .push((self.slot, "destroy".to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct ProbeFactory {
    commands: Rc<RefCell<Vec<(SlotId, String)>>>,
    created: usize,
    fail_seek_for: Option<usize>,
}

impl PlayerFactory for ProbeFactory {
    fn create(
        &mut self,
        slot: SlotId,
        _embed: &mosaic_core::EmbedSpec,
    ) -> Result<Box<dyn PlayerHandle>> {
        let index = self.created;
        self.created += 1;
        Ok(Box::new(ProbePlayer {
            slot,
            commands: self.commands.clone(),
            fail_seek: self.fail_seek_for == Some(index),
        }))
    }
}

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

fn probe_session(factory: ProbeFactory) -> MultiViewSession {
    MultiViewSession::new(
        RegistryConfig::default(),
        Box::new(InMemorySurface::new()),
        Box::new(factory),
        Box::new(BufferedSink::new()),
    )
    .unwrap()
}

fn add(session: &mut MultiViewSession, url: &str) -> SlotId {
    session.add_from_input(url).unwrap().unwrap()
}

// =============================================================================
// URL Resolution Tests
// =============================================================================

#[test]
fn test_all_youtube_shapes_resolve_to_the_same_id() {
    let shapes = [
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10",
        "https://www.youtube.com/embed/dQw4w9WgXcQ",
        "https://www.youtube.com/shorts/dQw4w9WgXcQ",
        "https://www.youtube.com/live/dQw4w9WgXcQ",
    ];

    for shape in shapes {
        match mosaic_core::resolve(shape).unwrap().unwrap() {
            MediaSource::YouTube { id } => assert_eq!(id.as_str(), "dQw4w9WgXcQ", "{shape}"),
            other => panic!("{shape} resolved to {other:?}"),
        }
    }
}

#[test]
fn test_twitch_resolution_through_the_session() {
    let (mut session, sink) = session();
    let slot = add(&mut session, "https://twitch.tv/somechannel");

    let stored = session.registry().slot(slot).unwrap();
    assert_eq!(stored.provider(), Provider::Twitch);
    assert!(stored.embed_url.as_str().contains("channel=somechannel"));
    assert!(sink.messages().is_empty());
}

#[test]
fn test_resolution_failures_reach_the_sink() {
    let (mut session, sink) = session();

    assert!(session.add_from_input("not a url").is_err());
    assert!(session.add_from_input("https://twitch.tv/").is_err());

    assert_eq!(
        sink.take(),
        vec![
            "Enter a valid YouTube or Twitch URL",
            "Enter a valid Twitch URL"
        ]
    );
    assert!(session.registry().is_empty());
}

// =============================================================================
// Registry Order Tests
// =============================================================================

#[test]
fn test_remove_middle_of_three_keeps_handle_order() {
    let mut session = probe_session(ProbeFactory::default());
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");
    let c = add(&mut session, "https://youtu.be/CCCCCCCCCCC");

    session.registry_mut().remove(b).unwrap();

    assert_eq!(session.registry().player_order(), vec![a, c]);
    assert_eq!(session.registry().surface().slot_order(), vec![a, c]);
}

#[test]
fn test_edge_moves_are_noops() {
    let (mut session, _sink) = session();
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");

    session
        .registry_mut()
        .move_slot(a, MoveDirection::Prev)
        .unwrap();
    session
        .registry_mut()
        .move_slot(b, MoveDirection::Next)
        .unwrap();

    assert_eq!(session.registry().surface().slot_order(), vec![a, b]);
}

#[test]
fn test_moves_keep_handles_aligned_with_visual_order() {
    let mut session = probe_session(ProbeFactory::default());
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let t = add(&mut session, "https://twitch.tv/somechannel");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");

    // Walk b to the front, across the Twitch slot.
    session
        .registry_mut()
        .move_slot(b, MoveDirection::Prev)
        .unwrap();
    session
        .registry_mut()
        .move_slot(b, MoveDirection::Prev)
        .unwrap();

    assert_eq!(session.registry().surface().slot_order(), vec![b, a, t]);
    assert_eq!(session.registry().player_order(), vec![b, a]);
}

#[test]
fn test_dataset_actions_drive_the_wall() {
    let (mut session, _sink) = session();
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");

    let action = ControlAction::from_dataset("move-next", a).unwrap();
    session.dispatch(action).unwrap();
    assert_eq!(session.registry().surface().slot_order(), vec![b, a]);

    let action = ControlAction::from_dataset("remove", b).unwrap();
    session.dispatch(action).unwrap();
    assert_eq!(session.registry().surface().slot_order(), vec![a]);
}

// =============================================================================
// Grid Layout Tests
// =============================================================================

#[test]
fn test_five_videos_make_a_three_by_three() {
    let (mut session, _sink) = session();
    for id in [
        "AAAAAAAAAAA",
        "BBBBBBBBBBB",
        "CCCCCCCCCCC",
        "DDDDDDDDDDD",
        "EEEEEEEEEEE",
    ] {
        add(&mut session, &format!("https://youtu.be/{id}"));
    }
    assert_eq!(session.registry().layout(), GridLayout::square(3));
}

#[test]
fn test_empty_wall_shows_the_selected_size() {
    let (mut session, _sink) = session();
    let slots: Vec<SlotId> = [
        "AAAAAAAAAAA",
        "BBBBBBBBBBB",
        "CCCCCCCCCCC",
        "DDDDDDDDDDD",
        "EEEEEEEEEEE",
    ]
    .iter()
    .map(|id| add(&mut session, &format!("https://youtu.be/{id}")))
    .collect();
    assert_eq!(session.registry().selected_grid_size(), 3);

    for slot in slots {
        session.registry_mut().remove(slot).unwrap();
    }
    // The selection stands on an empty wall; the auto value would be 1x1.
    assert_eq!(session.registry().layout(), GridLayout::square(3));
}

// =============================================================================
// Reload Isolation Tests
// =============================================================================

#[test]
fn test_one_faulting_handle_does_not_stop_the_rest() {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let factory = ProbeFactory {
        commands: commands.clone(),
        fail_seek_for: Some(0),
        ..ProbeFactory::default()
    };
    let mut session = probe_session(factory);
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");

    session.registry_mut().fast_forward_all();

    let commands = commands.borrow();
    assert!(commands.contains(&(a, "rate:2".to_string())));
    assert!(commands.contains(&(b, "rate:2".to_string())));
    assert!(commands.contains(&(b, "seek:90".to_string())));
    assert!(!commands.contains(&(a, "seek:90".to_string())));
}

#[test]
fn test_removal_destroys_exactly_the_removed_player() {
    let commands = Rc::new(RefCell::new(Vec::new()));
    let factory = ProbeFactory {
        commands: commands.clone(),
        ..ProbeFactory::default()
    };
    let mut session = probe_session(factory);
    let a = add(&mut session, "https://youtu.be/AAAAAAAAAAA");
    let b = add(&mut session, "https://youtu.be/BBBBBBBBBBB");

    session.registry_mut().remove(a).unwrap();

    let destroyed: Vec<SlotId> = commands
        .borrow()
        .iter()
        .filter(|(_, c)| c == "destroy")
        .map(|(slot, _)| *slot)
        .collect();
    assert_eq!(destroyed, vec![a]);
    assert_eq!(session.registry().player_order(), vec![b]);
}

// =============================================================================
// Event Log Tests
// =============================================================================

#[test]
fn test_event_json_is_inspectable() {
    let (mut session, _sink) = session();
    add(&mut session, "https://youtu.be/dQw4w9WgXcQ");

    let json = session.registry().events().to_json();
    assert!(json.contains("\"event\":\"slot_added\""));
    assert!(json.contains("\"provider\":\"youtube\""));
    assert!(json.contains("\"event\":\"layout_changed\""));
}

#[test]
fn test_drained_events_do_not_repeat() {
    let (mut session, _sink) = session();
    add(&mut session, "https://youtu.be/dQw4w9WgXcQ");

    let first = session.registry_mut().drain_events();
    assert!(!first.is_empty());
    assert!(session.registry().events().is_empty());
}
