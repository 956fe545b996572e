//! Headless wall walkthrough
//!
//! Runs a session against the in-memory surface: add a few videos, move
//! one, remove one, and dump the event log.

use mosaic_core::{
    BufferedSink, InMemorySurface, InertPlayerFactory, MoveDirection, MultiViewSession,
    RegistryConfig,
};

fn main() -> mosaic_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    mosaic_core::init();

    let sink = BufferedSink::new();
    let mut session = MultiViewSession::new(
        RegistryConfig::default(),
        Box::new(InMemorySurface::new()),
        Box::new(InertPlayerFactory),
        Box::new(sink.clone()),
    )?;

    let first = session
        .add_from_input("https://youtu.be/dQw4w9WgXcQ")?
        .expect("non-empty input");
    session.add_from_input("https://twitch.tv/somechannel")?;
    session.add_from_input("https://www.youtube.com/watch?v=9bZkp7q19f0")?;

    println!("layout after three videos: {}", session.registry().layout());

    session.registry_mut().move_slot(first, MoveDirection::Next)?;
    println!("player order: {:?}", session.registry().player_order());

    session.registry_mut().remove(first)?;
    println!("layout after removal: {}", session.registry().layout());

    // A bad paste lands in the sink, not in the wall.
    let _ = session.add_from_input("not a url");
    println!("notices: {:?}", sink.messages());

    println!("events: {}", session.registry().events().to_json());
    Ok(())
}
