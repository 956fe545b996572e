//! Core types for Mosaic

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Unique identifier for one video slot in the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(pub Uuid);

impl SlotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlotId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SlotId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Video source service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    YouTube,
    Twitch,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Twitch => "twitch",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of a YouTube video identifier
pub const YOUTUBE_ID_LEN: usize = 11;

/// Returns true for the characters a YouTube video id is made of.
pub(crate) fn is_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Validated 11-character YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Accepts exactly [`YOUTUBE_ID_LEN`] characters from `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() == YOUTUBE_ID_LEN && raw.bytes().all(is_id_byte) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidVideoId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Twitch channel name, taken verbatim from the URL path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Accepts any non-empty segment without `/` or `?`.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.is_empty() && !raw.contains(['/', '?']) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidChannelName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved media reference: which service, and what to play there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum MediaSource {
    YouTube { id: VideoId },
    Twitch { channel: ChannelName },
}

impl MediaSource {
    pub fn provider(&self) -> Provider {
        match self {
            MediaSource::YouTube { .. } => Provider::YouTube,
            MediaSource::Twitch { .. } => Provider::Twitch,
        }
    }
}

/// One video's identity, provider tag and embed target within the wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Stable identity, minted at add time
    pub id: SlotId,
    /// What this slot plays
    pub source: MediaSource,
    /// The embed URL its visual node points at
    pub embed_url: Url,
}

impl Slot {
    pub fn provider(&self) -> Provider {
        self.source.provider()
    }
}

/// Direction of a discrete move-by-one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Toward the front of the wall
    Prev,
    /// Toward the back of the wall
    Next,
}

impl MoveDirection {
    pub fn offset(&self) -> isize {
        match self {
            MoveDirection::Prev => -1,
            MoveDirection::Next => 1,
        }
    }
}

impl std::fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDirection::Prev => f.write_str("prev"),
            MoveDirection::Next => f.write_str("next"),
        }
    }
}

/// Wall configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Grid sizes offered by the size selector
    pub grid_sizes: Vec<u32>,
    /// Initially selected grid size
    pub initial_grid_size: u32,
    /// Start embeds playing immediately
    pub autoplay: bool,
    /// Start embeds muted
    pub mute: bool,
    /// Hostname handed to Twitch as the embedding parent
    pub parent_host: String,
    /// Maximum retained event records
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            grid_sizes: vec![1, 2, 3, 4],
            initial_grid_size: 2,
            autoplay: true,
            mute: true,
            parent_host: "localhost".to_string(),
            event_capacity: 256,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.grid_sizes.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one grid size option is required".to_string(),
            ));
        }
        if self.grid_sizes.iter().any(|&n| n == 0) {
            return Err(Error::InvalidConfig(
                "grid sizes must be positive".to_string(),
            ));
        }
        if !self.grid_sizes.contains(&self.initial_grid_size) {
            return Err(Error::InvalidConfig(format!(
                "initial grid size {} is not among the options",
                self.initial_grid_size
            )));
        }
        if self.parent_host.is_empty() {
            return Err(Error::InvalidConfig(
                "parent host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_id_shape() {
        assert!(VideoId::parse("dQw4w9WgXcQ").is_ok());
        assert!(VideoId::parse("short").is_err());
        assert!(VideoId::parse("twelve-chars").is_err());
        assert!(VideoId::parse("has space!!").is_err());
    }

    #[test]
    fn test_channel_name_shape() {
        assert!(ChannelName::parse("somechannel").is_ok());
        assert!(ChannelName::parse("").is_err());
        assert!(ChannelName::parse("a/b").is_err());
        assert!(ChannelName::parse("a?b").is_err());
    }

    #[test]
    fn test_slot_id_roundtrip() {
        let id = SlotId::new();
        let parsed: SlotId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_config_validation() {
        assert!(RegistryConfig::default().validate().is_ok());

        let mut config = RegistryConfig::default();
        config.initial_grid_size = 7;
        assert!(config.validate().is_err());

        let mut config = RegistryConfig::default();
        config.grid_sizes.clear();
        assert!(config.validate().is_err());
    }
}
