//! Error types for Mosaic Core

use crate::types::SlotId;
use thiserror::Error;

/// Result type alias for wall operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wall error types
#[derive(Error, Debug)]
pub enum Error {
    // Resolution errors
    #[error("No YouTube or Twitch pattern matched: {0:?}")]
    UnresolvableUrl(String),

    #[error("Twitch URL has no channel segment: {0:?}")]
    MalformedTwitchUrl(String),

    #[error("Invalid YouTube video id: {0:?}")]
    InvalidVideoId(String),

    #[error("Invalid Twitch channel name: {0:?}")]
    InvalidChannelName(String),

    // Registry errors
    #[error("Unknown slot: {0}")]
    UnknownSlot(SlotId),

    #[error("Grid size {0} is not among the configured options")]
    UnavailableGridSize(u32),

    // Collaborator errors
    #[error("Rendering surface rejected {op}: {reason}")]
    Surface { op: &'static str, reason: String },

    #[error("Player setup failed for slot {slot}: {reason}")]
    PlayerSetup { slot: SlotId, reason: String },

    #[error("Player command {command} failed: {reason}")]
    PlayerCommand { command: &'static str, reason: String },

    #[error("Fullscreen request rejected: {0}")]
    FullscreenDenied(String),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a surface error
    pub fn surface(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Surface {
            op,
            reason: reason.into(),
        }
    }

    /// Create a player command error
    pub fn player_command(command: &'static str, reason: impl Into<String>) -> Self {
        Error::PlayerCommand {
            command,
            reason: reason.into(),
        }
    }

    /// Returns true if this error came from unrecognized user input
    /// (surfaced to the user through the notification sink).
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Error::UnresolvableUrl(_) | Error::MalformedTwitchUrl(_)
        )
    }

    /// Returns the error code for event records
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnresolvableUrl(_) => "UNRESOLVABLE_URL",
            Error::MalformedTwitchUrl(_) => "MALFORMED_TWITCH_URL",
            Error::InvalidVideoId(_) => "INVALID_VIDEO_ID",
            Error::InvalidChannelName(_) => "INVALID_CHANNEL",
            Error::UnknownSlot(_) => "UNKNOWN_SLOT",
            Error::UnavailableGridSize(_) => "UNAVAILABLE_GRID_SIZE",
            Error::Surface { .. } => "SURFACE",
            Error::PlayerSetup { .. } => "PLAYER_SETUP",
            Error::PlayerCommand { .. } => "PLAYER_COMMAND",
            Error::FullscreenDenied(_) => "FULLSCREEN_DENIED",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
            Error::Internal(_) => "INTERNAL",
        }
    }
}
