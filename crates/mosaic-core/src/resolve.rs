//! URL resolution for paste input
//!
//! Maps a raw pasted string to a typed media source. Twitch is checked
//! first; otherwise the YouTube shapes are tried in precedence order:
//! short link, `v=` query parameter, then the `embed`, `shorts` and `live`
//! paths. Pure string inspection: no network access, no side effects.

use crate::{
    types::{is_id_byte, ChannelName, MediaSource, VideoId, YOUTUBE_ID_LEN},
    Error, Result,
};
use tracing::debug;

const TWITCH_HOST: &str = "twitch.tv";

/// Resolve a raw pasted string into a media source.
///
/// Empty or whitespace-only input resolves to `Ok(None)` ("nothing to do",
/// distinct from a failure). A non-empty input that matches no supported
/// shape is an [`Error::UnresolvableUrl`]; a `twitch.tv` input without a
/// channel segment is an [`Error::MalformedTwitchUrl`].
pub fn resolve(input: &str) -> Result<Option<MediaSource>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let url = normalize(trimmed);

    if url.contains(TWITCH_HOST) {
        let channel = twitch_channel(&url)
            .ok_or_else(|| Error::MalformedTwitchUrl(trimmed.to_string()))?;
        debug!(channel = %channel, "Resolved Twitch channel");
        return Ok(Some(MediaSource::Twitch { channel }));
    }

    if let Some(id) = youtube_id(&url) {
        debug!(id = %id, "Resolved YouTube video");
        return Ok(Some(MediaSource::YouTube { id }));
    }

    Err(Error::UnresolvableUrl(trimmed.to_string()))
}

/// Rewrite a leading `http://` (any case) to `https://`.
fn normalize(trimmed: &str) -> String {
    const INSECURE: &str = "http://";
    if trimmed.len() >= INSECURE.len() && trimmed[..INSECURE.len()].eq_ignore_ascii_case(INSECURE)
    {
        format!("https://{}", &trimmed[INSECURE.len()..])
    } else {
        trimmed.to_string()
    }
}

/// The path segment after `twitch.tv/`, up to the next `/` or `?`.
fn twitch_channel(url: &str) -> Option<ChannelName> {
    let host = url.find(TWITCH_HOST)?;
    let rest = url[host + TWITCH_HOST.len()..].strip_prefix('/')?;
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    ChannelName::parse(&rest[..end]).ok()
}

/// First YouTube pattern that yields an id wins.
fn youtube_id(url: &str) -> Option<VideoId> {
    // Short links must sit at the start of the input; the other shapes may
    // appear anywhere in it.
    for prefix in ["https://youtu.be/", "https://www.youtu.be/"] {
        if let Some(rest) = url.strip_prefix(prefix) {
            if let Some(id) = take_id(rest) {
                return Some(id);
            }
        }
    }

    for marker in [
        "?v=",
        "&v=",
        "youtube.com/embed/",
        "youtube.com/shorts/",
        "youtube.com/live/",
    ] {
        if let Some(id) = id_after(url, marker) {
            return Some(id);
        }
    }

    None
}

/// Scan every occurrence of `marker` for a trailing id.
fn id_after(url: &str, marker: &str) -> Option<VideoId> {
    let mut search = url;
    while let Some(pos) = search.find(marker) {
        let rest = &search[pos + marker.len()..];
        if let Some(id) = take_id(rest) {
            return Some(id);
        }
        search = rest;
    }
    None
}

/// Take exactly [`YOUTUBE_ID_LEN`] id characters from the front of `rest`.
/// Anything after them (`&t=10`, a path, ...) is ignored.
fn take_id(rest: &str) -> Option<VideoId> {
    let bytes = rest.as_bytes();
    if bytes.len() >= YOUTUBE_ID_LEN && bytes[..YOUTUBE_ID_LEN].iter().copied().all(is_id_byte) {
        VideoId::parse(&rest[..YOUTUBE_ID_LEN]).ok()
    } else {
        None
    }
}
