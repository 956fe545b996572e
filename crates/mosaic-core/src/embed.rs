//! Embed URL construction for the supported providers

use crate::{
    types::{ChannelName, MediaSource, Provider, RegistryConfig, VideoId},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Iframe permissions requested for YouTube embeds
pub const YOUTUBE_IFRAME_ALLOW: &str = "autoplay; encrypted-media; picture-in-picture";

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const TWITCH_PLAYER_BASE: &str = "https://player.twitch.tv/";

/// What a rendering surface needs to materialize one embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedSpec {
    pub provider: Provider,
    pub url: Url,
}

impl EmbedSpec {
    /// Build the embed spec for a resolved media source.
    pub fn for_source(source: &MediaSource, config: &RegistryConfig) -> Result<Self> {
        match source {
            MediaSource::YouTube { id } => Ok(Self {
                provider: Provider::YouTube,
                url: youtube_embed_url(id, config)?,
            }),
            MediaSource::Twitch { channel } => Ok(Self {
                provider: Provider::Twitch,
                url: twitch_embed_url(channel, &config.parent_host)?,
            }),
        }
    }

    /// Permission string for the embed's iframe, if the provider needs one.
    pub fn iframe_allow(&self) -> Option<&'static str> {
        match self.provider {
            Provider::YouTube => Some(YOUTUBE_IFRAME_ALLOW),
            Provider::Twitch => None,
        }
    }
}

/// YouTube iframe embed URL with the JS API enabled.
pub fn youtube_embed_url(id: &VideoId, config: &RegistryConfig) -> Result<Url> {
    let mut url = Url::parse(&format!("{YOUTUBE_EMBED_BASE}{id}"))
        .map_err(|e| Error::Internal(format!("embed url: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("enablejsapi", "1");
        if config.autoplay {
            pairs.append_pair("autoplay", "1");
        }
        if config.mute {
            pairs.append_pair("mute", "1");
        }
    }
    Ok(url)
}

/// Twitch player embed URL. Twitch requires the embedding page's hostname
/// as the `parent` parameter.
pub fn twitch_embed_url(channel: &ChannelName, parent_host: &str) -> Result<Url> {
    let mut url = Url::parse(TWITCH_PLAYER_BASE)
        .map_err(|e| Error::Internal(format!("embed url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("channel", channel.as_str())
        .append_pair("parent", parent_host);
    Ok(url)
}
