//! Video search (YouTube Data API v3) configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://www.googleapis.com/youtube/v3/search")
}

fn default_embed_base() -> String {
    String::from("https://www.youtube.com/embed/")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YouTubeConfig {
    /// Data API key.
    #[serde(default)]
    pub api_key: String,

    /// Search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Prefix joined with the video id to build an embeddable URL.
    #[serde(default = "default_embed_base")]
    pub embed_base: String,
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            embed_base: default_embed_base(),
        }
    }
}

impl YouTubeConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
