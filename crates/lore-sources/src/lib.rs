//! # lore-sources
//!
//! Content fetchers for lore learning reports. One [`SourceClient`] serves
//! the closed set of [`SourceKind`]s:
//! - Web: MediaWiki encyclopedia summary (Wikipedia by default)
//! - Video: YouTube Data API v3 search
//! - Academic: Semantic Scholar paper search
//!
//! Every public fetch returns a plain [`SourceResult`]. Failures of any kind
//! are logged and replaced by the source's placeholder text and fallback link,
//! so report generation cannot fail because a service is down.

pub mod academic;
pub mod http;
pub mod video;
pub mod web;

mod error;

pub use error::SourceError;

use std::time::Duration;

use lore_config::{LoreConfig, ScholarConfig, WikipediaConfig, YouTubeConfig};
use lore_core::{ResearchBundle, SourceKind, SourceResult, Topic};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the three content services.
pub struct SourceClient {
    http: reqwest::Client,
    wikipedia: WikipediaConfig,
    youtube: YouTubeConfig,
    scholar: ScholarConfig,
}

impl SourceClient {
    /// Build a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// fails to build (for example when no TLS backend is available).
    pub fn from_config(config: &LoreConfig) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(config.general.user_agent.clone())
            .timeout(Duration::from_secs(config.general.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            wikipedia: config.wikipedia.clone(),
            youtube: config.youtube.clone(),
            scholar: config.scholar.clone(),
        })
    }

    /// Fetch one source for `topic`. Never fails.
    pub async fn fetch(&self, kind: SourceKind, topic: &Topic) -> SourceResult {
        match kind {
            SourceKind::Web => self.fetch_web(topic).await,
            SourceKind::Video => self.fetch_video(topic).await,
            SourceKind::Academic => self.fetch_academic(topic).await,
        }
    }

    /// Fetch every source for `topic`, one after another.
    pub async fn gather(&self, topic: &Topic) -> ResearchBundle {
        self.gather_with(topic, |_| {}).await
    }

    /// Like [`SourceClient::gather`], calling `on_fetch` before each source
    /// starts so callers can report progress.
    pub async fn gather_with<F>(&self, topic: &Topic, mut on_fetch: F) -> ResearchBundle
    where
        F: FnMut(SourceKind),
    {
        let mut bundle = ResearchBundle {
            web: SourceResult::unlinked(String::new()),
            video: SourceResult::unlinked(String::new()),
            academic: SourceResult::unlinked(String::new()),
        };
        for kind in SourceKind::ALL {
            on_fetch(kind);
            *bundle.get_mut(kind) = self.fetch(kind, topic).await;
        }
        bundle
    }
}

/// Log a fetcher failure before it is replaced by a placeholder.
fn log_fallback(kind: SourceKind, topic: &Topic, error: &SourceError) {
    tracing::warn!(source = %kind, topic = %topic, %error, "source unavailable; using placeholder");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_from_default_config() {
        assert!(SourceClient::from_config(&LoreConfig::default()).is_ok());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_gather() {
        let mut config = LoreConfig::default();
        config.youtube.api_key = std::env::var("LORE_YOUTUBE__API_KEY").unwrap_or_default();
        let client = SourceClient::from_config(&config).unwrap();
        let topic = Topic::new("Osmosis").unwrap();

        let bundle = client.gather(&topic).await;
        for (kind, result) in bundle.iter() {
            println!("\n── {kind} ── {}\n{}", result.source, result.content);
        }
    }
}
