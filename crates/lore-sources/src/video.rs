//! Video search fetcher (YouTube Data API v3).
//!
//! Only the single most relevant embeddable video is requested. The search
//! API exposes no transcript, so the content is a one-sentence description
//! built from the video title.

use lore_core::{SourceKind, SourceResult, Topic};
use serde::Deserialize;

use crate::{SourceClient, error::SourceError, http::check_response, log_fallback};

pub const NO_VIDEOS: &str = "No relevant videos found.";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

/// Sentence describing a video by its title.
#[must_use]
pub fn describe(title: &str, topic: &Topic) -> String {
    format!(
        "This video titled '{title}' provides an introduction to {topic} using real-world examples and visuals."
    )
}

impl SourceClient {
    /// Fetch the most relevant embeddable video for `topic`.
    ///
    /// An empty result set yields [`NO_VIDEOS`] with no link. Any error
    /// yields `Error fetching video: {error}` with no link.
    pub async fn fetch_video(&self, topic: &Topic) -> SourceResult {
        match self.try_fetch_video(topic).await {
            Ok(data) => self.video_result(topic, data),
            Err(error) => {
                log_fallback(SourceKind::Video, topic, &error);
                SourceResult::unlinked(format!("Error fetching video: {error}"))
            }
        }
    }

    async fn try_fetch_video(&self, topic: &Topic) -> Result<SearchResponse, SourceError> {
        if !self.youtube.is_configured() {
            return Err(SourceError::MissingApiKey("YouTube"));
        }

        let url = format!(
            "{}?part=snippet&type=video&maxResults=1&videoEmbeddable=true&q={}&key={}",
            self.youtube.endpoint,
            urlencoding::encode(topic.as_str()),
            urlencoding::encode(&self.youtube.api_key),
        );
        tracing::debug!(source = "video", topic = %topic, "searching videos");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    fn video_result(&self, topic: &Topic, data: SearchResponse) -> SourceResult {
        let first = data
            .items
            .into_iter()
            .find_map(|item| item.id.video_id.map(|id| (id, item.snippet.title)));

        match first {
            Some((video_id, title)) => SourceResult::new(
                describe(&decode_entities(&title), topic),
                format!("{}{video_id}", self.youtube.embed_base),
            ),
            None => SourceResult::unlinked(NO_VIDEOS),
        }
    }
}

/// Decode the HTML entities the search API leaves in snippet titles.
fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
