//! Encyclopedia summary fetcher (MediaWiki action API).
//!
//! A single request runs a full-text search for the topic, takes the best
//! hit, and returns the plain-text extract of its lead section, limited to
//! the configured number of sentences, together with the canonical page URL.

use lore_core::{SourceKind, SourceResult, Topic};
use serde::Deserialize;

use crate::{SourceClient, error::SourceError, http::check_response, log_fallback};

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryPages>,
}

#[derive(Debug, Deserialize)]
struct QueryPages {
    #[serde(default)]
    pages: Vec<WikiPage>,
}

#[derive(Debug, Deserialize)]
struct WikiPage {
    title: String,
    #[serde(default)]
    index: u32,
    #[serde(default)]
    missing: bool,
    extract: Option<String>,
    fullurl: Option<String>,
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

/// Placeholder content when no page can be used.
#[must_use]
pub fn placeholder(topic: &Topic) -> String {
    format!("No web content found for {topic}.")
}

impl SourceClient {
    /// Fetch an encyclopedia summary for `topic`.
    ///
    /// Falls back to [`placeholder`] and the configured fallback URL on any
    /// failure: not found, disambiguation, HTTP or parse errors.
    pub async fn fetch_web(&self, topic: &Topic) -> SourceResult {
        match self.try_fetch_web(topic).await {
            Ok(result) => result,
            Err(error) => {
                log_fallback(SourceKind::Web, topic, &error);
                SourceResult::new(placeholder(topic), self.wikipedia.fallback_url.clone())
            }
        }
    }

    async fn try_fetch_web(&self, topic: &Topic) -> Result<SourceResult, SourceError> {
        let url = format!(
            "{}?action=query&format=json&formatversion=2&redirects=1\
             &generator=search&gsrsearch={}&gsrlimit=1\
             &prop=extracts%7Cinfo%7Cpageprops&exintro=1&explaintext=1&exsentences={}\
             &inprop=url&ppprop=disambiguation",
            self.wikipedia.endpoint,
            urlencoding::encode(topic.as_str()),
            self.wikipedia.sentences,
        );
        tracing::debug!(source = "web", topic = %topic, "querying encyclopedia");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: QueryResponse = resp.json().await?;
        web_result(topic, data)
    }
}

fn web_result(topic: &Topic, data: QueryResponse) -> Result<SourceResult, SourceError> {
    let page = data
        .query
        .and_then(|query| query.pages.into_iter().min_by_key(|page| page.index))
        .filter(|page| !page.missing)
        .ok_or_else(|| SourceError::NotFound(topic.to_string()))?;

    if page
        .pageprops
        .as_ref()
        .is_some_and(|props| props.disambiguation.is_some())
    {
        return Err(SourceError::Disambiguation(page.title));
    }

    let summary = page
        .extract
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| SourceError::NotFound(topic.to_string()))?;

    let source = page
        .fullurl
        .ok_or_else(|| SourceError::Parse(format!("page '{}' has no URL", page.title)))?;

    Ok(SourceResult::new(summary, source))
}
