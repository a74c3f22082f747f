//! Academic publication fetcher (Semantic Scholar paper search).

use lore_core::{SourceKind, SourceResult, Topic};
use serde::Deserialize;

use crate::{SourceClient, error::SourceError, http::check_response, log_fallback};

pub const NO_EXTRACTS: &str = "No academic extracts found.";
pub const NO_ABSTRACT: &str = "No abstract available.";

#[derive(Debug, Deserialize)]
struct PaperSearchResponse {
    #[serde(default)]
    data: Vec<Paper>,
}

#[derive(Debug, Deserialize)]
struct Paper {
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    url: Option<String>,
}

impl SourceClient {
    /// Fetch the top publication matching `topic`.
    ///
    /// Content is `{title} — {abstract}`, link is the paper page. On any
    /// failure, including an empty result set, returns [`NO_EXTRACTS`] and the
    /// fallback search link.
    pub async fn fetch_academic(&self, topic: &Topic) -> SourceResult {
        match self.try_fetch_academic(topic).await {
            Ok(result) => result,
            Err(error) => {
                log_fallback(SourceKind::Academic, topic, &error);
                SourceResult::new(NO_EXTRACTS, self.fallback_search_url(topic))
            }
        }
    }

    /// Search link used when no paper page is available.
    #[must_use]
    pub fn fallback_search_url(&self, topic: &Topic) -> String {
        format!(
            "{}{}",
            self.scholar.fallback_search_url,
            urlencoding::encode(topic.as_str())
        )
    }

    async fn try_fetch_academic(&self, topic: &Topic) -> Result<SourceResult, SourceError> {
        let url = format!(
            "{}?query={}&limit=1&fields=title,abstract,url",
            self.scholar.endpoint,
            urlencoding::encode(topic.as_str()),
        );
        tracing::debug!(source = "academic", topic = %topic, "searching publications");

        let mut request = self.http.get(&url);
        if self.scholar.has_api_key() {
            request = request.header("x-api-key", &self.scholar.api_key);
        }

        let resp = check_response(request.send().await?).await?;
        let data: PaperSearchResponse = resp.json().await?;
        self.academic_result(topic, data)
    }

    fn academic_result(
        &self,
        topic: &Topic,
        data: PaperSearchResponse,
    ) -> Result<SourceResult, SourceError> {
        let paper = data
            .data
            .into_iter()
            .next()
            .ok_or_else(|| SourceError::NotFound(topic.to_string()))?;

        let abstract_text = paper
            .abstract_text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_ABSTRACT.to_string());
        let link = paper
            .url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.fallback_search_url(topic));

        Ok(SourceResult::new(
            format!("{} — {abstract_text}", paper.title),
            link,
        ))
    }
}
