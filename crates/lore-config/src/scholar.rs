//! Academic search configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api.semanticscholar.org/graph/v1/paper/search")
}

fn default_fallback_search_url() -> String {
    String::from("https://scholar.google.com/scholar?q=")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScholarConfig {
    /// Paper search endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Optional key sent as `x-api-key`; anonymous access is rate limited.
    #[serde(default)]
    pub api_key: String,

    /// Search URL prefix; the url-encoded topic is appended.
    #[serde(default = "default_fallback_search_url")]
    pub fallback_search_url: String,
}

impl Default for ScholarConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            fallback_search_url: default_fallback_search_url(),
        }
    }
}

impl ScholarConfig {
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
