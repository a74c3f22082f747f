//! Encyclopedia (MediaWiki) source configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://en.wikipedia.org/w/api.php")
}

const fn default_sentences() -> u32 {
    10
}

fn default_fallback_url() -> String {
    String::from("https://en.wikipedia.org/")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WikipediaConfig {
    /// MediaWiki action API endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum number of summary sentences requested.
    #[serde(default = "default_sentences")]
    pub sentences: u32,

    /// Link used as the citation when no page is found.
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            sentences: default_sentences(),
            fallback_url: default_fallback_url(),
        }
    }
}
