//! Conversational AI (Cohere chat) configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://api.cohere.com/v1/chat")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CohereConfig {
    /// Cohere API key.
    #[serde(default)]
    pub api_key: String,

    /// Chat endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name. Empty means the service default.
    #[serde(default)]
    pub model: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            model: String::new(),
        }
    }
}

impl CohereConfig {
    /// Check if the Cohere config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
