use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// The subject of a learning report.
///
/// Always non-empty after construction. Surrounding whitespace is dropped so
/// `" Osmosis "` and `"Osmosis"` key the same session memory entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Validate and wrap a topic string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyTopic`] if `raw` is empty or whitespace only.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyTopic);
        }
        if trimmed.len() == raw.len() {
            Ok(Self(raw))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_topics() {
        assert_eq!(Topic::new(""), Err(CoreError::EmptyTopic));
        assert_eq!(Topic::new("   \t"), Err(CoreError::EmptyTopic));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let topic = Topic::new("  Neural Networks ").unwrap();
        assert_eq!(topic.as_str(), "Neural Networks");
        assert_eq!(topic, Topic::new("Neural Networks").unwrap());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Topic = serde_json::from_str("\"Osmosis\"").unwrap();
        assert_eq!(ok.to_string(), "Osmosis");
        assert!(serde_json::from_str::<Topic>("\"  \"").is_err());
    }
}
