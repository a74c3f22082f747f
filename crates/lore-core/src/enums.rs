//! Learner preference enums and the closed set of research sources.
//!
//! Display strings are the human labels that appear verbatim in reports
//! (`Hands-on`, not `hands_on`). Parsing is case-insensitive and accepts a few
//! spellings a user is likely to type on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// KnowledgeLevel
// ---------------------------------------------------------------------------

/// How much the learner already knows about the topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnowledgeLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl KnowledgeLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for KnowledgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CoreError::UnknownVariant {
                kind: "knowledge level",
                value: s.to_string(),
                expected: "Beginner, Intermediate, Advanced",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// PreferredFormat
// ---------------------------------------------------------------------------

/// The learning medium the learner prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferredFormat {
    #[default]
    Text,
    Video,
    #[serde(rename = "Hands-on")]
    HandsOn,
}

impl PreferredFormat {
    pub const ALL: [Self; 3] = [Self::Text, Self::Video, Self::HandsOn];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Video => "Video",
            Self::HandsOn => "Hands-on",
        }
    }
}

impl fmt::Display for PreferredFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferredFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "video" => Ok(Self::Video),
            "hands-on" | "hands_on" | "handson" | "hands on" => Ok(Self::HandsOn),
            _ => Err(CoreError::UnknownVariant {
                kind: "preferred format",
                value: s.to_string(),
                expected: "Text, Video, Hands-on",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// The three content domains a report draws from.
///
/// The set is closed: callers iterate [`SourceKind::ALL`] instead of
/// registering fetchers dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Web,
    Video,
    Academic,
}

impl SourceKind {
    /// Every source, in the order they are fetched and rendered.
    pub const ALL: [Self; 3] = [Self::Web, Self::Video, Self::Academic];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Video => "video",
            Self::Academic => "academic",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
