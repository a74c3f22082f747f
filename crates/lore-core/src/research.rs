use serde::{Deserialize, Serialize};

use crate::enums::SourceKind;

/// What one fetcher found for a topic.
///
/// `source` is a URL, or empty when no resource was found. Fetchers always
/// produce one of these, even on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceResult {
    pub content: String,
    pub source: String,
}

impl SourceResult {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }

    /// A result with placeholder content and no link.
    pub fn unlinked(content: impl Into<String>) -> Self {
        Self::new(content, String::new())
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.source.is_empty()
    }
}

/// The three fetcher results gathered for a single report request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchBundle {
    pub web: SourceResult,
    pub video: SourceResult,
    pub academic: SourceResult,
}

impl ResearchBundle {
    #[must_use]
    pub const fn get(&self, kind: SourceKind) -> &SourceResult {
        match kind {
            SourceKind::Web => &self.web,
            SourceKind::Video => &self.video,
            SourceKind::Academic => &self.academic,
        }
    }

    pub fn get_mut(&mut self, kind: SourceKind) -> &mut SourceResult {
        match kind {
            SourceKind::Web => &mut self.web,
            SourceKind::Video => &mut self.video,
            SourceKind::Academic => &mut self.academic,
        }
    }

    /// Iterate results in [`SourceKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SourceKind, &SourceResult)> {
        SourceKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
