//! In-process report history for one session.

use std::collections::HashMap;

use lore_core::Topic;

use crate::assembler::Report;

/// Latest report per topic, owned by a single session.
///
/// Created empty when the session starts and dropped with it. Nothing is
/// written to disk.
#[derive(Debug, Default)]
pub struct SessionMemory {
    reports: HashMap<Topic, Report>,
}

impl SessionMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `report` for `topic`, replacing any earlier one.
    ///
    /// Returns the replaced report, if any.
    pub fn put(&mut self, topic: Topic, report: Report) -> Option<Report> {
        tracing::debug!(topic = %topic, "storing report in session memory");
        self.reports.insert(topic, report)
    }

    #[must_use]
    pub fn get(&self, topic: &Topic) -> Option<&Report> {
        self.reports.get(topic)
    }

    /// Every stored report, sorted by topic for stable display.
    #[must_use]
    pub fn get_all(&self) -> Vec<(&Topic, &Report)> {
        let mut entries: Vec<_> = self.reports.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}
