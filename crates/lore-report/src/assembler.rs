//! Report assembly.
//!
//! Assembly is pure interpolation: field values are inserted as-is, without
//! validation or branching on their content. The same inputs always render
//! the same bytes.

use std::fmt;

use chrono::NaiveDate;
use lore_core::{DEFAULT_ATTRIBUTION, LearnerProfile, ResearchBundle, Topic};
use serde::{Deserialize, Serialize};

/// Date format used in the report header, e.g. `March 04, 2025`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

pub const FEEDBACK_HEADING: &str = "## User Feedback & Additions";

/// A rendered learning report (Markdown).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report(String);

impl Report {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A copy of this report with the learner's additions appended under
    /// [`FEEDBACK_HEADING`]. Blank text yields `None`.
    ///
    /// The receiver is left untouched, so refining the stored report always
    /// appends exactly one feedback section.
    #[must_use]
    pub fn refine(&self, additions: &str) -> Option<Self> {
        if additions.trim().is_empty() {
            return None;
        }
        Some(Self(format!("{}\n\n{FEEDBACK_HEADING}\n{additions}", self.0)))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Report {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renders reports with a fixed section order.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    attribution: String,
}

impl Default for ReportAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTION)
    }
}

impl ReportAssembler {
    pub fn new(attribution: impl Into<String>) -> Self {
        Self {
            attribution: attribution.into(),
        }
    }

    /// Render the report for `topic` dated `date`.
    #[must_use]
    pub fn assemble(
        &self,
        topic: &Topic,
        profile: &LearnerProfile,
        research: &ResearchBundle,
        date: NaiveDate,
    ) -> Report {
        let date = date.format(DATE_FORMAT);
        let web = &research.web;
        let video = &research.video;
        let academic = &research.academic;

        Report(format!(
            "# Learning Report: {topic}
**Date:** {date}

## Clarifying Focus
{clarifying}

## Learning Objectives
{goal}

## Learner Profile
- **Knowledge Level:** {level}
- **Interest Focus:** {interest}
- **Preferred Format:** {format}

## Web Content Summary
{web_content}

**Citation:** [{web_source}]({web_source})

## Video Resource
{video_content}

**Watch:** [{video_source}]({video_source})

## Academic Research
{academic_content}

**Read more:** [{academic_source}]({academic_source})

## Visual Concept Flow
A diagram representing the learning flow for this topic.

## Recommended Next Steps
1. Explore beginner-friendly resources on \"{topic}\"
2. Apply concepts through practical exercises
3. Dive deeper into specific areas of interest

*{attribution}*
",
            clarifying = profile.clarifying_question,
            goal = profile.learning_goal,
            level = profile.knowledge_level,
            interest = profile.interest_focus,
            format = profile.preferred_format,
            web_content = web.content,
            web_source = web.source,
            video_content = video.content,
            video_source = video.source,
            academic_content = academic.content,
            academic_source = academic.source,
            attribution = self.attribution,
        ))
    }

    /// Render the report dated today (local time).
    #[must_use]
    pub fn assemble_today(
        &self,
        topic: &Topic,
        profile: &LearnerProfile,
        research: &ResearchBundle,
    ) -> Report {
        self.assemble(topic, profile, research, chrono::Local::now().date_naive())
    }
}

/// Short per-source summary shown before the full report.
///
/// Unlike the report body, the preview skips the watch link when no video
/// was found.
#[must_use]
pub fn preview(research: &ResearchBundle) -> String {
    let mut out = format!(
        "### Web Summary\n\n{}\n\n[Read full article]({})\n\n### Video Summary\n\n{}\n",
        research.web.content, research.web.source, research.video.content,
    );
    if research.video.has_source() {
        out.push_str(&format!("\n#### Watch the Video:\n{}\n", research.video.source));
    }
    out.push_str(&format!(
        "\n### Academic Summary\n\n{}\n\n[Read More on Google Scholar]({})\n",
        research.academic.content, research.academic.source,
    ));
    out
}
