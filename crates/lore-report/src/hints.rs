//! Study suggestions shown after a report, keyed by preferred format.

use lore_core::PreferredFormat;

pub const HANDS_ON_HINT: &str =
    "🧪 Try building a mini project or solving challenges related to this topic!";
pub const TEXT_HINT: &str =
    "📚 Consider exploring tutorials, books, or blog posts for deeper reading.";

/// Suggestion for `format`. Video learners already get a video in the report.
#[must_use]
pub const fn format_hint(format: PreferredFormat) -> Option<&'static str> {
    match format {
        PreferredFormat::HandsOn => Some(HANDS_ON_HINT),
        PreferredFormat::Text => Some(TEXT_HINT),
        PreferredFormat::Video => None,
    }
}
