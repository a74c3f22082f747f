//! The "visual concept flow": topic -> understanding -> application -> evaluation.

use std::fmt::Write as _;

use lore_core::Topic;

/// Stages every topic flows through, top to bottom.
pub const STAGES: [&str; 3] = ["Understanding", "Application", "Evaluation"];

const SVG_WIDTH: u32 = 500;
const SVG_HEIGHT: u32 = 300;

/// Plain-text rendering of the concept flow.
#[must_use]
pub fn concept_flow(topic: &Topic) -> String {
    let mut out = format!("{topic}\n");
    for stage in STAGES {
        let _ = writeln!(out, "  → {stage}");
    }
    out
}

/// SVG rendering of the concept flow on a transparent background.
///
/// Rows sit at 20/40/60/80 % of the height, topic first.
#[must_use]
pub fn concept_flow_svg(topic: &Topic) -> String {
    let center = SVG_WIDTH / 2;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{SVG_WIDTH}\" height=\"{SVG_HEIGHT}\" \
         viewBox=\"0 0 {SVG_WIDTH} {SVG_HEIGHT}\" font-family=\"sans-serif\" fill=\"black\">\n"
    );
    let _ = writeln!(
        out,
        "  <text x=\"{center}\" y=\"{}\" font-size=\"24\" text-anchor=\"middle\">{}</text>",
        SVG_HEIGHT / 5,
        escape_xml(topic.as_str()),
    );
    for (row, stage) in (2..).zip(STAGES) {
        let _ = writeln!(
            out,
            "  <text x=\"{center}\" y=\"{}\" font-size=\"20\" text-anchor=\"middle\">→ {stage}</text>",
            SVG_HEIGHT * row / 5,
        );
    }
    out.push_str("</svg>\n");
    out
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
