use std::path::PathBuf;

use anyhow::Context;
use lore_core::{LearnerProfile, ResearchBundle, Topic};
use lore_report::{Report, concept_flow, concept_flow_svg, export_report, format_hint, preview};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat, ReportArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Everything one report request produced.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub topic: Topic,
    pub profile: LearnerProfile,
    pub research: ResearchBundle,
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refined: Option<Report>,
    pub hint: Option<&'static str>,
    pub concept_flow: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}

/// Handle `lore report`.
///
/// The report is always printed. A failed `--save` or diagram write is
/// returned afterwards, so the exit status still reflects it.
pub async fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (response, write_error) = build(args, ctx).await?;

    match flags.format {
        OutputFormat::Text => print!("{}", render_text(&response)),
        format => output(&response, format)?,
    }

    write_error.map_or(Ok(()), Err)
}

/// Compile the report and perform the requested file writes.
///
/// The first write failure is handed back next to the response instead of
/// discarding the compiled report.
pub async fn build(
    args: &ReportArgs,
    ctx: &AppContext,
) -> anyhow::Result<(ReportResponse, Option<anyhow::Error>)> {
    let topic = Topic::new(args.topic.as_str())?;
    let profile = args.profile.to_profile();

    let (research, report) = compile(ctx, &topic, &profile).await;
    let refined = args.refine.as_deref().and_then(|text| report.refine(text));

    let mut write_error = None;

    let saved_path = if args.save {
        let dir = ctx.output_dir(args.out_dir.as_deref());
        match export_report(&dir, &topic, &report) {
            Ok(path) => Some(path),
            Err(error) => {
                write_error = Some(anyhow::Error::new(error));
                None
            }
        }
    } else {
        None
    };
    let save_error = write_error.as_ref().map(|error| format!("{error:#}"));

    let diagram = args.diagram_svg.as_ref().map(|path| {
        std::fs::write(path, concept_flow_svg(&topic))
            .with_context(|| format!("failed to write concept flow diagram to {path}"))
    });
    if let Some(Err(error)) = diagram {
        write_error.get_or_insert(error);
    }

    let response = ReportResponse {
        hint: format_hint(profile.preferred_format),
        concept_flow: concept_flow(&topic),
        topic,
        profile,
        research,
        report,
        refined,
        saved_path,
        save_error,
    };

    Ok((response, write_error))
}

/// Gather research for `topic` under a spinner and assemble today's report.
pub async fn compile(
    ctx: &AppContext,
    topic: &Topic,
    profile: &LearnerProfile,
) -> (ResearchBundle, Report) {
    let progress = Progress::spinner("Compiling your personalized report...");
    let research = ctx
        .sources
        .gather_with(topic, |kind| {
            progress.set_message(&format!("Fetching {kind} content for {topic}..."));
        })
        .await;
    progress.finish_clear();

    let report = ctx.assembler.assemble_today(topic, profile, &research);
    (research, report)
}

/// Markdown shown on a terminal: preview, report, diagram, then hint.
#[must_use]
pub fn render_text(response: &ReportResponse) -> String {
    let mut out = format!(
        "## Learning Content Preview\n\n{}\n---\n\n{}",
        preview(&response.research),
        response.report,
    );

    if let Some(refined) = &response.refined {
        out.push_str("\n---\n\n## Refined Report\n\n");
        out.push_str(refined.as_str());
        out.push('\n');
    }

    out.push_str("\n## Concept Flow\n\n");
    out.push_str(&response.concept_flow);

    if let Some(hint) = response.hint {
        out.push('\n');
        out.push_str(hint);
        out.push('\n');
    }

    if let Some(path) = &response.saved_path {
        out.push_str(&format!("\nSaved report to {}\n", path.display()));
    }

    out
}
