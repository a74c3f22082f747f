use lore_core::Topic;
use serde::Serialize;

use crate::cli::{AskArgs, GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub topic: Topic,
    pub question: String,
    pub answer: String,
}

/// Handle `lore ask`.
pub async fn handle(args: &AskArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = Topic::new(args.topic.as_str())?;

    let progress = Progress::spinner("Asking the tutor...");
    let answer = ctx.tutor.ask(&args.question, &topic).await;
    progress.finish_clear();

    match flags.format {
        OutputFormat::Text => {
            println!("{answer}");
            Ok(())
        }
        format => output(
            &AskResponse {
                topic,
                question: args.question.clone(),
                answer,
            },
            format,
        ),
    }
}
