use clap::{Args, Subcommand};
use lore_core::{KnowledgeLevel, LearnerProfile, PreferredFormat};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a learning report for a topic.
    Report(ReportArgs),
    /// Ask the AI tutor a question about a topic.
    Ask(AskArgs),
    /// Interactive session with report history.
    Session(SessionArgs),
    /// Show the effective configuration (secrets masked).
    Config,
}

/// Learner profile answers shared by `report` and `session`.
#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    /// What you want to learn or achieve.
    #[arg(long)]
    pub goal: Option<String>,
    /// Specific areas of interest.
    #[arg(long)]
    pub interest: Option<String>,
    /// Your knowledge level: Beginner, Intermediate, Advanced.
    #[arg(long, default_value = "Beginner")]
    pub level: KnowledgeLevel,
    /// Preferred format: Text, Video, Hands-on.
    #[arg(long, default_value = "Text")]
    pub prefer: PreferredFormat,
    /// The part of the topic you are most curious about.
    #[arg(long)]
    pub clarify: Option<String>,
}

impl ProfileArgs {
    #[must_use]
    pub fn to_profile(&self) -> LearnerProfile {
        LearnerProfile::from_inputs(
            self.goal.as_deref(),
            self.interest.as_deref(),
            self.level,
            self.prefer,
            self.clarify.as_deref(),
        )
    }
}

/// Arguments for `lore report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Learning topic, e.g. "Neural Networks".
    pub topic: String,
    #[command(flatten)]
    pub profile: ProfileArgs,
    /// Additions appended to the displayed report.
    #[arg(long)]
    pub refine: Option<String>,
    /// Write the report to `<topic>_learning_report.txt`.
    #[arg(long)]
    pub save: bool,
    /// Directory for saved reports (defaults to general.output_dir).
    #[arg(long)]
    pub out_dir: Option<String>,
    /// Also write the concept-flow diagram as SVG to this path.
    #[arg(long)]
    pub diagram_svg: Option<String>,
}

/// Arguments for `lore ask`.
#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question for the tutor.
    pub question: String,
    /// Topic the question is about.
    #[arg(long)]
    pub topic: String,
}

/// Arguments for `lore session`.
#[derive(Clone, Debug, Args)]
pub struct SessionArgs {
    /// Topic to start with.
    #[arg(long)]
    pub topic: Option<String>,
    #[command(flatten)]
    pub profile: ProfileArgs,
    /// Directory for saved reports (defaults to general.output_dir).
    #[arg(long)]
    pub out_dir: Option<String>,
}
