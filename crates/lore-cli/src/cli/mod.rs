use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::{AskArgs, Commands, ProfileArgs, ReportArgs, SessionArgs};

/// Top-level CLI parser for the `lore` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lore",
    version,
    about = "lore - personalised learning reports from the web, video and academic sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra TOML config file layered above the discovered ones
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Dotenv file to load instead of ./.env
    #[arg(long, global = true)]
    pub env_file: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress spinner: auto, on, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
            env_file: self.env_file.clone(),
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lore_core::{KnowledgeLevel, PreferredFormat};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["lore", "--format", "json", "--verbose", "config"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lore", "config", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lore", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn report_parses_profile_flags() {
        let cli = Cli::try_parse_from([
            "lore",
            "report",
            "Neural Networks",
            "--goal",
            "Build a classifier",
            "--level",
            "advanced",
            "--prefer",
            "Hands-on",
            "--save",
        ])
        .expect("cli should parse");

        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.topic, "Neural Networks");
        assert_eq!(args.profile.goal.as_deref(), Some("Build a classifier"));
        assert_eq!(args.profile.level, KnowledgeLevel::Advanced);
        assert_eq!(args.profile.prefer, PreferredFormat::HandsOn);
        assert!(args.save);
        assert!(args.refine.is_none());
    }

    #[test]
    fn report_profile_defaults() {
        let cli = Cli::try_parse_from(["lore", "report", "Osmosis"]).expect("cli should parse");
        let Commands::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.profile.level, KnowledgeLevel::Beginner);
        assert_eq!(args.profile.prefer, PreferredFormat::Text);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let parsed = Cli::try_parse_from(["lore", "report", "Osmosis", "--level", "expert"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn ask_requires_topic() {
        assert!(Cli::try_parse_from(["lore", "ask", "What is osmosis?"]).is_err());
        let cli = Cli::try_parse_from(["lore", "ask", "What is osmosis?", "--topic", "Osmosis"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Ask(_)));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["lore", "--config", "/tmp/lore.toml", "config"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some("/tmp/lore.toml"));
    }
}
