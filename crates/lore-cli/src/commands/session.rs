use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::str::FromStr;

use lore_core::{KnowledgeLevel, PreferredFormat, Topic};
use lore_report::{SessionMemory, concept_flow, export_report, format_hint, preview};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::{GlobalFlags, ProfileArgs, SessionArgs};
use crate::commands::report::compile;
use crate::context::AppContext;
use crate::output::table::{TableOptions, render_entity_table};
use crate::ui;

const HELP: &str = "\
Commands:
  topic <TOPIC>        set the current topic
  goal <TEXT>          what you want to learn or achieve
  interest <TEXT>      specific areas of interest
  level <LEVEL>        Beginner, Intermediate or Advanced
  prefer <FORMAT>      Text, Video or Hands-on
  clarify <TEXT>       the part of the topic you are most curious about
  report               compile a report for the current topic
  refine <TEXT>        show the current report with your additions
  ask <QUESTION>       ask the AI tutor about the current topic
  history              list the reports of this session
  show [TOPIC]         print a stored report
  save [TOPIC]         write a stored report to disk
  help                 show this list
  quit                 end the session";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Topic(String),
    Goal(String),
    Interest(String),
    Level(KnowledgeLevel),
    Prefer(PreferredFormat),
    Clarify(String),
    Report,
    Refine(String),
    Ask(String),
    History,
    Show(Option<String>),
    Save(Option<String>),
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let verb = verb.to_ascii_lowercase();

        let required = |name: &str| {
            if rest.is_empty() {
                Err(format!("`{name}` needs a value"))
            } else {
                Ok(rest.to_string())
            }
        };
        let optional = || (!rest.is_empty()).then(|| rest.to_string());

        match verb.as_str() {
            "topic" => required("topic").map(Self::Topic),
            "goal" => Ok(Self::Goal(rest.to_string())),
            "interest" => Ok(Self::Interest(rest.to_string())),
            "level" => rest.parse().map(Self::Level).map_err(|error| format!("{error}")),
            "prefer" => rest.parse().map(Self::Prefer).map_err(|error| format!("{error}")),
            "clarify" => Ok(Self::Clarify(rest.to_string())),
            "report" => Ok(Self::Report),
            "refine" => required("refine").map(Self::Refine),
            "ask" => required("ask").map(Self::Ask),
            "history" => Ok(Self::History),
            "show" => Ok(Self::Show(optional())),
            "save" => Ok(Self::Save(optional())),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command `{other}`; type `help` for the list")),
        }
    }
}

/// Mutable state of one interactive session.
struct Session<'a> {
    ctx: &'a AppContext,
    topic: Option<Topic>,
    profile: ProfileArgs,
    memory: SessionMemory,
    out_dir: PathBuf,
}

/// Handle `lore session`.
pub async fn handle(args: &SessionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let topic = args.topic.as_deref().map(Topic::new).transpose()?;
    let session = Session {
        ctx,
        topic,
        profile: args.profile.clone(),
        memory: SessionMemory::new(),
        out_dir: ctx.output_dir(args.out_dir.as_deref()),
    };

    let prompt = !flags.quiet && std::io::stdin().is_terminal();
    if prompt {
        println!("Interactive learning session. Type `help` for commands.");
    }

    let input = BufReader::new(tokio::io::stdin());
    run(session, input, std::io::stdout(), prompt).await
}

/// Read commands from `input` until `quit` or end of input.
async fn run<R, W>(mut session: Session<'_>, input: R, mut out: W, prompt: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "lore> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Quit) => break,
            Ok(command) => session.apply(command, &mut out).await?,
            Err(message) => writeln!(out, "{message}")?,
        }
    }

    tracing::debug!(reports = session.memory.len(), "session ended");
    Ok(())
}

impl Session<'_> {
    async fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> anyhow::Result<()> {
        match command {
            SessionCommand::Topic(value) => match Topic::new(value) {
                Ok(topic) => {
                    writeln!(out, "Topic set to {topic}.")?;
                    self.topic = Some(topic);
                }
                Err(error) => writeln!(out, "{error}")?,
            },
            SessionCommand::Goal(value) => self.profile.goal = Some(value),
            SessionCommand::Interest(value) => self.profile.interest = Some(value),
            SessionCommand::Level(level) => self.profile.level = level,
            SessionCommand::Prefer(format) => self.profile.prefer = format,
            SessionCommand::Clarify(value) => self.profile.clarify = Some(value),
            SessionCommand::Report => self.report(out).await?,
            SessionCommand::Refine(text) => self.refine(&text, out)?,
            SessionCommand::Ask(question) => {
                let Some(topic) = &self.topic else {
                    return no_topic(out);
                };
                let answer = self.ctx.tutor.ask(&question, topic).await;
                writeln!(out, "{answer}")?;
            }
            SessionCommand::History => self.history(out)?,
            SessionCommand::Show(name) => {
                if let Some((_, report)) = self.stored(name.as_deref(), out)? {
                    writeln!(out, "{report}")?;
                }
            }
            SessionCommand::Save(name) => {
                if let Some((topic, report)) = self.stored(name.as_deref(), out)? {
                    match export_report(&self.out_dir, &topic, &report) {
                        Ok(path) => writeln!(out, "Saved report to {}", path.display())?,
                        Err(error) => {
                            let error = anyhow::Error::new(error);
                            tracing::warn!(%topic, "{error:#}");
                            writeln!(out, "Could not save report: {error:#}")?;
                        }
                    }
                }
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    async fn report<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let Some(topic) = self.topic.clone() else {
            return no_topic(out);
        };
        let profile = self.profile.to_profile();

        let (research, report) = compile(self.ctx, &topic, &profile).await;

        writeln!(out, "## Learning Content Preview\n\n{}\n---\n", preview(&research))?;
        writeln!(out, "{report}")?;
        writeln!(out, "## Concept Flow\n\n{}", concept_flow(&topic))?;
        if let Some(hint) = format_hint(profile.preferred_format) {
            writeln!(out, "{hint}")?;
        }

        if self.memory.put(topic.clone(), report).is_some() {
            tracing::debug!(%topic, "replaced earlier report");
        }
        Ok(())
    }

    fn refine<W: Write>(&self, text: &str, out: &mut W) -> anyhow::Result<()> {
        let Some(topic) = &self.topic else {
            return no_topic(out);
        };
        let Some(report) = self.memory.get(topic) else {
            writeln!(out, "No report for {topic} yet. Run `report` first.")?;
            return Ok(());
        };

        match report.refine(text) {
            Some(refined) => writeln!(out, "{refined}")?,
            None => writeln!(out, "Nothing to add.")?,
        }
        Ok(())
    }

    fn history<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.memory.is_empty() {
            writeln!(out, "No reports yet.")?;
            return Ok(());
        }

        let rows = self
            .memory
            .get_all()
            .into_iter()
            .map(|(topic, report)| {
                vec![
                    topic.to_string(),
                    report.as_str().lines().count().to_string(),
                ]
            })
            .collect::<Vec<_>>();

        let prefs = ui::prefs();
        let table = render_entity_table(
            &["topic", "lines"],
            &rows,
            TableOptions {
                max_width: prefs.term_width,
                color: false,
            },
        );
        writeln!(out, "{table}")?;
        Ok(())
    }

    /// Look up a stored report by name, or for the current topic.
    fn stored<W: Write>(
        &self,
        name: Option<&str>,
        out: &mut W,
    ) -> anyhow::Result<Option<(Topic, lore_report::Report)>> {
        let topic = match name {
            Some(name) => Topic::new(name)?,
            None => match &self.topic {
                Some(topic) => topic.clone(),
                None => {
                    no_topic(out)?;
                    return Ok(None);
                }
            },
        };

        if let Some(report) = self.memory.get(&topic) {
            return Ok(Some((topic, report.clone())));
        }
        writeln!(out, "No report for {topic} yet. Run `report` first.")?;
        Ok(None)
    }
}

fn no_topic<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Set a topic first, e.g. `topic Neural Networks`.")?;
    Ok(())
}
