use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, std::io::stderr().is_terminal()));
}

fn resolve(flags: &GlobalFlags, is_tty: bool) -> UiPrefs {
    let table_color = match flags.color {
        ColorMode::Always => flags.format == OutputFormat::Text,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty
                && flags.format == OutputFormat::Text
                && !flags.quiet
                && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // The spinner draws on stderr, so JSON on stdout stays clean either way.
    let progress = match flags.progress {
        ProgressMode::On => !flags.quiet,
        ProgressMode::Off => false,
        ProgressMode::Auto => is_tty && !flags.quiet && flags.format == OutputFormat::Text,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            quiet,
            verbose: false,
            config: None,
            env_file: None,
            color: ColorMode::Always,
            progress: ProgressMode::Auto,
        }
    }

    #[test]
    fn json_never_colors_tables() {
        let prefs = resolve(&flags(OutputFormat::Json, false), true);
        assert!(!prefs.table_color);
        assert!(!prefs.progress);
    }

    #[test]
    fn quiet_disables_spinner() {
        let prefs = resolve(&flags(OutputFormat::Text, true), true);
        assert!(!prefs.progress);
        assert!(prefs.table_color);
    }

    #[test]
    fn no_tty_disables_auto_spinner() {
        let prefs = resolve(&flags(OutputFormat::Text, false), false);
        assert!(!prefs.progress);
    }
}
