//! Command-line interface definitions and one-shot command handlers.

use anyhow::{Result, bail};
use clap::builder::RangedU64ValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;

use crate::app::keymap::{MenuAction, MenuToken};
use crate::app::{AppState, Settings, Theme};
use crate::search;
use crate::term::Console;
use crate::ui;

/// codexglyph-manual - browse and search the CodexGlyph manual in the terminal.
#[derive(Parser, Debug)]
#[command(name = "codexglyph-manual")]
#[command(
    version,
    about,
    long_about = r#"Browse and search the CodexGlyph manual in the terminal.

Without a command the interactive viewer starts: pick a part from the table
of contents, press S to search, X to leave. Ctrl-C exits at any prompt.

Examples:
    codexglyph-manual
    codexglyph-manual list
    codexglyph-manual show 3
    codexglyph-manual search tilde rule
"#
)]
pub struct Cli {
    /// Colour theme (mocha/dark/plain) [default: mocha].
    #[arg(
        long,
        global = true,
        value_enum,
        env = "CODEXGLYPH_THEME",
        long_help = "Colour theme for the viewer chrome (default: mocha). Section text is never\n\
coloured.\n\n\
NO_COLOR in the environment, or stdout not being a terminal, forces plain."
    )]
    pub theme: Option<ThemeName>,

    /// Search results listed per query.
    #[arg(
        long,
        global = true,
        default_value_t = 20,
        value_name = "N",
        env = "CODEXGLYPH_RESULT_LIMIT",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub result_limit: usize,

    /// Characters kept from each matching line.
    #[arg(
        long,
        global = true,
        default_value_t = 100,
        value_name = "N",
        env = "CODEXGLYPH_EXCERPT_WIDTH",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub excerpt_width: usize,

    /// Never clear the screen between views.
    #[arg(long)]
    pub no_clear: bool,

    /// Skip the startup banner.
    #[arg(long)]
    pub no_splash: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List menu tokens, section keys and titles.
    List,
    /// Print one section, by menu token (e.g. 3, Q) or section key (e.g. part3).
    Show {
        #[arg(value_name = "TOKEN|KEY")]
        section: String,
    },
    /// Print every line containing QUERY, ignoring case.
    Search {
        /// Words are joined with single spaces.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    #[default]
    Mocha,
    Dark,
    Plain,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            result_limit: self.result_limit,
            excerpt_width: self.excerpt_width,
            show_splash: !self.no_splash,
        }
    }

    /// Theme to use, honouring NO_COLOR and non-terminal stdout.
    pub fn theme(&self) -> Theme {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        resolve_theme(self.theme, no_color, std::io::stdout().is_terminal())
    }

    /// Log level for this crate when RUST_LOG is unset.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Pick the palette for `requested`. Colour is off under NO_COLOR or when
/// stdout is not a terminal; overriding an explicit request is logged.
pub fn resolve_theme(requested: Option<ThemeName>, no_color: bool, stdout_is_tty: bool) -> Theme {
    if no_color || !stdout_is_tty {
        if let Some(name) = requested.filter(|n| *n != ThemeName::Plain) {
            let cause = if no_color { "NO_COLOR is set" } else { "stdout is not a terminal" };
            tracing::warn!(theme = ?name, cause, "requested theme ignored, using plain");
        }
        return Theme::plain();
    }
    match requested.unwrap_or_default() {
        ThemeName::Mocha => Theme::mocha(),
        ThemeName::Dark => Theme::dark(),
        ThemeName::Plain => Theme::plain(),
    }
}

/// Section key for a `show` argument: a menu token first, then a raw key.
pub fn resolve_section(app: &AppState, arg: &str) -> Option<String> {
    match app.menu.resolve(&MenuToken::normalize(arg)) {
        Some(MenuAction::Show(key)) => Some(key.to_string()),
        _ => {
            let key = arg.trim();
            app.store.contains(key).then(|| key.to_string())
        }
    }
}

/// Answer one non-interactive command.
pub fn run_command(out: &mut dyn Console, app: &AppState, command: &Command) -> Result<()> {
    match command {
        Command::List => {
            for line in ui::section_listing(app)? {
                out.write_line(&line)?;
            }
        }
        Command::Show { section } => {
            let Some(key) = resolve_section(app, section) else {
                bail!("no section named `{section}` (see `list`)");
            };
            out.write_line(app.store.get(&key)?)?;
        }
        Command::Search { query } => {
            let query = query.join(" ");
            let query = query.trim();
            if query.is_empty() {
                tracing::debug!("empty query, nothing to search");
                return Ok(());
            }
            let results = search::search(app.store, query);
            tracing::debug!(query, hits = results.len(), "search finished");
            for line in ui::search_report(&results, query, &app.settings, &app.theme) {
                out.write_line(&line)?;
            }
        }
    }
    Ok(())
}
