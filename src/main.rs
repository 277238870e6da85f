//! codexglyph-manual binary entry point.
//!
//! Parses the command line, sets up logging, builds the embedded manual and
//! then either answers a one-shot command or runs the interactive viewer.
//!
use clap::Parser;
use codexglyph_manual::app::{self, AppState, keymap::Menu};
use codexglyph_manual::cli::{self, Cli};
use codexglyph_manual::content::ContentStore;
use codexglyph_manual::error::{Context, Result};
use codexglyph_manual::term::{self, Terminal};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays a clean screen.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codexglyph_manual={level},warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Program entry point: run the viewer and report any top-level error to stderr.
fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_level());

    let store = ContentStore::manual().with_ctx(|| "loading embedded manual".to_string())?;
    let menu = Menu::manual();
    menu.validate(&store)
        .with_ctx(|| "checking menu against manual".to_string())?;
    let mut state = AppState::new(&store, menu, args.settings(), args.theme());

    let interactive = args.command.is_none();
    // One-shot commands keep the default Ctrl-C behaviour.
    let interrupt = if interactive {
        term::install_interrupt_flag().with_ctx(|| "installing Ctrl-C handler".to_string())?
    } else {
        Arc::default()
    };
    let mut terminal = Terminal::stdio(interactive && !args.no_clear, interrupt);
    let res = match &args.command {
        Some(command) => cli::run_command(&mut terminal, &state, command),
        None => app::run(&mut terminal, &mut state).map(|reason| {
            tracing::debug!(?reason, "session ended");
        }),
    };

    if let Err(err) = res {
        tracing::error!("{err:#}");
        eprintln!("application error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}
