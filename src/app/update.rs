use anyhow::Result;
use std::ops::ControlFlow;
use tracing::{debug, info};

use crate::app::keymap::{MenuAction, MenuToken};
use crate::app::{AppState, ExitReason, Mode};
use crate::search;
use crate::term::{Console, Input};
use crate::ui;

/// Outcome of one transition: keep awaiting commands, or stop for a reason.
pub type Step = ControlFlow<ExitReason>;

/// Turn a read into its line, or into the reason the session has to end.
fn checkpoint(input: Input) -> ControlFlow<ExitReason, String> {
    match input {
        Input::Line(line) => ControlFlow::Continue(line),
        Input::Interrupted => ControlFlow::Break(ExitReason::Interrupted),
        Input::Closed => ControlFlow::Break(ExitReason::InputClosed),
    }
}

/// A read whose content is irrelevant; only its arrival matters.
fn acknowledged(input: Input) -> Step {
    match checkpoint(input) {
        ControlFlow::Continue(_) => ControlFlow::Continue(()),
        ControlFlow::Break(reason) => ControlFlow::Break(reason),
    }
}

/// Evaluate to the line read, or return the termination from the caller.
macro_rules! line_or_stop {
    ($read:expr) => {
        match checkpoint($read) {
            ControlFlow::Continue(line) => line,
            ControlFlow::Break(reason) => return Ok(ControlFlow::Break(reason)),
        }
    };
}

/// Run the menu loop until the exit command, an interrupt or end of input.
///
/// Termination output is produced here and nowhere else.
pub fn run_app(out: &mut dyn Console, app: &mut AppState) -> Result<ExitReason> {
    info!(sections = app.store.len(), "viewer started");
    let mut flow = if app.settings.show_splash {
        splash(out, app)?
    } else {
        ControlFlow::Continue(())
    };
    let reason = loop {
        match flow {
            ControlFlow::Break(reason) => break reason,
            ControlFlow::Continue(()) => flow = step(out, app)?,
        }
    };
    terminate(out, app, reason)?;
    Ok(reason)
}

fn splash(out: &mut dyn Console, app: &AppState) -> Result<Step> {
    out.clear()?;
    ui::render_splash(out, &app.menu, &app.theme)?;
    Ok(acknowledged(out.read_line(ui::BEGIN_PROMPT)?))
}

/// Show the menu, read one selection and carry it out.
pub fn step(out: &mut dyn Console, app: &AppState) -> Result<Step> {
    out.clear()?;
    ui::render_header(out, app)?;
    ui::render_menu(out, &app.menu, &app.theme)?;
    let raw = line_or_stop!(out.read_line(ui::SELECTION_PROMPT)?);
    dispatch(out, app, &MenuToken::normalize(&raw))
}

/// Carry out one normalized menu selection.
pub fn dispatch(out: &mut dyn Console, app: &AppState, token: &MenuToken) -> Result<Step> {
    match app.menu.resolve(token) {
        Some(MenuAction::Exit) => Ok(ControlFlow::Break(ExitReason::Farewell)),
        Some(MenuAction::Show(key)) => {
            debug!(token = token.as_str(), key, "showing section");
            Ok(acknowledged(ui::render_section(out, app, key)?))
        }
        Some(MenuAction::Search) => run_search(out, app),
        None => {
            debug!(token = token.as_str(), "invalid selection");
            ui::render_invalid_selection(out, &app.theme)?;
            Ok(acknowledged(out.read_line(ui::CONTINUE_PROMPT)?))
        }
    }
}

fn run_search(out: &mut dyn Console, app: &AppState) -> Result<Step> {
    out.clear()?;
    ui::render_header(out, app)?;
    ui::render_search_banner(out, &app.theme)?;
    let raw = line_or_stop!(out.read_line(ui::QUERY_PROMPT)?);
    let query = raw.trim();
    if query.is_empty() {
        debug!("search cancelled");
        return Ok(ControlFlow::Continue(()));
    }
    let results = search::search(app.store, query);
    debug!(query, hits = results.len(), "search finished");
    ui::render_search_results(out, app, &results, query)?;
    Ok(acknowledged(out.read_line(ui::RETURN_PROMPT)?))
}

fn terminate(out: &mut dyn Console, app: &mut AppState, reason: ExitReason) -> Result<()> {
    app.mode = Mode::Terminated(reason);
    match reason {
        ExitReason::Farewell => ui::render_farewell(out, &app.theme)?,
        ExitReason::Interrupted => ui::render_interrupted(out)?,
        ExitReason::InputClosed => ui::render_input_closed(out)?,
    }
    info!(?reason, "viewer stopped");
    Ok(())
}
