//! Application state types and entry glue.
//!
//! Defines the controller state, display settings and colour theme, and
//! re-exports the menu loop as `run`.
//!
pub mod keymap;
pub mod update;

use crossterm::style::{Color, Stylize, style};

use crate::content::ContentStore;
use keymap::Menu;

/// Controller state. `Terminated` is final.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    AwaitingCommand,
    Terminated(ExitReason),
}

/// Why the controller stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The exit command was entered.
    Farewell,
    /// Ctrl-C arrived during a read.
    Interrupted,
    /// Input ran out.
    InputClosed,
}

/// Presentation knobs resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Results listed per search; the total is still reported.
    pub result_limit: usize,
    /// Characters kept from each matching line.
    pub excerpt_width: usize,
    /// Show the startup banner and wait for Enter.
    pub show_splash: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            result_limit: 20,
            excerpt_width: 100,
            show_splash: true,
        }
    }
}

/// Color palette for the viewer chrome. `None` leaves text unstyled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub title: Option<Color>,
    pub rule: Option<Color>,
    pub accent: Option<Color>,
    pub muted: Option<Color>,
    pub error: Option<Color>,
}

impl Theme {
    /// No styling at all.
    pub fn plain() -> Self {
        Self {
            title: None,
            rule: None,
            accent: None,
            muted: None,
            error: None,
        }
    }

    /// Basic ANSI palette.
    pub fn dark() -> Self {
        Self {
            title: Some(Color::Cyan),
            rule: Some(Color::DarkGrey),
            accent: Some(Color::Yellow),
            muted: Some(Color::Grey),
            error: Some(Color::Red),
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            title: Some(Color::Rgb { r: 0xcb, g: 0xa6, b: 0xf7 }),  // mauve
            rule: Some(Color::Rgb { r: 0x58, g: 0x5b, b: 0x70 }),   // surface2
            accent: Some(Color::Rgb { r: 0xf9, g: 0xe2, b: 0xaf }), // yellow
            muted: Some(Color::Rgb { r: 0x7f, g: 0x84, b: 0x9c }),  // overlay1
            error: Some(Color::Rgb { r: 0xf3, g: 0x8b, b: 0xa8 }),  // red
        }
    }

    /// Wrap `text` in the escape codes for `color`, if there is one.
    pub fn paint(&self, text: &str, color: Option<Color>) -> String {
        match color {
            Some(c) => style(text).with(c).to_string(),
            None => text.to_string(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

/// Everything the controller reads while running.
pub struct AppState<'a> {
    pub store: &'a ContentStore,
    pub menu: Menu,
    pub settings: Settings,
    pub theme: Theme,
    pub mode: Mode,
}

impl<'a> AppState<'a> {
    pub fn new(store: &'a ContentStore, menu: Menu, settings: Settings, theme: Theme) -> Self {
        if cfg!(debug_assertions) {
            if let Err(err) = menu.validate(store) {
                panic!("menu and content store out of sync: {err}");
            }
        }
        Self {
            store,
            menu,
            settings,
            theme,
            mode: Mode::AwaitingCommand,
        }
    }

    /// Manual menu, default settings, no colours.
    pub fn plain(store: &'a ContentStore) -> Self {
        Self::new(store, Menu::manual(), Settings::default(), Theme::plain())
    }
}

/// Re-export the menu loop entry function.
pub use update::run_app as run;
