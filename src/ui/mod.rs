//! Screen rendering: header, menu, sections, search results and the
//! one-off banners (splash, farewell, interruption).
//!
pub mod components;

use std::io;

use crate::app::keymap::{Menu, MenuAction, MenuGroup};
use crate::app::{AppState, Settings, Theme};
use crate::content::manual::HEADER_KEY;
use crate::error::ContentError;
use crate::search::SearchResult;
use crate::term::{Console, Input};
use components::{centered, double_rule, excerpt, menu_row, single_rule, SCREEN_WIDTH};

pub const RETURN_PROMPT: &str = "\nPress Enter to return to menu...";
pub const CONTINUE_PROMPT: &str = "Press Enter to continue...";
pub const BEGIN_PROMPT: &str = "\n  Press Enter to begin...";
pub const SELECTION_PROMPT: &str = "\nEnter selection: ";
pub const QUERY_PROMPT: &str = "Enter search term (or press Enter to cancel): ";

pub const INVALID_SELECTION: &str = "\n❌ Invalid selection. Please try again.";
pub const FAREWELL: &str = "  Thank you for using CodexGlyph Manual Viewer";
pub const INTERRUPTED: &str = "\n\n  Interrupted by user. Exiting gracefully...";
pub const INPUT_CLOSED: &str = "\n  Input closed. Exiting...";

/// Print the manual banner. Stores without a header print nothing.
pub fn render_header(out: &mut dyn Console, app: &AppState) -> io::Result<()> {
    if let Some(header) = app.store.section(HEADER_KEY) {
        out.write_line(&header.text)?;
    }
    Ok(())
}

/// Print the table of contents.
pub fn render_menu(out: &mut dyn Console, menu: &Menu, theme: &Theme) -> io::Result<()> {
    out.write_line(&format!("\n{}", theme.paint(&single_rule(), theme.rule)))?;
    out.write_line(&theme.paint("  TABLE OF CONTENTS", theme.title))?;
    out.write_line(&theme.paint(&single_rule(), theme.rule))?;
    let mut group = None;
    for (g, entry) in menu.entries() {
        if group.is_some_and(|prev| prev != g) {
            out.write_line("")?;
        }
        group = Some(g);
        out.write_line(&menu_row(entry.token, entry.label))?;
    }
    out.write_line(&theme.paint(&single_rule(), theme.rule))
}

/// Clear the screen, print the header and the full text of `key`, then block
/// until the user acknowledges.
pub fn render_section(out: &mut dyn Console, app: &AppState, key: &str) -> anyhow::Result<Input> {
    let text = app.store.get(key)?;
    out.clear()?;
    render_header(out, app)?;
    out.write_line(text)?;
    Ok(out.read_line(RETURN_PROMPT)?)
}

/// Startup banner listing what the manual contains.
pub fn render_splash(out: &mut dyn Console, menu: &Menu, theme: &Theme) -> io::Result<()> {
    let parts = menu.entries().filter(|(g, _)| *g == MenuGroup::Parts).count();
    out.write_line(&format!("\n{}", theme.paint(&double_rule(), theme.rule)))?;
    out.write_line(&theme.paint(
        &centered("  CodexGlyph Manual Viewer - Complete Edition v1.0", SCREEN_WIDTH),
        theme.title,
    ))?;
    out.write_line(&centered("  All Tilde Corrections Applied ✓", SCREEN_WIDTH))?;
    out.write_line(&theme.paint(&double_rule(), theme.rule))?;
    out.write_line("\n  Loading complete manual database...")?;
    out.write_line(&format!("  • {parts} comprehensive parts"))?;
    let extras = menu
        .entries()
        .filter(|(g, e)| *g == MenuGroup::Extras && matches!(e.action, MenuAction::Show(_)));
    for (_, entry) in extras {
        out.write_line(&format!("  • {}", entry.label))?;
    }
    out.write_line("  • Search function")?;
    out.write_line("\n  Ready to navigate.")
}

/// Title block of the search screen.
pub fn render_search_banner(out: &mut dyn Console, theme: &Theme) -> io::Result<()> {
    out.write_line(&theme.paint("SEARCH MANUAL", theme.title))?;
    out.write_line(&theme.paint(&double_rule(), theme.rule))?;
    out.write_line("")
}

/// Lines describing `results` for `query`, with the display limit and
/// excerpt width from `settings` applied.
pub fn search_report(
    results: &[SearchResult],
    query: &str,
    settings: &Settings,
    theme: &Theme,
) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("No results found for '{query}'")];
    }
    let mut lines = vec![
        format!("Found {} result(s) for '{query}':", results.len()),
        theme.paint(&single_rule(), theme.rule),
    ];
    for r in results.iter().take(settings.result_limit) {
        let location = format!("[{}] Line {}:", r.section_key.to_uppercase(), r.line_number);
        lines.push(format!("\n{}", theme.paint(&location, theme.accent)));
        lines.push(format!("  {}", excerpt(&r.line_text, settings.excerpt_width)));
    }
    if results.len() > settings.result_limit {
        let note = format!(
            "  (showing first {} of {})",
            settings.result_limit,
            results.len()
        );
        lines.push(format!("\n{}", theme.paint(&note, theme.muted)));
    }
    lines
}

pub fn render_search_results(
    out: &mut dyn Console,
    app: &AppState,
    results: &[SearchResult],
    query: &str,
) -> io::Result<()> {
    out.write_line("")?;
    for line in search_report(results, query, &app.settings, &app.theme) {
        out.write_line(&line)?;
    }
    out.write_line("")
}

pub fn render_invalid_selection(out: &mut dyn Console, theme: &Theme) -> io::Result<()> {
    out.write_line(&theme.paint(INVALID_SELECTION, theme.error))
}

pub fn render_farewell(out: &mut dyn Console, theme: &Theme) -> io::Result<()> {
    out.clear()?;
    out.write_line(&format!("\n{}", theme.paint(&double_rule(), theme.rule)))?;
    out.write_line(&theme.paint(FAREWELL, theme.title))?;
    out.write_line("  The work continues. 🦊")?;
    out.write_line(&theme.paint(&double_rule(), theme.rule))?;
    out.write_line("")
}

pub fn render_interrupted(out: &mut dyn Console) -> io::Result<()> {
    out.write_line(INTERRUPTED)?;
    out.write_line("  🦊\n")
}

pub fn render_input_closed(out: &mut dyn Console) -> io::Result<()> {
    out.write_line(INPUT_CLOSED)
}

/// One line per menu entry: token, section key and title.
pub fn section_listing(app: &AppState) -> Result<Vec<String>, ContentError> {
    let mut lines = Vec::new();
    for (_, entry) in app.menu.entries() {
        let line = match entry.action {
            MenuAction::Show(key) => {
                let section = app
                    .store
                    .section(key)
                    .ok_or_else(|| ContentError::UnknownSection(key.to_string()))?;
                format!("{:<4}{:<11}{}", entry.token, section.key, section.title)
            }
            MenuAction::Search | MenuAction::Exit => continue,
        };
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, Section};
    use crate::term::ScriptedConsole;

    fn hit(key: &str, line: usize, text: &str) -> SearchResult {
        SearchResult {
            section_key: key.into(),
            line_number: line,
            line_text: text.into(),
        }
    }

    #[test]
    fn section_text_is_written_verbatim_then_acknowledged() {
        let store = ContentStore::manual().unwrap();
        let app = AppState::plain(&store);
        let mut out = ScriptedConsole::new([""]);
        let ack = render_section(&mut out, &app, "part7").unwrap();
        assert_eq!(ack, Input::Line(String::new()));
        assert!(out.output.iter().any(|l| l == store.get("part7").unwrap()));
        assert_eq!(out.prompts, vec![RETURN_PROMPT.to_string()]);
        assert_eq!(out.clears, 1);
    }

    #[test]
    fn rendering_an_unknown_section_fails_without_reading() {
        let store = ContentStore::new([Section::new("a", "A", "text")]).unwrap();
        let app = AppState::new(
            &store,
            Menu::new(&[], &[]),
            Settings::default(),
            Theme::plain(),
        );
        let mut out = ScriptedConsole::new([""]);
        assert!(render_section(&mut out, &app, "missing").is_err());
        assert_eq!(out.reads, 0);
    }

    #[test]
    fn menu_lists_every_entry_with_a_gap_between_groups() {
        let mut out = ScriptedConsole::default();
        render_menu(&mut out, &Menu::manual(), &Theme::plain()).unwrap();
        assert!(out.output.contains(&"  [13] Implementation Guide".to_string()));
        assert!(out.output.contains(&"  [X]  Exit".to_string()));
        let gap = out.output.iter().position(|l| l.is_empty()).unwrap();
        assert_eq!(out.output[gap - 1], "  [13] Implementation Guide");
        assert_eq!(out.output[gap + 1], "  [Q]  Quick Reference Card");
    }

    #[test]
    fn report_limits_results_and_truncates_excerpts() {
        let long = "x".repeat(150);
        let results: Vec<_> = (1..=25).map(|n| hit("part2", n, &long)).collect();
        let settings = Settings::default();
        let lines = search_report(&results, "x", &settings, &Theme::plain());
        assert_eq!(lines[0], "Found 25 result(s) for 'x':");
        assert_eq!(lines.iter().filter(|l| l.contains("Line ")).count(), 20);
        assert!(lines.contains(&format!("  {}...", "x".repeat(100))));
        assert_eq!(lines.last().unwrap(), "\n  (showing first 20 of 25)");
    }

    #[test]
    fn report_uses_uppercase_section_keys() {
        let lines = search_report(
            &[hit("quick_ref", 4, "V+CC DETECTION:")],
            "v+cc",
            &Settings::default(),
            &Theme::plain(),
        );
        assert_eq!(lines[2], "\n[QUICK_REF] Line 4:");
        assert_eq!(lines[3], "  V+CC DETECTION:");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_report_says_nothing_was_found() {
        let lines = search_report(&[], "nope", &Settings::default(), &Theme::plain());
        assert_eq!(lines, vec!["No results found for 'nope'".to_string()]);
    }

    #[test]
    fn listing_covers_every_displayable_section() {
        let store = ContentStore::manual().unwrap();
        let app = AppState::plain(&store);
        let lines = section_listing(&app).unwrap();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("1   part1"));
        assert!(lines.iter().any(|l| l.starts_with("A   about")));
    }
}
