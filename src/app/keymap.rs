//! Menu table: maps normalized menu tokens to controller actions.
//!
//! The table is also what the renderer lists on the main screen, so the menu
//! text and the accepted tokens never drift apart.

use std::collections::HashSet;

use crate::content::ContentStore;
use crate::error::ContentError;

/// What a menu token asks the controller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Display the section with this key.
    Show(&'static str),
    /// Open the search prompt.
    Search,
    /// Leave the viewer.
    Exit,
}

/// A trimmed, uppercased user selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MenuToken(String);

impl MenuToken {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub token: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

/// Which block of the menu an entry is listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuGroup {
    Parts,
    Extras,
}

const fn entry(token: &'static str, label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { token, label, action }
}

const MANUAL_PARTS: &[MenuEntry] = &[
    entry("1", "Foundation", MenuAction::Show("part1")),
    entry("2", "The V+CC Shadow Rule", MenuAction::Show("part2")),
    entry("3", "The Tilde Positional Clause ⭐ CORRECTED", MenuAction::Show("part3")),
    entry("4", "Polarity Matching Doctrine", MenuAction::Show("part4")),
    entry("5", "Compound Word Distinctions", MenuAction::Show("part5")),
    entry("6", "Parsing Levels", MenuAction::Show("part6")),
    entry("7", "Homophone Weaponization (Top 20)", MenuAction::Show("part7")),
    entry("8", "Letter Combinations", MenuAction::Show("part8")),
    entry("9", "Databases Reference", MenuAction::Show("part9")),
    entry("10", "Advanced Features", MenuAction::Show("part10")),
    entry("11", "Legal Formatting", MenuAction::Show("part11")),
    entry("12", "Use Cases", MenuAction::Show("part12")),
    entry("13", "Implementation Guide", MenuAction::Show("part13")),
];

const MANUAL_EXTRAS: &[MenuEntry] = &[
    entry("Q", "Quick Reference Card", MenuAction::Show("quick_ref")),
    entry("G", "Glossary", MenuAction::Show("glossary")),
    entry("A", "About This Manual", MenuAction::Show("about")),
    entry("S", "Search Manual", MenuAction::Search),
    entry("X", "Exit", MenuAction::Exit),
];

/// Ordered menu of tokens and their actions.
#[derive(Clone, Debug)]
pub struct Menu {
    entries: Vec<(MenuGroup, MenuEntry)>,
}

impl Menu {
    /// Build a menu from two blocks of entries.
    pub fn new(parts: &[MenuEntry], extras: &[MenuEntry]) -> Self {
        let entries = parts
            .iter()
            .map(|e| (MenuGroup::Parts, *e))
            .chain(extras.iter().map(|e| (MenuGroup::Extras, *e)))
            .collect();
        Self { entries }
    }

    /// The menu of the embedded manual.
    pub fn manual() -> Self {
        Self::new(MANUAL_PARTS, MANUAL_EXTRAS)
    }

    pub fn entries(&self) -> impl Iterator<Item = (MenuGroup, &MenuEntry)> {
        self.entries.iter().map(|(g, e)| (*g, e))
    }

    pub fn resolve(&self, token: &MenuToken) -> Option<MenuAction> {
        self.entries
            .iter()
            .find(|(_, e)| e.token == token.as_str())
            .map(|(_, e)| e.action)
    }

    /// Check that every displayed section exists in `store` and that no token
    /// is bound twice.
    pub fn validate(&self, store: &ContentStore) -> Result<(), MenuError> {
        let mut seen = HashSet::new();
        for (_, e) in &self.entries {
            if !seen.insert(e.token) {
                return Err(MenuError::DuplicateToken(e.token));
            }
            if let MenuAction::Show(key) = e.action {
                if !store.contains(key) {
                    return Err(MenuError::Content(ContentError::UnknownSection(key.to_string())));
                }
            }
        }
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::manual()
    }
}

/// Inconsistency between the menu table and the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    DuplicateToken(&'static str),
    Content(ContentError),
}

impl std::fmt::Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuError::DuplicateToken(t) => write!(f, "menu token `{t}` is bound twice"),
            MenuError::Content(e) => write!(f, "menu entry points at missing content: {e}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Content(e) => Some(e),
            MenuError::DuplicateToken(_) => None,
        }
    }
}
