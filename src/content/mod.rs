//! Content store: the immutable key -> text table the viewer displays.
//!
//! The store is built once at startup and only ever read afterwards. Sections
//! keep their definition order, which is what search results are sorted by.

pub mod manual;

use std::collections::HashMap;

use crate::error::ContentError;

/// One named block of display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub text: String,
}

impl Section {
    pub fn new(key: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Read-only mapping from section key to section text.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl ContentStore {
    /// Build a store from sections in definition order.
    ///
    /// Fails if two sections share a key.
    pub fn new<I>(sections: I) -> Result<Self, ContentError>
    where
        I: IntoIterator<Item = Section>,
    {
        let mut store = Self::default();
        for section in sections {
            if store.index.contains_key(&section.key) {
                return Err(ContentError::DuplicateSection(section.key));
            }
            store.index.insert(section.key.clone(), store.sections.len());
            store.sections.push(section);
        }
        Ok(store)
    }

    /// The embedded manual.
    pub fn manual() -> Result<Self, ContentError> {
        Self::new(manual::sections())
    }

    /// Text of the section named `key`.
    pub fn get(&self, key: &str) -> Result<&str, ContentError> {
        self.section(key)
            .map(|s| s.text.as_str())
            .ok_or_else(|| ContentError::UnknownSection(key.to_string()))
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.index.get(key).map(|&i| &self.sections[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Known section keys, in definition order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// All sections, in definition order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_stored_text_and_rejects_unknown_keys() {
        let store = ContentStore::new([
            Section::new("a", "A", "first"),
            Section::new("b", "B", "second"),
        ])
        .unwrap();
        assert_eq!(store.get("b").unwrap(), "second");
        assert_eq!(
            store.get("c").unwrap_err(),
            ContentError::UnknownSection("c".into())
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = ContentStore::new([
            Section::new("a", "A", "one"),
            Section::new("a", "A again", "two"),
        ])
        .unwrap_err();
        assert_eq!(err, ContentError::DuplicateSection("a".into()));
    }

    #[test]
    fn keys_follow_definition_order() {
        let store = ContentStore::new([
            Section::new("zeta", "", ""),
            Section::new("alpha", "", ""),
            Section::new("mid", "", ""),
        ])
        .unwrap();
        assert_eq!(store.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn manual_holds_every_embedded_section() {
        let store = ContentStore::manual().unwrap();
        assert_eq!(store.len(), manual::MANUAL.len());
        assert_eq!(store.keys().next(), Some(manual::HEADER_KEY));
        assert!(store.get("part13").unwrap().contains("PART 13: IMPLEMENTATION GUIDE"));
        assert!(store.get("about").unwrap().contains("ABOUT THIS MANUAL"));
        assert_eq!(store.section("glossary").unwrap().title, "Glossary");
    }
}
