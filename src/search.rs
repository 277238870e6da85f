use crate::content::{ContentStore, Section};

/// One matching line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub section_key: String,
    /// 1-based.
    pub line_number: usize,
    /// The matching line with surrounding whitespace trimmed.
    pub line_text: String,
}

/// Lazily walk every section for lines containing `query`, case-insensitively.
///
/// Sections are visited in definition order and lines in ascending order. A
/// query that is empty after trimming yields nothing.
pub fn matches<'a>(
    store: &'a ContentStore,
    query: &str,
) -> impl Iterator<Item = SearchResult> + use<'a> {
    let needle = query.to_lowercase();
    let sections = if query.trim().is_empty() {
        &[][..]
    } else {
        store.sections()
    };
    sections
        .iter()
        .flat_map(move |section| section_matches(section, needle.clone()))
}

fn section_matches(section: &Section, needle: String) -> impl Iterator<Item = SearchResult> + '_ {
    section
        .text
        .lines()
        .enumerate()
        .filter(move |(_, line)| line.to_lowercase().contains(&needle))
        .map(move |(i, line)| SearchResult {
            section_key: section.key.clone(),
            line_number: i + 1,
            line_text: line.trim().to_string(),
        })
}

/// Collect every match of `query` across the store.
pub fn search(store: &ContentStore, query: &str) -> Vec<SearchResult> {
    matches(store, query).collect()
}
