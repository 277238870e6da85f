//! The embedded CodexGlyph manual.
//!
//! Section texts are compiled into the binary from `manual/*.txt`; the table
//! order below is the definition order the search engine reports in.

use super::Section;

/// `(key, title, text)` for every manual section, in definition order.
pub const MANUAL: &[(&str, &str, &str)] = &[
    ("header", "Header", include_str!("manual/header.txt")),
    ("part1", "Foundation", include_str!("manual/part1.txt")),
    ("part2", "The V+CC Shadow Rule", include_str!("manual/part2.txt")),
    (
        "part3",
        "The Tilde Positional Clause ⭐ CORRECTED",
        include_str!("manual/part3.txt"),
    ),
    ("part4", "Polarity Matching Doctrine", include_str!("manual/part4.txt")),
    ("part5", "Compound Word Distinctions", include_str!("manual/part5.txt")),
    ("part6", "Parsing Levels", include_str!("manual/part6.txt")),
    (
        "part7",
        "Homophone Weaponization (Top 20)",
        include_str!("manual/part7.txt"),
    ),
    ("part8", "Letter Combinations", include_str!("manual/part8.txt")),
    ("part9", "Databases Reference", include_str!("manual/part9.txt")),
    ("part10", "Advanced Features", include_str!("manual/part10.txt")),
    ("part11", "Legal Formatting", include_str!("manual/part11.txt")),
    ("part12", "Use Cases", include_str!("manual/part12.txt")),
    ("part13", "Implementation Guide", include_str!("manual/part13.txt")),
    ("quick_ref", "Quick Reference Card", include_str!("manual/quick_ref.txt")),
    ("glossary", "Glossary", include_str!("manual/glossary.txt")),
    ("about", "About This Manual", include_str!("manual/about.txt")),
];

/// Key of the banner printed above every screen.
pub const HEADER_KEY: &str = "header";

pub(super) fn sections() -> impl Iterator<Item = Section> {
    MANUAL
        .iter()
        .map(|(key, title, text)| Section::new(*key, *title, *text))
}
