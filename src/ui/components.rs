//! Shared text building blocks (rules, centring, excerpts).
//!
//! Widths are counted in `char`s, which is what the fixed 70-column layout
//! of the manual assumes.

/// Column width of rules and banners.
pub const SCREEN_WIDTH: usize = 70;

/// Marker appended to cut excerpts.
pub const ELLIPSIS: &str = "...";

/// `ch` repeated across the screen.
pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, SCREEN_WIDTH).collect()
}

/// Heavy double rule used around banners.
pub fn double_rule() -> String {
    rule('═')
}

/// Light single rule used around lists.
pub fn single_rule() -> String {
    rule('─')
}

/// Pad `text` with spaces on both sides to `width` columns.
///
/// Text already at least `width` wide is returned unchanged.
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// First `max_chars` characters of `line`, with an ellipsis when anything was cut.
pub fn excerpt(line: &str, max_chars: usize) -> String {
    match line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &line[..cut]),
        None => line.to_string(),
    }
}

/// `[token]` padded so labels line up in one column.
pub fn menu_row(token: &str, label: &str) -> String {
    format!("  {:<5}{}", format!("[{token}]"), label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_span_the_screen() {
        assert_eq!(double_rule().chars().count(), SCREEN_WIDTH);
        assert!(single_rule().chars().all(|c| c == '─'));
    }

    #[test]
    fn centered_splits_padding_between_sides() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("abc", 6), " abc  ");
        assert_eq!(centered("toolong", 3), "toolong");
        assert_eq!(centered("✓", 3).chars().count(), 3);
    }

    #[test]
    fn excerpt_cuts_on_char_boundaries() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("═══════", 2), "══...");
        assert_eq!(excerpt("exact", 5), "exact");
    }

    #[test]
    fn menu_rows_align_labels() {
        assert_eq!(menu_row("1", "Foundation"), "  [1]  Foundation");
        assert_eq!(menu_row("10", "Advanced Features"), "  [10] Advanced Features");
        assert_eq!(menu_row("Q", "Glossary"), "  [Q]  Glossary");
    }
}
