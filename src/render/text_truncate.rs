//! Width-aware excerpts for review text in terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Collapses runs of whitespace (including newlines) to single spaces and
/// truncates the result to `max_width` terminal columns.
///
/// A `max_width` of 0 disables truncation.
pub(crate) fn excerpt(text: &str, max_width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if max_width == 0 {
        return collapsed;
    }
    truncate_to_display_width_with_ellipsis(&collapsed, max_width)
}

/// Shortens `text` to at most `max_width` terminal columns, ending in `...`.
///
/// Width is measured in display columns rather than characters, so wide
/// characters in company names and review text do not overflow the card.
/// Widths of 3 or less leave room only for dots.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(3);
    let mut used = 0;
    let kept: String = text
        .chars()
        .take_while(|ch| {
            used += UnicodeWidthChar::width(*ch).unwrap_or(0);
            used <= budget
        })
        .collect();
    format!("{}...", kept.trim_end())
}
