//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string from the start with a leading ellipsis if it exceeds
/// `max_width` (unicode-aware).
///
/// Input fields show the end of the text, so overflow is trimmed from the
/// front. Wide characters (CJK, emoji) are counted by terminal columns.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut kept: Vec<char> = Vec::new();
    let mut kept_width = 0;
    for ch in text.chars().rev() {
        let next_width = kept_width + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        kept.push(ch);
        kept_width = next_width;
    }

    let mut truncated = String::from("…");
    truncated.extend(kept.into_iter().rev());
    truncated
}
