//! Widget components for the TUI

pub mod country_picker;
pub mod generator_panel;
pub mod header;
pub mod modal_overlay;
pub mod result_list;
pub mod status_bar;

pub use country_picker::CountryPicker;
pub use generator_panel::GeneratorPanel;
pub use header::Header;
pub use result_list::ResultList;
pub use status_bar::StatusBar;

use unicode_width::UnicodeWidthChar;

/// First row to draw so that `cursor` stays inside a window of `rows` rows
pub(crate) fn scroll_offset(cursor: usize, rows: usize) -> usize {
    if rows == 0 || cursor < rows {
        0
    } else {
        cursor + 1 - rows
    }
}

/// Cut `text` to at most `max_width` display columns, marking the cut with "…"
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(49, 10), 40);
        assert_eq!(scroll_offset(5, 0), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Japan", 10), "Japan");
        assert_eq!(truncate_to_width("United Kingdom", 8), "United …");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本国", 4), "日…");
    }
}
