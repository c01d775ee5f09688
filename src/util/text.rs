use std::borrow::Cow;

use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to truncated text.
const ELLIPSIS: char = '…';

/// Display width of a string in terminal columns.
///
/// ```
/// use jsref::util::display_width;
///
/// assert_eq!(display_width("map"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate `s` to at most `max_width` columns, ending in `…` when cut.
///
/// Returns `Cow::Borrowed` when the string already fits. Never splits a
/// multi-byte character.
///
/// ```
/// use jsref::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Nullish coalescing", 8), "Nullish…");
/// assert_eq!(truncate_to_width("Proxy", 10), "Proxy");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    // Leave one column for the ellipsis
    let budget = max_width - 1;
    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    let mut out = String::with_capacity(end + ELLIPSIS.len_utf8());
    out.push_str(&s[..end]);
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Rows a line occupies when wrapped to `viewport_width` columns.
///
/// Empty lines still take one row. Counts character wrap; ratatui's word
/// wrap can need slightly more rows for long lines.
pub fn wrapped_line_count(line: &Line<'_>, viewport_width: usize) -> usize {
    let width = viewport_width.max(1);
    let line_width: usize = line.spans.iter().map(|s| display_width(&s.content)).sum();
    if line_width == 0 {
        1
    } else {
        line_width.div_ceil(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn test_display_width_ascii_and_wide() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("Array.map"), 9);
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn test_fitting_text_is_borrowed() {
        let result = truncate_to_width("Proxy", 5);
        assert!(matches!(result, Cow::Borrowed("Proxy")));
    }

    #[test]
    fn test_truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("Template literals", 9), "Template…");
        assert_eq!(display_width(&truncate_to_width("Template literals", 9)), 9);
    }

    #[test]
    fn test_truncation_respects_wide_chars() {
        // Each char is two columns; a third would overflow the budget of 5
        assert_eq!(truncate_to_width("日本語テスト", 6), "日本…");
    }

    #[test]
    fn test_tiny_widths() {
        assert_eq!(truncate_to_width("Generators", 0), "");
        assert_eq!(truncate_to_width("Generators", 1), "…");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_wrapped_line_count() {
        let line = Line::from(vec![Span::raw("abcd"), Span::raw("ef")]);
        assert_eq!(wrapped_line_count(&line, 10), 1);
        assert_eq!(wrapped_line_count(&line, 4), 2);
        assert_eq!(wrapped_line_count(&line, 3), 2);
        assert_eq!(wrapped_line_count(&line, 0), 6);
        assert_eq!(wrapped_line_count(&Line::from(""), 10), 1);
    }
}
