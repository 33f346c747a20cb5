//! Display-width aware truncation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending it with
/// `tail` when anything was cut. Strings that already fit are returned as-is,
/// which makes the operation idempotent.
pub fn truncate_with_tail(s: &str, max_width: usize, tail: &str) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = UnicodeWidthStr::width(tail);
    if max_width < tail_width {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + tail_width > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str(tail);
    out
}

/// Truncates the title and, when descriptions are shown, each description
/// line. The description keeps at most `height - 1` lines.
pub(crate) fn truncate_text(
    title: &str,
    desc: &str,
    width: usize,
    show_description: bool,
    height: usize,
    tail: &str,
) -> (String, String) {
    let title = truncate_with_tail(title, width, tail);
    if !show_description {
        return (title, desc.to_string());
    }
    let desc = desc
        .split('\n')
        .take(height.saturating_sub(1))
        .map(|line| truncate_with_tail(line, width, tail))
        .collect::<Vec<_>>()
        .join("\n");
    (title, desc)
}
