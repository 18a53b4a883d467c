//! Column arithmetic for one-line layouts.
//!
//! Widths are terminal columns, not bytes or chars. Alignment only ever
//! pads: content wider than its field is left intact.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the number of terminal columns `s` occupies.
#[inline]
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Returns the number of spaces needed to grow `s` to `width` columns.
#[inline]
#[must_use]
pub fn padding_for(s: &str, width: usize) -> usize {
    width.saturating_sub(display_width(s))
}

/// Left-aligns `s` in a field of `width` columns.
#[must_use]
pub fn align_left(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + padding_for(s, width));
    out.push_str(s);
    out.push_str(&" ".repeat(padding_for(s, width)));
    out
}

/// Right-aligns `s` in a field of `width` columns.
#[must_use]
pub fn align_right(s: &str, width: usize) -> String {
    let mut out = " ".repeat(padding_for(s, width));
    out.push_str(s);
    out
}

/// Returns the longest suffix of `s` that fits in `columns` columns.
#[must_use]
pub fn tail_columns(s: &str, columns: usize) -> &str {
    let mut used = 0usize;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

/// Returns the longest prefix of `s` that fits in `columns` columns.
#[must_use]
pub fn head_columns(s: &str, columns: usize) -> &str {
    let mut used = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > columns {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Width of each half of a split line: `width / 2 - margin`, floored at zero.
#[inline]
#[must_use]
pub const fn half_width(width: u16, margin: u16) -> usize {
    (width / 2).saturating_sub(margin) as usize
}
