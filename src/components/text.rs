//! Width-aware string fitting for fixed-size cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Keep the end of `s` so it fits in `width` columns.
/// Used for inputs, where the cursor sits after the last character.
pub fn fit_tail(s: &str, width: usize) -> &str {
    if s.width() <= width {
        return s;
    }

    let mut used = 0;
    let mut start = s.len();
    for (idx, ch) in s.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &s[start..]
}

/// Cut `s` to `width` columns, marking the cut with an ellipsis
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_tail_short_string_unchanged() {
        assert_eq!(fit_tail("Soup", 10), "Soup");
    }

    #[test]
    fn test_fit_tail_keeps_end() {
        assert_eq!(fit_tail("Malva Pudding", 7), "Pudding");
    }

    #[test]
    fn test_fit_tail_wide_chars() {
        // each CJK char is two columns wide
        assert_eq!(fit_tail("寿司ab", 5), "司ab");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Bunny Chow", 20), "Bunny Chow");
        assert_eq!(truncate("Bunny Chow", 6), "Bunny…");
        assert_eq!(truncate("Bunny Chow", 0), "");
    }
}
