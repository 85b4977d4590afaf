//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Share as a percentage with one decimal, e.g. `0.25` → `25.0%`.
pub fn percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

/// Join items, eliding the tail once `max_width` display columns are used:
/// `a.com, b.com, +3`.
pub fn join_elided(items: &[String], max_width: usize) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let sep = if out.is_empty() { "" } else { ", " };
        let rest = items.len() - i;
        if UnicodeWidthStr::width(out.as_str()) + sep.len() + UnicodeWidthStr::width(item.as_str()) > max_width
            && !out.is_empty()
        {
            out.push_str(&format!(", +{rest}"));
            return out;
        }
        out.push_str(sep);
        out.push_str(item);
    }
    out
}

/// Horizontal bar scaled to `max`, for quick terminal histograms.
pub fn bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value * width).div_ceil(max);
    "█".repeat(len)
}
