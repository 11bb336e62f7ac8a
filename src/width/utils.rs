//! Terminal display width helpers.
//!
//! Labels may carry ANSI styling; only the visible glyphs count toward the
//! width a measurable reports.

/// Compute the display width of a string after stripping ANSI escapes.
pub fn display_width(text: &str) -> u32 {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    let width = unicode_width::UnicodeWidthStr::width(&*clean_str);
    u32::try_from(width).unwrap_or(u32::MAX)
}
