//! Weighers: cheap text-length proxies for rendered card height.

use unicode_width::UnicodeWidthStr;

/// Length in UTF-16 code units, matching a browser's `String.length`.
#[inline]
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Display width in terminal cells.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}
