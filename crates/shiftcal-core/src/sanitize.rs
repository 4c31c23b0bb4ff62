//! Feed text cleanup.
//!
//! The upstream roster export occasionally carries invisible characters
//! (most notably U+00A0) and stray surrounding whitespace that break strict
//! iCalendar parsing. The sanitizer rebuilds the text from cleaned lines and
//! is applied unconditionally before parsing.

/// Non-breaking space, the one control character the upstream export is
/// known to leak into property values.
const NON_BREAKING_SPACE: char = '\u{a0}';

/// Cleans raw feed text line by line.
///
/// Each line is trimmed of leading/trailing whitespace and stripped of
/// non-breaking spaces, then the lines are rejoined with `\n` in their
/// original order. Works on both LF and CRLF input.
pub fn sanitize_feed(raw: &str) -> String {
    raw.lines()
        .map(|line| line.trim().replace(NON_BREAKING_SPACE, ""))
        .collect::<Vec<_>>()
        .join("\n")
}
