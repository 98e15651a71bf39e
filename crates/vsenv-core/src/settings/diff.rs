//! Line-based unified diff of settings text

use similar::TextDiff;
use std::borrow::Cow;

/// Header label for the recorded copy
pub const BEFORE_LABEL: &str = "before.json";
/// Header label for the live file
pub const AFTER_LABEL: &str = "after.json";
/// Lines of unchanged context around each hunk
pub const CONTEXT_LINES: usize = 3;

/// Convert CRLF line endings to LF
#[must_use]
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Unified diff from `before` to `after`
///
/// Both sides are line-ending normalized first, so texts differing only in
/// CRLF vs LF compare equal. Equal inputs produce an empty string.
#[must_use]
pub fn unified_diff(before: &str, after: &str) -> String {
    let before = normalize_line_endings(before);
    let after = normalize_line_endings(after);

    let diff = TextDiff::from_lines(&*before, &*after);
    diff.unified_diff()
        .context_radius(CONTEXT_LINES)
        .header(BEFORE_LABEL, AFTER_LABEL)
        .to_string()
}
