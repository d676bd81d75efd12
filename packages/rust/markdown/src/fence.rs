//! Fenced code blocks whose delimiter outgrows anything in the content.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest fence CommonMark accepts.
pub const MIN_FENCE_LEN: usize = 3;

/// Length of the longest run of backticks or tildes in `text`.
pub fn longest_fence_run(text: &str) -> usize {
    static RUN_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"`+|~+").expect("valid regex"));

    RUN_RE
        .find_iter(text)
        .map(|m| m.as_str().len())
        .max()
        .unwrap_or(0)
}

/// Backtick count for a fence around `text`: at least three, and always longer
/// than any backtick or tilde run inside it.
pub fn fence_len(text: &str) -> usize {
    MIN_FENCE_LEN.max(longest_fence_run(text) + 1)
}

/// Wrap `text` in a backtick fence with an optional info string.
///
/// The layout is `fence + lang`, newline, `text`, newline, `fence`, so
/// dropping the first and last lines gives back `text` unchanged.
pub fn fenced(text: &str, lang: Option<&str>) -> String {
    let fence = "`".repeat(fence_len(text));
    let lang = lang.unwrap_or_default();
    format!("{fence}{lang}\n{text}\n{fence}")
}
