use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid character class"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Canonical form used for every keyword comparison.
///
/// Lowercases, drops anything that is not an ASCII letter, digit, whitespace or hyphen,
/// and collapses whitespace to single spaces. The result is always trimmed, which keeps
/// the function idempotent even when removed punctuation leaves a dangling space.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowered, "");
    WHITESPACE_RUNS
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
