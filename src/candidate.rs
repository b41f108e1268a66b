//! Turning raw `git branch` lines into selectable candidates.

use regex::Regex;
use std::sync::LazyLock;

use crate::context::config::Config;

/// Single-byte branch-name characters plus the `->` and `[...]` decorations git prints.
static CANDIDATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z_.\-/>\[\] ]+$").expect("Invalid candidate pattern")
});

/// Strips the remote-tracking prefix and the current-branch marker.
///
/// Steps run in a fixed order: drop the first `remotes/`, then leading
/// spaces, then any leading run of `*` and spaces.
pub fn normalize(line: &str) -> String {
    let line = line.replacen("remotes/", "", 1);
    let line = line.trim_start_matches(' ');
    line.trim_start_matches(['*', ' ']).to_string()
}

pub fn matches_pattern(line: &str) -> bool {
    CANDIDATE_PATTERN.is_match(line)
}

/// Why a line was dropped, for trace logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Ignored,
    Pattern,
}

/// Normalizes `line` and checks it against the ignore list and the pattern.
pub fn accept(config: &Config, line: &str) -> Result<String, Rejection> {
    let candidate = normalize(line);
    if candidate.is_empty() {
        return Err(Rejection::Empty);
    }
    if !config.is_valid(&candidate) {
        return Err(Rejection::Ignored);
    }
    if !matches_pattern(&candidate) {
        return Err(Rejection::Pattern);
    }
    Ok(candidate)
}
