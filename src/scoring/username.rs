// Username analysis — structural checks on the handle string.
//
// Auto-generated and impersonation accounts tend to have recognisable
// handles: long alphanumeric runs, digit blocks, "official"/"real" words,
// and leet-style letter/digit alternation.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::{SubAnalysis, Tally};
use crate::profile::utf16_len;

const BASE_CONFIDENCE: f64 = 0.80;

/// Handles longer than this are suspicious on their own.
const LONG_USERNAME_UNITS: usize = 20;

static ALPHANUMERIC_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{8,}$").expect("valid regex"));
static EXCESSIVE_NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4,}").expect("valid regex"));
static SUSPICIOUS_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(real|official|original|genuine|authentic|backup|fan|thereal|fake|copy|clone|impersonator)",
    )
    .expect("valid regex")
});
static LEET_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+[a-zA-Z]+[0-9]+|[a-zA-Z]+[0-9]+[a-zA-Z]+").expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsernameDetails {
    /// Mixed letters and digits only, 8+ characters
    pub has_random_pattern: bool,
    pub has_suspicious_words: bool,
    /// How many of {lowercase, uppercase, digit, other} appear
    pub char_types_used: usize,
}

pub fn analyze_username(username: &str) -> SubAnalysis<UsernameDetails> {
    let mut tally = Tally::new(BASE_CONFIDENCE);

    let has_random_pattern = tally.add_if(is_random_string(username), 0.40, 0.10);
    tally.add_if(EXCESSIVE_NUMBERS.is_match(username), 0.30, 0.15);
    let has_suspicious_words = tally.add_if(SUSPICIOUS_WORDS.is_match(username), 0.35, 0.20);
    tally.add_if(has_repeated_run(username, 4), 0.25, 0.10);
    tally.add_if(LEET_SHAPE.is_match(username), 0.30, 0.15);
    tally.add_if(
        utf16_len(username) > LONG_USERNAME_UNITS,
        0.20,
        0.05,
    );

    let char_types_used = count_char_types(username);
    tally.add_if(char_types_used >= 3, 0.25, 0.10);

    tally.finish(UsernameDetails {
        has_random_pattern,
        has_suspicious_words,
        char_types_used,
    })
}

/// Only ASCII letters and digits, at least 8 of them, containing both kinds.
fn is_random_string(username: &str) -> bool {
    ALPHANUMERIC_ONLY.is_match(username)
        && username.chars().any(|c| c.is_ascii_digit())
        && username.chars().any(|c| c.is_ascii_alphabetic())
}

/// Whether any single UTF-16 unit repeats at least `run` times in a row.
///
/// Works on code units, so an astral character (two surrogates) never
/// forms a run with itself. Line terminators never start a run.
fn has_repeated_run(username: &str, run: usize) -> bool {
    let mut previous: Option<u16> = None;
    let mut length = 0;
    for unit in username.encode_utf16() {
        if is_line_terminator(unit) {
            previous = None;
            length = 0;
            continue;
        }
        if previous == Some(unit) {
            length += 1;
        } else {
            previous = Some(unit);
            length = 1;
        }
        if length >= run {
            return true;
        }
    }
    false
}

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}

fn count_char_types(username: &str) -> usize {
    [
        username.chars().any(|c| c.is_ascii_lowercase()),
        username.chars().any(|c| c.is_ascii_uppercase()),
        username.chars().any(|c| c.is_ascii_digit()),
        username.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_scores_zero() {
        let result = analyze_username("johnsmith");
        assert_eq!(result.score, 0.0);
        assert!((result.confidence - 0.80).abs() < 1e-9);
        assert_eq!(result.details.char_types_used, 1);
    }

    #[test]
    fn test_repeated_run_needs_four() {
        assert!(!has_repeated_run("aaab", 4));
        assert!(has_repeated_run("baaaa", 4));
        assert!(has_repeated_run("____", 4));
    }

    #[test]
    fn test_repeated_run_counts_code_units() {
        assert!(!has_repeated_run("ab😀😀😀😀", 4));
        assert!(!has_repeated_run("\n\n\n\n", 4));
        assert!(has_repeated_run("x\nyyyy", 4));
    }

    #[test]
    fn test_random_string_needs_both_kinds() {
        assert!(is_random_string("abc12345"));
        assert!(!is_random_string("abcdefgh"));
        assert!(!is_random_string("12345678"));
        assert!(!is_random_string("abc_12345"));
        assert!(!is_random_string("ab12"));
    }

    #[test]
    fn test_char_types() {
        assert_eq!(count_char_types("Jane_Doe"), 3);
        assert_eq!(count_char_types("Ab1."), 4);
        assert_eq!(count_char_types("jane"), 1);
    }
}
