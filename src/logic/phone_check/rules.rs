//! Phone Spam Rules & Weights
//!
//! Static tables and constants only - no evaluation logic. Initialized once
//! at startup and never mutated.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// PATTERN TABLE
// ============================================================================

/// A spam number shape with the label used in reason strings.
pub struct SpamPattern {
    pub regex: Regex,
    pub name: &'static str,
}

/// Number shapes associated with robocall and scam traffic. Every matching
/// pattern contributes its weight; this table is not first-match.
pub static SPAM_PATTERNS: Lazy<Vec<SpamPattern>> = Lazy::new(|| {
    vec![
        SpamPattern {
            regex: Regex::new(r"^140\d{7}$").unwrap(),
            name: "Telemarketing (140xxxxxx)",
        },
        SpamPattern {
            regex: Regex::new(r"^1800\d{6,7}$").unwrap(),
            name: "Toll-free number",
        },
        SpamPattern {
            // Ten of the same digit, spelled out per digit since the regex
            // crate has no backreferences.
            regex: Regex::new(
                r"^(?:0{10}|1{10}|2{10}|3{10}|4{10}|5{10}|6{10}|7{10}|8{10}|9{10})$",
            )
            .unwrap(),
            name: "Repeated digits",
        },
        SpamPattern {
            regex: Regex::new(r"^(?:0123456789|1234567890)$").unwrap(),
            name: "Sequential digits",
        },
    ]
});

/// Prefixes seen on known spam sources. Checked in order; first match wins.
pub const KNOWN_SPAM_PREFIXES: &[&str] = &["140", "1800", "0000", "1111", "9999"];

// ============================================================================
// WEIGHTS (added to the confidence accumulator per fired check)
// ============================================================================

/// Per matching entry in SPAM_PATTERNS
pub const WEIGHT_SPAM_PATTERN: u32 = 30;

/// First matching entry in KNOWN_SPAM_PREFIXES
pub const WEIGHT_SPAM_PREFIX: u32 = 25;

/// Most frequent character appears REPEATED_DIGIT_MIN or more times
pub const WEIGHT_REPEATED_DIGITS: u32 = 20;

/// Cumulative ascending-pair count reaches SEQUENTIAL_RUN_MIN
pub const WEIGHT_SEQUENTIAL_RUN: u32 = 15;

/// Cleaned length outside MIN_PHONE_LEN..=MAX_PHONE_LEN
pub const WEIGHT_UNUSUAL_LENGTH: u32 = 10;

/// Per-character count at or above which the repeated-digit statistic fires
pub const REPEATED_DIGIT_MIN: usize = 7;

/// Ascending-pair count at or above which the sequential statistic fires
pub const SEQUENTIAL_RUN_MIN: usize = 5;

/// Cleaned length below this is unusual
pub const MIN_PHONE_LEN: usize = 10;

/// Cleaned length above this is unusual
pub const MAX_PHONE_LEN: usize = 12;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// At or above this score the number is spam, recommendation `block`
pub const BLOCK_THRESHOLD: u32 = 50;

/// At or above this score, below block, the number is spam,
/// recommendation `caution`
pub const CAUTION_THRESHOLD: u32 = 30;
