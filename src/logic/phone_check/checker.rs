//! Phone Evaluation Pipeline
//!
//! Pure function of the input plus the static tables in `rules`. There is no
//! rejection path: any string is accepted, normalized, and scored.

use std::collections::HashMap;

use chrono::Utc;

use super::rules;
use super::types::{PhoneCheckResult, Recommendation};

/// Score `phone` against the spam rule tables.
pub fn check_phone(phone: &str) -> PhoneCheckResult {
    let cleaned = normalize(phone);

    let mut confidence: u32 = 0;
    let mut reasons = Vec::new();

    // Check 1: spam patterns - every matching pattern counts
    for pattern in rules::SPAM_PATTERNS.iter() {
        if pattern.regex.is_match(&cleaned) {
            reasons.push(format!("Matches {} pattern", pattern.name));
            confidence += rules::WEIGHT_SPAM_PATTERN;
        }
    }

    // Check 2: known spam prefixes - first match wins
    for prefix in rules::KNOWN_SPAM_PREFIXES {
        if cleaned.starts_with(prefix) {
            reasons.push(format!("Starts with known spam prefix: {}", prefix));
            confidence += rules::WEIGHT_SPAM_PREFIX;
            break;
        }
    }

    // Check 3: most frequent character. Counts every character, digit or
    // not, matching the shipped behavior.
    let mut char_counts: HashMap<char, usize> = HashMap::new();
    for c in cleaned.chars() {
        *char_counts.entry(c).or_insert(0) += 1;
    }
    let max_repeated = char_counts.values().copied().max().unwrap_or(0);
    if max_repeated >= rules::REPEATED_DIGIT_MIN {
        reasons.push(format!("Excessive repeated digits ({} times)", max_repeated));
        confidence += rules::WEIGHT_REPEATED_DIGITS;
    }

    // Check 4: ascending-adjacent pairs. The counter starts at 1 and never
    // resets - a non-digit pair just fails the comparison - so it holds the
    // cumulative pair count over the whole string, not the longest
    // contiguous run. Shipped behavior, kept as is.
    let chars: Vec<char> = cleaned.chars().collect();
    let mut sequential_count: usize = 1;
    for pair in chars.windows(2) {
        if let (Some(prev), Some(cur)) = (pair[0].to_digit(10), pair[1].to_digit(10)) {
            if cur == prev + 1 {
                sequential_count += 1;
            }
        }
    }
    if sequential_count >= rules::SEQUENTIAL_RUN_MIN {
        reasons.push("Contains long sequential digit pattern".to_string());
        confidence += rules::WEIGHT_SEQUENTIAL_RUN;
    }

    // Check 5: length of the cleaned string
    if chars.len() < rules::MIN_PHONE_LEN || chars.len() > rules::MAX_PHONE_LEN {
        reasons.push("Unusual phone number length".to_string());
        confidence += rules::WEIGHT_UNUSUAL_LENGTH;
    }

    let (is_spam, recommendation) = if confidence >= rules::BLOCK_THRESHOLD {
        (true, Recommendation::Block)
    } else if confidence >= rules::CAUTION_THRESHOLD {
        (true, Recommendation::Caution)
    } else {
        (false, Recommendation::Safe)
    };

    if reasons.is_empty() {
        reasons.push("No spam indicators detected".to_string());
    }

    PhoneCheckResult {
        phone: phone.to_string(),
        is_spam,
        confidence,
        reasons,
        recommendation,
        timestamp: Utc::now(),
    }
}

/// Strip whitespace, hyphens, and parentheses from the raw input.
fn normalize(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}
