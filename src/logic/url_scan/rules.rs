//! URL Scan Rules & Weights
//!
//! Static tables and constants only - no evaluation logic. Initialized once
//! at startup and never mutated.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// TABLES
// ============================================================================

/// TLDs disproportionately used for throwaway phishing domains.
/// Suffix-match semantics.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq", ".pw", ".top", ".work", ".click", ".loan",
];

/// Exact-match allow-list. A hostname in this set is forced to `safe`
/// after all other checks have run.
pub const LEGITIMATE_DOMAINS: &[&str] = &[
    "google.com",
    "facebook.com",
    "amazon.com",
    "apple.com",
    "microsoft.com",
    "netflix.com",
];

/// Known look-alike domains per impersonated brand. Checked in order;
/// the first brand with a matching look-alike wins.
pub const TYPOSQUAT_DOMAINS: &[(&str, &[&str])] = &[
    ("google.com", &["goog1e.com", "gooogle.com", "googlle.com"]),
    ("facebook.com", &["faceb00k.com", "facebok.com", "faecbook.com"]),
    ("amazon.com", &["amaz0n.com", "amazonn.com", "arnazom.com"]),
];

/// Dotted-quad IPv4 literal. Digit-shape only, no octet range validation.
pub static IPV4_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

// ============================================================================
// WEIGHTS (added to the confidence accumulator per fired check)
// ============================================================================

/// Plain HTTP or any other non-https scheme
pub const WEIGHT_INSECURE_SCHEME: u32 = 15;

/// Hostname under a suspicious TLD
pub const WEIGHT_SUSPICIOUS_TLD: u32 = 25;

/// Hostname is a known typosquat
pub const WEIGHT_TYPOSQUAT: u32 = 40;

/// Hostname longer than MAX_HOSTNAME_LEN
pub const WEIGHT_LONG_HOSTNAME: u32 = 10;

/// `@` inside the hostname
pub const WEIGHT_AT_SYMBOL: u32 = 30;

/// More than MAX_HYPHENS hyphens in the hostname
pub const WEIGHT_EXCESSIVE_HYPHENS: u32 = 15;

/// Raw IPv4 literal instead of a domain name
pub const WEIGHT_IP_LITERAL: u32 = 20;

/// Hostname length above which the length check fires
pub const MAX_HOSTNAME_LEN: usize = 50;

/// Hyphen count above which the hyphen check fires
pub const MAX_HYPHENS: usize = 3;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// At or above this score the URL is dangerous and flagged as phishing
pub const DANGEROUS_THRESHOLD: u32 = 50;

/// At or above this score, below dangerous, the URL is suspicious
pub const SUSPICIOUS_THRESHOLD: u32 = 25;
