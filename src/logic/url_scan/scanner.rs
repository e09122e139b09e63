//! URL Evaluation Pipeline
//!
//! Pure function of the input plus the static tables in `rules`. Checks run
//! in a fixed order and accumulate additively; classification happens once
//! at the end, and the allow-list override is applied last.

use chrono::Utc;
use url::Url;

use super::rules;
use super::types::{RiskLevel, ScanResult};

/// Score `url` against the phishing rule tables.
///
/// Total over all inputs: strings that do not parse as an absolute URL come
/// back as `RiskLevel::Unknown` with a single sentinel threat entry.
pub fn scan_url(url: &str) -> ScanResult {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => {
            return ScanResult {
                url: url.to_string(),
                is_phishing: false,
                risk_level: RiskLevel::Unknown,
                confidence: 0,
                threats: vec!["Invalid URL format".to_string()],
                timestamp: Utc::now(),
            }
        }
    };

    // Some schemes (data:, mailto:) parse without a host; the checks then
    // run against the empty hostname.
    let hostname = parsed.host_str().unwrap_or("").to_lowercase();

    let mut confidence: u32 = 0;
    let mut threats = Vec::new();

    // Check 1: HTTPS
    if parsed.scheme() != "https" {
        threats.push("Not using HTTPS - insecure connection".to_string());
        confidence += rules::WEIGHT_INSECURE_SCHEME;
    }

    // Check 2: suspicious TLD (boolean OR across the set, one reason at most)
    if rules::SUSPICIOUS_TLDS.iter().any(|tld| hostname.ends_with(tld)) {
        threats.push("Suspicious top-level domain".to_string());
        confidence += rules::WEIGHT_SUSPICIOUS_TLD;
    }

    // Check 3: typosquatting, first impersonated brand wins
    for (legit, fakes) in rules::TYPOSQUAT_DOMAINS {
        if fakes.contains(&hostname.as_str()) {
            threats.push(format!("Typosquatting attempt - impersonating {}", legit));
            confidence += rules::WEIGHT_TYPOSQUAT;
            break;
        }
    }

    // Check 4: hostname shape
    if hostname.len() > rules::MAX_HOSTNAME_LEN {
        threats.push("Unusually long domain name".to_string());
        confidence += rules::WEIGHT_LONG_HOSTNAME;
    }

    // A compliant parser never leaves `@` inside the host; this catches
    // malformed input that still reached this stage.
    if hostname.contains('@') {
        threats.push("Contains @ symbol (potential credential phishing)".to_string());
        confidence += rules::WEIGHT_AT_SYMBOL;
    }

    if hostname.matches('-').count() > rules::MAX_HYPHENS {
        threats.push("Excessive hyphens in domain".to_string());
        confidence += rules::WEIGHT_EXCESSIVE_HYPHENS;
    }

    // Check 5: raw IPv4 literal
    if rules::IPV4_LITERAL.is_match(&hostname) {
        threats.push("Using IP address instead of domain name".to_string());
        confidence += rules::WEIGHT_IP_LITERAL;
    }

    let (risk_level, is_phishing) = if confidence >= rules::DANGEROUS_THRESHOLD {
        (RiskLevel::Dangerous, true)
    } else if confidence >= rules::SUSPICIOUS_THRESHOLD {
        (RiskLevel::Suspicious, false)
    } else {
        (RiskLevel::Safe, false)
    };

    let mut result = ScanResult {
        url: url.to_string(),
        is_phishing,
        risk_level,
        confidence,
        threats,
        timestamp: Utc::now(),
    };

    // Allow-list override. Replaces level, score and reasons wholesale;
    // the phishing flag keeps whatever the thresholds computed.
    if rules::LEGITIMATE_DOMAINS.contains(&hostname.as_str()) {
        result.risk_level = RiskLevel::Safe;
        result.confidence = 0;
        result.threats = vec!["Verified legitimate website".to_string()];
    }

    result
}
