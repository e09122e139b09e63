use super::rules;
use super::scanner::scan_url;
use super::types::RiskLevel;

#[test]
fn test_allowlist_override() {
    let result = scan_url("https://google.com");
    assert_eq!(result.risk_level, RiskLevel::Safe);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.threats, vec!["Verified legitimate website".to_string()]);
    assert!(!result.is_phishing);
}

#[test]
fn test_allowlist_override_wipes_scheme_score() {
    // http:// scores 15 before the override zeroes it out
    let result = scan_url("http://google.com");
    assert_eq!(result.risk_level, RiskLevel::Safe);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.threats, vec!["Verified legitimate website".to_string()]);
    assert!(!result.is_phishing);
}

#[test]
fn test_typosquat_over_http_is_dangerous() {
    let result = scan_url("http://goog1e.com");
    assert!(result.threats.iter().any(|t| t.contains("google.com")));
    // 40 (typosquat) + 15 (no https)
    assert_eq!(result.confidence, 55);
    assert_eq!(result.risk_level, RiskLevel::Dangerous);
    assert!(result.is_phishing);
}

#[test]
fn test_typosquat_first_brand_wins() {
    let result = scan_url("https://amaz0n.com");
    let typo_reasons: Vec<_> = result
        .threats
        .iter()
        .filter(|t| t.contains("Typosquatting"))
        .collect();
    assert_eq!(typo_reasons.len(), 1);
    assert!(typo_reasons[0].contains("amazon.com"));
}

#[test]
fn test_malformed_url() {
    let result = scan_url("not a url");
    assert_eq!(result.risk_level, RiskLevel::Unknown);
    assert_eq!(result.confidence, 0);
    assert_eq!(result.threats, vec!["Invalid URL format".to_string()]);
    assert!(!result.is_phishing);
}

#[test]
fn test_ip_literal() {
    let result = scan_url("https://192.168.1.1");
    assert!(result.confidence >= rules::WEIGHT_IP_LITERAL);
    assert!(result.threats.iter().any(|t| t.contains("IP address")));
}

#[test]
fn test_tld_suffix_must_match_exactly() {
    let flagged = scan_url("https://example.tk");
    assert!(flagged.threats.iter().any(|t| t.contains("top-level domain")));
    assert_eq!(flagged.confidence, rules::WEIGHT_SUSPICIOUS_TLD);

    // .tko is not .tk - the suffix has to match to the end
    let clean = scan_url("https://example.tko");
    assert!(!clean.threats.iter().any(|t| t.contains("top-level domain")));
    assert_eq!(clean.confidence, 0);
}

#[test]
fn test_hyphen_gate_is_boolean() {
    // three hyphens stay quiet, four or more fire exactly once
    let three = scan_url("https://a-b-c-d.com");
    assert!(!three.threats.iter().any(|t| t.contains("hyphens")));

    let four = scan_url("https://a-b-c-d-e.com");
    let five = scan_url("https://a-b-c-d-e-f.com");
    assert_eq!(four.threats.iter().filter(|t| t.contains("hyphens")).count(), 1);
    assert_eq!(four.confidence, five.confidence);
}

#[test]
fn test_long_hostname() {
    let url = format!("https://{}.com", "a".repeat(60));
    let result = scan_url(&url);
    assert!(result.threats.iter().any(|t| t.contains("long domain")));
    assert_eq!(result.confidence, rules::WEIGHT_LONG_HOSTNAME);
}

#[test]
fn test_checks_accumulate() {
    // suspicious TLD over plain http: 15 + 25
    let result = scan_url("http://example.tk");
    assert_eq!(result.confidence, 40);
    assert_eq!(result.risk_level, RiskLevel::Suspicious);
    assert!(!result.is_phishing);
    assert_eq!(result.threats.len(), 2);
}

#[test]
fn test_safe_https_domain_has_no_threats() {
    let result = scan_url("https://example.com");
    assert_eq!(result.risk_level, RiskLevel::Safe);
    assert_eq!(result.confidence, 0);
    assert!(result.threats.is_empty());
    assert!(!result.is_phishing);
}

#[test]
fn test_hostname_is_lowercased_before_checks() {
    let result = scan_url("https://GOOGLE.COM");
    assert_eq!(result.threats, vec!["Verified legitimate website".to_string()]);
}

#[test]
fn test_idempotent() {
    let a = scan_url("http://goog1e.com");
    let b = scan_url("http://goog1e.com");
    assert_eq!(a.confidence, b.confidence);
    assert_eq!(a.threats, b.threats);
    assert_eq!(a.risk_level, b.risk_level);
    assert_eq!(a.is_phishing, b.is_phishing);
}
