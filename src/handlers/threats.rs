//! Threat-table summary handler

use axum::Json;
use serde::Serialize;

use crate::logic::{phone_check, url_scan, TABLES_LAST_UPDATED};

/// Read-only counts over the static rule tables. No evaluator runs here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatSummary {
    pub total_threats: usize,
    pub suspicious_tlds: usize,
    pub legitimate_domains: usize,
    pub typosquat_domains: usize,
    pub spam_patterns: usize,
    pub spam_prefixes: usize,
    pub last_updated: &'static str,
}

pub async fn summary() -> Json<ThreatSummary> {
    let suspicious_tlds = url_scan::rules::SUSPICIOUS_TLDS.len();
    let typosquat_domains: usize = url_scan::rules::TYPOSQUAT_DOMAINS
        .iter()
        .map(|(_, fakes)| fakes.len())
        .sum();
    let spam_patterns = phone_check::rules::SPAM_PATTERNS.len();
    let spam_prefixes = phone_check::rules::KNOWN_SPAM_PREFIXES.len();

    Json(ThreatSummary {
        total_threats: suspicious_tlds + typosquat_domains + spam_patterns + spam_prefixes,
        suspicious_tlds,
        legitimate_domains: url_scan::rules::LEGITIMATE_DOMAINS.len(),
        typosquat_domains,
        spam_patterns,
        spam_prefixes,
        last_updated: TABLES_LAST_UPDATED,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_match_tables() {
        let res = tokio_test::block_on(summary());
        assert_eq!(res.0.suspicious_tlds, 10);
        assert_eq!(res.0.legitimate_domains, 6);
        assert_eq!(res.0.typosquat_domains, 9);
        assert_eq!(res.0.spam_patterns, 4);
        assert_eq!(res.0.spam_prefixes, 5);
        assert_eq!(res.0.total_threats, 10 + 9 + 4 + 5);
    }
}
