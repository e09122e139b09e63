//! URL Scan Types
//!
//! Data structures only - the evaluation pipeline lives in `scanner`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RISK CLASSIFICATION
// ============================================================================

/// Discrete risk classification derived from the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No indicators worth acting on
    Safe,
    /// Enough indicators to warrant a second look
    Suspicious,
    /// Strong indicators, treat as phishing
    Dangerous,
    /// The input never parsed as a URL; no checks ran
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Suspicious => "suspicious",
            RiskLevel::Dangerous => "dangerous",
            RiskLevel::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCAN RESULT
// ============================================================================

/// Outcome of one URL scan. Built fresh per call, immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// The URL exactly as submitted
    pub url: String,
    pub is_phishing: bool,
    pub risk_level: RiskLevel,
    /// Additive suspicion accumulator - not a probability, not clamped
    pub confidence: u32,
    /// One entry per check that fired, in check order
    pub threats: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
