//! Phone Check Types
//!
//! Data structures only - the evaluation pipeline lives in `checker`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RECOMMENDATION
// ============================================================================

/// What the caller should do with the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    /// Answer normally
    Safe,
    /// Likely spam, pick up with care
    Caution,
    /// Spam, reject outright
    Block,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Safe => "safe",
            Recommendation::Caution => "caution",
            Recommendation::Block => "block",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CHECK RESULT
// ============================================================================

/// Outcome of one phone check. Built fresh per call, immutable once returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCheckResult {
    /// The number exactly as submitted
    pub phone: String,
    pub is_spam: bool,
    /// Additive suspicion accumulator - not a probability, not clamped
    pub confidence: u32,
    /// One entry per check that fired, or the no-indicators sentinel
    pub reasons: Vec<String>,
    pub recommendation: Recommendation,
    pub timestamp: DateTime<Utc>,
}
