//! URL Risk Evaluator
//!
//! Classifies a URL as safe/suspicious/dangerous by running a fixed sequence
//! of structural checks against its hostname and scheme, accumulating a
//! confidence score, and thresholding the total. A small allow-list of
//! verified domains overrides the scored outcome.
//!
//! ## Structure
//! - `types`: ScanResult and RiskLevel
//! - `rules`: static tables, weights, and thresholds
//! - `scanner`: the evaluation pipeline

pub mod rules;
pub mod scanner;
pub mod types;

#[cfg(test)]
mod tests;

pub use scanner::scan_url;
pub use types::{RiskLevel, ScanResult};
