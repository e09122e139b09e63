//! Phone Risk Evaluator
//!
//! Classifies a phone number as safe/caution/block by normalizing the raw
//! input, running a fixed sequence of pattern and statistical checks, and
//! thresholding the accumulated confidence score.
//!
//! ## Structure
//! - `types`: PhoneCheckResult and Recommendation
//! - `rules`: spam pattern tables, weights, and thresholds
//! - `checker`: the evaluation pipeline

pub mod checker;
pub mod rules;
pub mod types;


pub use checker::check_phone;
pub use types::{PhoneCheckResult, Recommendation};
