//! Scoring logic
//!
//! Pure rule-accumulator evaluators over static read-only tables. No I/O,
//! no shared mutable state - safe to call concurrently from any number of
//! request workers without coordination.
//!
//! ## Structure
//! - `url_scan`: URL phishing evaluator
//! - `phone_check`: phone spam evaluator

pub mod phone_check;
pub mod url_scan;

/// Revision marker for the built-in rule tables, reported by the
/// threat-summary endpoint.
pub const TABLES_LAST_UPDATED: &str = "2025-11-04";
