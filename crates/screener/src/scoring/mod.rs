//! Deterministic scoring rules.
//!
//! All weights and ranges are fixed constants; nothing here is learned.

pub mod content;
pub mod structure;

use serde::{Deserialize, Serialize};

pub use content::content_score;
pub use structure::{score_document, structure_score};

pub const CONTENT_WEIGHT: f64 = 0.7;
pub const STRUCTURE_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn for_score(final_score: f64, threshold: f64) -> Self {
        if final_score >= threshold {
            Status::Pass
        } else {
            Status::Fail
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// Rounds to one decimal place.
///
/// Rounds the exact binary value rather than `value * 10`, so `6.95`
/// (stored just below the tie) becomes `6.9`. Exact ties go to even.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// `round(content * 0.7 + structure * 0.3, 1)`
pub fn final_score(content_score: f64, structure_score: u8) -> f64 {
    round1(content_score * CONTENT_WEIGHT + f64::from(structure_score) * STRUCTURE_WEIGHT)
}
