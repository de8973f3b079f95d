// Scoring engine — five independent analyzers and the combiner.
//
// Each analyzer is a pure function from a Profile to a SubAnalysis: a score
// and confidence in [0, 1] plus analyzer-specific details. The combiner in
// `analysis` weights the five scores into the final Analysis.

pub mod analysis;
pub mod completeness;
pub mod content;
pub mod engagement;
pub mod followers;
pub mod username;
pub mod verdict;
pub mod weights;

use serde::{Deserialize, Serialize};

/// The result of one analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAnalysis<D> {
    /// Fake-likelihood contribution, 0.0 (genuine) to 1.0 (fake)
    pub score: f64,
    /// How sure the analyzer is about its score, 0.0 to 1.0
    pub confidence: f64,
    /// Which checks fired, for diagnostics only
    pub details: D,
}

/// Running score/confidence accumulator shared by the analyzers.
///
/// Every check adds a fixed increment to both values. Increments are never
/// negative, so only the upper bound needs clamping when the tally is closed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tally {
    score: f64,
    confidence: f64,
}

impl Tally {
    pub(crate) fn new(base_confidence: f64) -> Self {
        Self {
            score: 0.0,
            confidence: base_confidence,
        }
    }

    /// Add a check's increments when it fired. Returns `fired` so callers can
    /// record the flag in the same expression.
    pub(crate) fn add_if(&mut self, fired: bool, score: f64, confidence: f64) -> bool {
        if fired {
            self.score += score;
            self.confidence += confidence;
        }
        fired
    }

    pub(crate) fn score(&self) -> f64 {
        self.score
    }

    pub(crate) fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    pub(crate) fn finish<D>(self, details: D) -> SubAnalysis<D> {
        SubAnalysis {
            score: self.score.min(1.0),
            confidence: self.confidence.min(1.0),
            details,
        }
    }
}
