use crate::traits::aggregator::Aggregator;
use serde::{Deserialize, Serialize};

// Running confidence score for an annotation. Every piece of corroborating
// evidence pushes a delta; the normalized score is the mean delta clamped
// into [0, 1].

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAccumulator {
    score: i64,
    total_scores_applied: u64,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` to the running score and counts one more application,
    /// whatever the sign or magnitude of `delta`. Both saturate at their
    /// bounds instead of overflowing.
    pub fn add_score(&mut self, delta: i64) {
        self.score = self.score.saturating_add(delta);
        self.total_scores_applied = self.total_scores_applied.saturating_add(1);
    }

    /// Overrides the raw score.
    ///
    /// The application counter is left untouched, so the next
    /// [`ScoreAccumulator::normalized_score`] divides the new value by the
    /// number of `add_score` calls made so far (and stays 0.0 if there were
    /// none). Use [`ScoreAccumulator::reset`] to start over instead.
    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.total_scores_applied = 0;
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn total_scores_applied(&self) -> u64 {
        self.total_scores_applied
    }

    pub fn normalized_score(&self) -> f64 {
        if self.total_scores_applied == 0 {
            return 0.0;
        }
        let raw = self.score as f64 / self.total_scores_applied as f64;
        raw.clamp(0.0, 1.0)
    }
}

impl Aggregator for ScoreAccumulator {
    type Item = i64;
    type Output = f64;

    fn add(&mut self, item: impl Into<i64>) {
        self.add_score(item.into());
    }

    fn finalize(self) -> f64 {
        self.normalized_score()
    }
}
