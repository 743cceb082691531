// src/models/matching.rs
// Output types for the name/domain equivalence engine and the batch shell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way classification of a company-name / domain pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLabel {
    LikelyMatch,
    Unsure,
    LikelyNotMatch,
}

impl MatchLabel {
    /// Human-readable form used in output files and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::LikelyMatch => "Likely Match",
            MatchLabel::Unsure => "Unsure – Please Check",
            MatchLabel::LikelyNotMatch => "Likely NOT Match",
        }
    }
}

impl fmt::Display for MatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one comparison: label, confidence score in [0, 100], and a
/// short reason tag naming the rule that fired. Created fresh per call and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: MatchLabel,
    pub score: u8,
    pub reason: String,
}

impl Verdict {
    pub fn new(label: MatchLabel, score: u8, reason: impl Into<String>) -> Self {
        Self {
            label,
            score,
            reason: reason.into(),
        }
    }
}

/// One reconciled row from the batch shell.
#[derive(Debug, Clone, Serialize)]
pub struct RowOutcome {
    pub row_index: usize,
    pub company: Option<String>,
    pub domain: Option<String>,
    pub verdict: Verdict,
}

/// Aggregate counts for a batch run, logged as the run summary.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconciliationStats {
    pub rows_processed: usize,
    pub likely_match: usize,
    pub unsure: usize,
    pub likely_not_match: usize,
    pub score_sum: u64,
}

impl ReconciliationStats {
    pub fn record(&mut self, verdict: &Verdict) {
        self.rows_processed += 1;
        self.score_sum += verdict.score as u64;
        match verdict.label {
            MatchLabel::LikelyMatch => self.likely_match += 1,
            MatchLabel::Unsure => self.unsure += 1,
            MatchLabel::LikelyNotMatch => self.likely_not_match += 1,
        }
    }

    pub fn avg_score(&self) -> f64 {
        if self.rows_processed == 0 {
            0.0
        } else {
            self.score_sum as f64 / self.rows_processed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_display_forms() {
        assert_eq!(MatchLabel::LikelyMatch.as_str(), "Likely Match");
        assert_eq!(MatchLabel::Unsure.as_str(), "Unsure – Please Check");
        assert_eq!(MatchLabel::LikelyNotMatch.as_str(), "Likely NOT Match");
    }

    #[test]
    fn test_stats_accumulation() {
        let mut stats = ReconciliationStats::default();
        stats.record(&Verdict::new(MatchLabel::LikelyMatch, 100, "direct containment"));
        stats.record(&Verdict::new(MatchLabel::Unsure, 0, "missing input"));
        stats.record(&Verdict::new(MatchLabel::LikelyNotMatch, 40, "low similarity"));

        assert_eq!(stats.rows_processed, 3);
        assert_eq!(stats.likely_match, 1);
        assert_eq!(stats.unsure, 1);
        assert_eq!(stats.likely_not_match, 1);
        assert!((stats.avg_score() - 140.0 / 3.0).abs() < 1e-9);
    }
}
