//! Scorer — folds weighted matched/missing counts into a 0–100 score.

use serde::{Deserialize, Serialize};

/// Reported when nothing in the job text was recognizable.
pub const NEUTRAL_SCORE: u32 = 50;

const LOW_MATCH_BELOW: u32 = 40;
const STRONG_MATCH_FROM: u32 = 70;

/// Matched/missing counts for one category and what each item is worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTally {
    pub matched: usize,
    pub missing: usize,
    pub weight: f64,
}

impl WeightedTally {
    pub fn new(matched: usize, missing: usize, weight: f64) -> Self {
        Self {
            matched,
            missing,
            weight,
        }
    }

    fn earned(&self) -> f64 {
        self.matched as f64 * self.weight
    }

    fn possible(&self) -> f64 {
        (self.matched + self.missing) as f64 * self.weight
    }
}

/// score = round(100 × earned / possible), clamped to [0, 100].
/// Returns `NEUTRAL_SCORE` when no category has anything to score.
pub fn compute_score(tallies: &[WeightedTally]) -> u32 {
    let earned: f64 = tallies.iter().map(WeightedTally::earned).sum();
    let possible: f64 = tallies.iter().map(WeightedTally::possible).sum();

    if possible <= 0.0 {
        return NEUTRAL_SCORE;
    }

    ((earned / possible) * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Score band, shared by the feedback verdict and the response label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Low,
    Moderate,
    Strong,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        if score < LOW_MATCH_BELOW {
            MatchTier::Low
        } else if score < STRONG_MATCH_FROM {
            MatchTier::Moderate
        } else {
            MatchTier::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Low => "Low Match",
            MatchTier::Moderate => "Moderate Match",
            MatchTier::Strong => "Strong Match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tallies_score_neutral() {
        assert_eq!(compute_score(&[]), NEUTRAL_SCORE);
        assert_eq!(
            compute_score(&[WeightedTally::new(0, 0, 2.5), WeightedTally::new(0, 0, 0.2)]),
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn test_all_matched_is_100() {
        let tallies = [WeightedTally::new(3, 0, 2.5), WeightedTally::new(2, 0, 1.0)];
        assert_eq!(compute_score(&tallies), 100);
    }

    #[test]
    fn test_all_missing_is_0() {
        let tallies = [WeightedTally::new(0, 4, 1.5)];
        assert_eq!(compute_score(&tallies), 0);
    }

    #[test]
    fn test_weighted_ratio() {
        // earned 2.5 + 0.2 = 2.7, possible 2.5 + 1.5 + 0.4 = 4.4 → 61.36 → 61
        let tallies = [
            WeightedTally::new(1, 0, 2.5),
            WeightedTally::new(0, 1, 1.5),
            WeightedTally::new(1, 1, 0.2),
        ];
        assert_eq!(compute_score(&tallies), 61);
    }

    #[test]
    fn test_rounds_half_up() {
        // 1 of 8 equal items = 12.5 → 13
        let tallies = [WeightedTally::new(1, 7, 1.0)];
        assert_eq!(compute_score(&tallies), 13);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(MatchTier::from_score(0), MatchTier::Low);
        assert_eq!(MatchTier::from_score(39), MatchTier::Low);
        assert_eq!(MatchTier::from_score(40), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(69), MatchTier::Moderate);
        assert_eq!(MatchTier::from_score(70), MatchTier::Strong);
        assert_eq!(MatchTier::from_score(100), MatchTier::Strong);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(MatchTier::Low.label(), "Low Match");
        assert_eq!(MatchTier::Strong.label(), "Strong Match");
    }
}
