//! Score accumulation and timing

use bevy::prelude::*;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Running total across completed rolls. Only ever increases.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Score {
    pub total: u64,
}

impl Score {
    /// Record a rolled value.
    pub fn add(&mut self, outcome: u32) {
        self.total += u64::from(outcome);
    }
}

/// When a roll's value is added to the score.
///
/// `Trigger` scores the instant the roll starts, before the animation
/// resolves; `Settle` waits until the die lands. Trigger is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTiming {
    #[default]
    Trigger,
    Settle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accumulates_outcomes() {
        let mut score = Score::default();
        for outcome in [3, 6, 1, 4] {
            score.add(outcome);
        }
        assert_eq!(score.total, 14);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut score = Score::default();
        let mut previous = 0;
        for outcome in 1..=6 {
            score.add(outcome);
            assert!(score.total > previous);
            previous = score.total;
        }
    }

    #[test]
    fn test_score_timing_default_is_trigger() {
        assert_eq!(ScoreTiming::default(), ScoreTiming::Trigger);
    }
}
