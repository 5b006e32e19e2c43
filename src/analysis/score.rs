//! Score ledger
//!
//! Every delta is recorded with the check and finding that caused it, so a
//! final score can always be explained line by line.

use crate::analysis::finding::Check;

/// Score every analysis starts from
pub const BASE_SCORE: i32 = 100;

/// Lowest and highest reportable score
pub const SCORE_RANGE: (i32, i32) = (0, 100);

/// One additive score change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAdjustment {
    pub check: Check,
    pub delta: i32,
    /// Message of the triggering finding
    pub finding: String,
}

/// A hard upper bound imposed by a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCeiling {
    pub check: Check,
    pub max: i32,
    pub finding: String,
}

/// Ordered record of score changes, folded into a total on demand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreLedger {
    adjustments: Vec<ScoreAdjustment>,
    ceiling: Option<ScoreCeiling>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a delta; zero deltas are not recorded
    pub fn record(&mut self, check: Check, delta: i32, finding: impl Into<String>) {
        if delta == 0 {
            return;
        }
        self.adjustments.push(ScoreAdjustment {
            check,
            delta,
            finding: finding.into(),
        });
    }

    /// Imposes a ceiling; the lowest ceiling wins
    pub fn cap(&mut self, check: Check, max: i32, finding: impl Into<String>) {
        if self.ceiling.as_ref().is_some_and(|current| current.max <= max) {
            return;
        }
        self.ceiling = Some(ScoreCeiling {
            check,
            max,
            finding: finding.into(),
        });
    }

    pub fn adjustments(&self) -> &[ScoreAdjustment] {
        &self.adjustments
    }

    pub fn ceiling(&self) -> Option<&ScoreCeiling> {
        self.ceiling.as_ref()
    }

    /// Sum of the deltas recorded for `check`
    pub fn delta_for(&self, check: Check) -> i32 {
        self.adjustments
            .iter()
            .filter(|adjustment| adjustment.check == check)
            .map(|adjustment| adjustment.delta)
            .sum()
    }

    /// Base plus every delta, before ceiling and clamp
    pub fn raw_total(&self) -> i32 {
        BASE_SCORE + self.adjustments.iter().map(|a| a.delta).sum::<i32>()
    }

    /// Final score: raw total, capped by the ceiling, clamped to 0..=100
    pub fn total(&self) -> u8 {
        let capped = match &self.ceiling {
            Some(ceiling) => self.raw_total().min(ceiling.max),
            None => self.raw_total(),
        };
        // In range after the clamp
        capped.clamp(SCORE_RANGE.0, SCORE_RANGE.1) as u8
    }
}
