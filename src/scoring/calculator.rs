//! Score calculation for a single roll.
//!
//! Scoring is a pure function of the face counts: count each face, look
//! up its points in the rule table, and sum. Input dice are never
//! modified and nothing is cached, so one calculator can be shared freely
//! across threads.

use tracing::{debug, trace};

use super::breakdown::ScoreBreakdown;
use crate::core::roll::validate_dice;
use crate::core::{DieFace, FaceCounts, ScoringRules};
use crate::error::Result;

/// Scores rolls against a rule table.
///
/// ```
/// use greed_score::ScoreCalculator;
///
/// let calc = ScoreCalculator::default();
/// assert_eq!(calc.score(&[2, 5, 2, 2, 3]), 250);
/// assert_eq!(calc.score(&[]), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScoreCalculator {
    rules: ScoringRules,
}

impl ScoreCalculator {
    /// Create a calculator for a custom rule table.
    pub fn new(rules: ScoringRules) -> Result<Self> {
        if let Err(err) = rules.validate() {
            debug!(%err, "rejected scoring rules");
            return Err(err);
        }
        Ok(Self { rules })
    }

    /// Get the rule table.
    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Count the faces of a roll.
    #[must_use]
    pub fn counts(&self, dice: &[u8]) -> FaceCounts {
        FaceCounts::from_dice(dice)
    }

    /// Score a roll.
    ///
    /// Dice are raw `u8` face values; callers holding wider integers convert
    /// first. Values outside 1..=6 are ignored and earn nothing.
    #[must_use]
    pub fn score(&self, dice: &[u8]) -> u32 {
        let counts = self.counts(dice);
        let total = counts
            .iter()
            .map(|(face, count)| self.rules.points(face, count))
            .fold(0u32, u32::saturating_add);

        trace!(dice = ?dice, total, "scored roll");
        total
    }

    /// Score a roll, rejecting values outside 1..=6.
    ///
    /// Returns the same score as `score` for any valid roll.
    pub fn try_score(&self, dice: &[u8]) -> Result<u32> {
        if let Err(err) = validate_dice(dice) {
            debug!(%err, "rejected roll");
            return Err(err);
        }
        Ok(self.score(dice))
    }

    /// Score a roll and report where the points came from.
    #[must_use]
    pub fn breakdown(&self, dice: &[u8]) -> ScoreBreakdown {
        let counts = self.counts(dice);
        let set_size = self.rules.set_size();
        let mut breakdown = ScoreBreakdown::new();

        for (face, count) in counts.iter() {
            let rule = self.rules.face(face);
            breakdown.points[face.index()] = rule.points(count, set_size);
            breakdown.scoring_dice += rule.scoring_dice(count, set_size);
        }
        breakdown.non_scoring_dice = u32::try_from(dice.len())
            .unwrap_or(u32::MAX)
            .saturating_sub(breakdown.scoring_dice);

        trace!(
            dice = ?dice,
            total = breakdown.total(),
            scoring_dice = breakdown.scoring_dice,
            "broke down roll"
        );
        breakdown
    }

    /// Points one face earns for `count` dice.
    #[must_use]
    pub fn face_points(&self, face: DieFace, count: u32) -> u32 {
        self.rules.points(face, count)
    }
}

/// Score a roll with standard Greed rules.
///
/// Dice are raw `u8` face values. Values outside 1..=6 earn nothing; use
/// `try_score` to reject them instead.
///
/// ```
/// assert_eq!(greed_score::score(&[1, 1, 1, 1]), 1100);
/// assert_eq!(greed_score::score(&[5, 5, 5, 5]), 550);
/// ```
#[must_use]
pub fn score(dice: &[u8]) -> u32 {
    ScoreCalculator::default().score(dice)
}

/// Score a roll with standard Greed rules, rejecting values outside 1..=6.
pub fn try_score(dice: &[u8]) -> Result<u32> {
    ScoreCalculator::default().try_score(dice)
}
