//! Per-face score breakdown for diagnostics and display.

use serde::{Deserialize, Serialize};

use crate::core::{DieFace, FACE_COUNT};

/// Where the points of a roll came from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Points earned by each face, indexed by `DieFace::index()`.
    pub points: [u32; FACE_COUNT],

    /// Dice that earned points.
    pub scoring_dice: u32,

    /// Dice that earned nothing, including values that are not die faces.
    pub non_scoring_dice: u32,
}

impl ScoreBreakdown {
    /// Create an empty breakdown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points earned by one face.
    #[must_use]
    pub fn points_for(&self, face: DieFace) -> u32 {
        self.points[face.index()]
    }

    /// Total score of the roll.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.points.iter().fold(0u32, |acc, &p| acc.saturating_add(p))
    }

    /// Did every die in the roll score?
    ///
    /// An empty roll does not count as a full score.
    #[must_use]
    pub fn all_dice_scored(&self) -> bool {
        self.scoring_dice > 0 && self.non_scoring_dice == 0
    }

    /// Iterate over faces that earned points.
    pub fn scoring_faces(&self) -> impl Iterator<Item = (DieFace, u32)> + '_ {
        DieFace::all()
            .map(move |face| (face, self.points_for(face)))
            .filter(|&(_, points)| points > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_default() {
        let breakdown = ScoreBreakdown::new();
        assert_eq!(breakdown.total(), 0);
        assert!(!breakdown.all_dice_scored());
        assert_eq!(breakdown.scoring_faces().count(), 0);
    }

    #[test]
    fn test_breakdown_total() {
        let mut breakdown = ScoreBreakdown::new();
        breakdown.points[DieFace::TWO.index()] = 200;
        breakdown.points[DieFace::FIVE.index()] = 50;
        breakdown.scoring_dice = 4;
        breakdown.non_scoring_dice = 1;

        assert_eq!(breakdown.total(), 250);
        assert_eq!(breakdown.points_for(DieFace::FIVE), 50);
        assert!(!breakdown.all_dice_scored());

        let faces: Vec<_> = breakdown.scoring_faces().collect();
        assert_eq!(faces, vec![(DieFace::TWO, 200), (DieFace::FIVE, 50)]);
    }

    #[test]
    fn test_breakdown_serialization() {
        let mut breakdown = ScoreBreakdown::new();
        breakdown.points[0] = 1000;
        breakdown.scoring_dice = 3;

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: ScoreBreakdown = serde_json::from_str(&json).unwrap();

        assert_eq!(breakdown, deserialized);
    }
}
