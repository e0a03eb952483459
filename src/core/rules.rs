//! The scoring rule table.
//!
//! Every face is scored by a `FaceRule`:
//! - `single`: points per die that is not part of a set
//! - `set`: points for a set of `set_size` dice of that face
//!
//! Dice beyond a completed set score as singles again, so a rule table
//! fully determines the points for any count. `ScoringRules::greed()` is
//! the standard table; house rules can be built with the builder methods
//! or loaded through serde.

use serde::{Deserialize, Serialize};

use super::die::{DieFace, FACE_COUNT};
use crate::error::{Result, ScoreError};

/// Dice needed for a set in standard Greed.
pub const DEFAULT_SET_SIZE: u32 = 3;

/// Points awarded for one face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceRule {
    /// Points per die outside a set.
    pub single: u32,

    /// Points for a complete set.
    pub set: u32,
}

impl FaceRule {
    /// Create a rule.
    #[must_use]
    pub const fn new(single: u32, set: u32) -> Self {
        Self { single, set }
    }

    /// A face that only scores as part of a set.
    #[must_use]
    pub const fn set_only(set: u32) -> Self {
        Self::new(0, set)
    }

    /// Points for `count` dice of this face.
    ///
    /// Below `set_size` every die is a single. At or above it, the set is
    /// paid once and the remaining dice are singles.
    #[must_use]
    pub fn points(&self, count: u32, set_size: u32) -> u32 {
        if count < set_size {
            self.single.saturating_mul(count)
        } else {
            self.set
                .saturating_add(self.single.saturating_mul(count - set_size))
        }
    }

    /// How many of `count` dice earn points under this rule.
    #[must_use]
    pub fn scoring_dice(&self, count: u32, set_size: u32) -> u32 {
        let (set_dice, single_dice) = if count >= set_size {
            (set_size, count - set_size)
        } else {
            (0, count)
        };
        let in_set = if self.set > 0 { set_dice } else { 0 };
        let singles = if self.single > 0 { single_dice } else { 0 };
        in_set + singles
    }
}

/// Complete rule table: one `FaceRule` per face plus the set size.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Rules indexed by `DieFace::index()`.
    faces: [FaceRule; FACE_COUNT],

    /// Dice of one face needed to complete a set.
    #[serde(default = "default_set_size")]
    set_size: u32,
}

fn default_set_size() -> u32 {
    DEFAULT_SET_SIZE
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::greed()
    }
}

impl ScoringRules {
    /// Standard Greed rules.
    ///
    /// | face | single | set |
    /// |------|--------|-----|
    /// | 1    | 100    | 1000 |
    /// | 5    | 50     | 500 |
    /// | n    | 0      | n × 100 |
    #[must_use]
    pub fn greed() -> Self {
        let mut faces = [FaceRule::default(); FACE_COUNT];
        for face in DieFace::all() {
            faces[face.index()] = FaceRule::set_only(u32::from(face.value()) * 100);
        }
        faces[DieFace::ONE.index()] = FaceRule::new(100, 1000);
        faces[DieFace::FIVE.index()] = FaceRule::new(50, 500);

        Self {
            faces,
            set_size: DEFAULT_SET_SIZE,
        }
    }

    /// A table where nothing scores. Useful as a base for house rules.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            faces: [FaceRule::default(); FACE_COUNT],
            set_size: DEFAULT_SET_SIZE,
        }
    }

    /// Replace the rule for one face.
    #[must_use]
    pub fn with_face(mut self, face: DieFace, rule: FaceRule) -> Self {
        self.faces[face.index()] = rule;
        self
    }

    /// Set the number of dice that make a set.
    #[must_use]
    pub fn with_set_size(mut self, set_size: u32) -> Self {
        self.set_size = set_size;
        self
    }

    /// Get the rule for a face.
    #[must_use]
    pub fn face(&self, face: DieFace) -> &FaceRule {
        &self.faces[face.index()]
    }

    /// Get the set size.
    #[must_use]
    pub fn set_size(&self) -> u32 {
        self.set_size
    }

    /// Points for `count` dice of `face`.
    #[must_use]
    pub fn points(&self, face: DieFace, count: u32) -> u32 {
        self.face(face).points(count, self.set_size)
    }

    /// Check the table can be used for scoring.
    ///
    /// A set size of zero would pay the set for a face that never came up.
    pub fn validate(&self) -> Result<()> {
        if self.set_size == 0 {
            return Err(ScoreError::InvalidRules(
                "set size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
