//! Rolls and their face counts.
//!
//! ## Roll
//!
//! The dice of a single throw, kept in the order they were given.
//! Backed by `SmallVec` so a normal five-dice roll never allocates.
//!
//! ## FaceCounts
//!
//! The multiset view of a roll: how many dice show each face. Scoring
//! only ever looks at this view, which is why order never matters.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::die::{DieFace, FACE_COUNT};
use crate::error::{Result, ScoreError};

/// Dice from a single throw, in throw order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    dice: SmallVec<[u8; 6]>,
}

impl Roll {
    /// Create an empty roll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roll from raw face values. Values are not checked.
    #[must_use]
    pub fn from_slice(dice: &[u8]) -> Self {
        Self {
            dice: SmallVec::from_slice(dice),
        }
    }

    /// Add a die to the roll.
    #[must_use]
    pub fn with_die(mut self, face: DieFace) -> Self {
        self.dice.push(face.value());
        self
    }

    /// Get the dice as raw values.
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// Number of dice in the roll.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Is the roll empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Check every die is in 1..=6.
    ///
    /// Reports the first offending die and its position.
    pub fn validate(&self) -> Result<()> {
        validate_dice(&self.dice)
    }

    /// Count faces in this roll.
    #[must_use]
    pub fn counts(&self) -> FaceCounts {
        FaceCounts::from_dice(&self.dice)
    }
}

impl From<&[u8]> for Roll {
    fn from(dice: &[u8]) -> Self {
        Self::from_slice(dice)
    }
}

impl<const N: usize> From<[u8; N]> for Roll {
    fn from(dice: [u8; N]) -> Self {
        Self::from_slice(&dice)
    }
}

impl FromIterator<DieFace> for Roll {
    fn from_iter<I: IntoIterator<Item = DieFace>>(iter: I) -> Self {
        Self {
            dice: iter.into_iter().map(DieFace::value).collect(),
        }
    }
}

impl AsRef<[u8]> for Roll {
    fn as_ref(&self) -> &[u8] {
        &self.dice
    }
}

/// Check that every value is a real die face.
pub(crate) fn validate_dice(dice: &[u8]) -> Result<()> {
    match dice.iter().position(|&d| !DieFace::is_valid(d)) {
        Some(position) => Err(ScoreError::InvalidFace {
            face: dice[position],
            position,
        }),
        None => Ok(()),
    }
}

/// How many dice show each face.
///
/// Values outside 1..=6 are not counted against any face; they are
/// tallied in `ignored` instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceCounts {
    counts: [u32; FACE_COUNT],
    ignored: u32,
}

impl FaceCounts {
    /// Count the faces in a slice of raw die values.
    #[must_use]
    pub fn from_dice(dice: &[u8]) -> Self {
        let mut out = Self::default();
        for &die in dice {
            match DieFace::checked(die) {
                Some(face) => out.counts[face.index()] += 1,
                None => out.ignored += 1,
            }
        }
        out
    }

    /// Number of dice showing `face`.
    #[must_use]
    pub fn get(&self, face: DieFace) -> u32 {
        self.counts[face.index()]
    }

    /// Number of values that were not a die face.
    #[must_use]
    pub fn ignored(&self) -> u32 {
        self.ignored
    }

    /// Number of counted dice (excludes ignored values).
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over (DieFace, count) pairs in face order.
    pub fn iter(&self) -> impl Iterator<Item = (DieFace, u32)> + '_ {
        DieFace::all().map(move |face| (face, self.get(face)))
    }
}

impl Index<DieFace> for FaceCounts {
    type Output = u32;

    fn index(&self, face: DieFace) -> &Self::Output {
        &self.counts[face.index()]
    }
}
