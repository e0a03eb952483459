//! Die faces.
//!
//! `DieFace` is a validated face value in 1..=6. Plain scoring works on
//! raw `u8` values and never builds one; it exists for callers that want
//! the range checked up front and for indexing `FaceCounts`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Number of faces on a die.
pub const FACE_COUNT: usize = 6;

/// A die face in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieFace(u8);

impl DieFace {
    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const SIX: Self = Self(6);

    /// Create a face, rejecting values outside 1..=6.
    ///
    /// A rejected single face reports position 0.
    pub fn new(value: u8) -> Result<Self> {
        Self::checked(value).ok_or(ScoreError::InvalidFace {
            face: value,
            position: 0,
        })
    }

    /// Create a face if `value` is in range.
    #[must_use]
    pub const fn checked(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Is `value` a face that can appear on a die?
    #[must_use]
    pub const fn is_valid(value: u8) -> bool {
        value >= 1 && value as usize <= FACE_COUNT
    }

    /// Get the face value (1-6).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the 0-based slot used for per-face tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all six faces in ascending order.
    ///
    /// ```
    /// use greed_score::DieFace;
    ///
    /// let faces: Vec<_> = DieFace::all().map(DieFace::value).collect();
    /// assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn all() -> impl Iterator<Item = DieFace> {
        (1..=FACE_COUNT as u8).map(DieFace)
    }
}

impl TryFrom<u8> for DieFace {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.0
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_basics() {
        let one = DieFace::ONE;
        let six = DieFace::SIX;

        assert_eq!(one.value(), 1);
        assert_eq!(one.index(), 0);
        assert_eq!(six.index(), 5);
        assert_eq!(format!("{}", six), "6");
    }

    #[test]
    fn test_face_all() {
        let faces: Vec<_> = DieFace::all().collect();
        assert_eq!(faces.len(), FACE_COUNT);
        assert_eq!(faces[0], DieFace::ONE);
        assert_eq!(faces[4], DieFace::FIVE);
        assert_eq!(faces[5], DieFace::SIX);
    }

    #[test]
    fn test_face_out_of_range() {
        assert!(DieFace::checked(0).is_none());
        assert!(DieFace::checked(7).is_none());
        assert_eq!(
            DieFace::new(9),
            Err(ScoreError::InvalidFace { face: 9, position: 0 })
        );
        assert_eq!(DieFace::try_from(3), Ok(DieFace::THREE));
    }

    #[test]
    fn test_face_serialization() {
        let json = serde_json::to_string(&DieFace::FOUR).unwrap();
        assert_eq!(json, "4");

        let face: DieFace = serde_json::from_str("2").unwrap();
        assert_eq!(face, DieFace::TWO);

        assert!(serde_json::from_str::<DieFace>("0").is_err());
    }
}
