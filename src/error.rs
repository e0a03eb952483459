//! Validation errors.
//!
//! Plain scoring never fails. These errors only come out of the checked
//! entry points (`try_score`, `DieFace::new`, `ScoringRules::validate`).

use thiserror::Error;

/// Errors raised when validating dice or rule tables.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A die showed a value outside 1..=6.
    #[error("invalid die face {face} at position {position} (expected 1-6)")]
    InvalidFace { face: u8, position: usize },

    /// A rule table cannot be used for scoring.
    #[error("invalid scoring rules: {0}")]
    InvalidRules(String),
}

/// Crate result type.
pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_face_message() {
        let err = ScoreError::InvalidFace { face: 7, position: 2 };
        assert_eq!(
            err.to_string(),
            "invalid die face 7 at position 2 (expected 1-6)"
        );
    }

    #[test]
    fn test_invalid_rules_message() {
        let err = ScoreError::InvalidRules("set size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid scoring rules: set size must be at least 1"
        );
    }
}
