//! # greed-score
//!
//! Scoring for a single roll in the dice game Greed.
//!
//! ## Rules
//!
//! - A set of three ones is 1000 points.
//! - A set of three of any other face is 100 times the face (three fives is 500).
//! - A one outside a set is 100 points.
//! - A five outside a set is 50 points.
//! - Everything else is 0 points.
//!
//! Dice beyond a set keep scoring as singles, so four ones is 1100.
//!
//! ```
//! assert_eq!(greed_score::score(&[1, 1, 1, 5, 1]), 1150);
//! assert_eq!(greed_score::score(&[2, 3, 4, 6, 2]), 0);
//! assert_eq!(greed_score::score(&[3, 4, 5, 3, 3]), 350);
//! assert_eq!(greed_score::score(&[1, 5, 1, 2, 4]), 250);
//! ```
//!
//! ## Modules
//!
//! - `core`: Die faces, rolls, face counts and the rule table
//! - `scoring`: The calculator and per-face breakdowns
//! - `error`: Validation errors

pub mod core;
pub mod error;
pub mod scoring;

pub use crate::core::{DieFace, FaceCounts, FaceRule, Roll, ScoringRules};
pub use crate::error::{Result, ScoreError};
pub use crate::scoring::{score, try_score, ScoreBreakdown, ScoreCalculator};
