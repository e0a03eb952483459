//! Core types: die faces, rolls, face counts, and the rule table.

pub mod die;
pub mod roll;
pub mod rules;

pub use die::{DieFace, FACE_COUNT};
pub use roll::{FaceCounts, Roll};
pub use rules::{FaceRule, ScoringRules, DEFAULT_SET_SIZE};
