//! Roll scoring.
//!
//! - `ScoreCalculator`: scores rolls against a `ScoringRules` table
//! - `score` / `try_score`: standard Greed rules without building a calculator
//! - `ScoreBreakdown`: per-face points and scoring dice

pub mod breakdown;
pub mod calculator;

pub use breakdown::ScoreBreakdown;
pub use calculator::{score, try_score, ScoreCalculator};
