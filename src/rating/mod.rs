//! Rating system integration using the Elo algorithm
//!
//! This module provides rating calculations behind a trait seam, with a
//! concrete implementation backed by the skillratings crate.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::{EloRatingCalculator, ExtendedEloConfig};
