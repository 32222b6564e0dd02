//! Taste Duel - pairwise preference ranking engine
//!
//! This crate maintains Elo-style ratings over a set of items, selects
//! matchups between them (tier-aware or flat random), and tracks a ranking
//! session as comparisons are resolved. It performs no I/O; persistence and
//! presentation belong to the caller.

pub mod config;
pub mod error;
pub mod matchup;
pub mod rating;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use matchup::{FlatRandomSelector, MatchupSelector, TieredSelector};
pub use rating::{EloRatingCalculator, RatingCalculator};
pub use session::RankingSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
