//! Matchup selection for the ranking engine
//!
//! This module partitions items into rating tiers and selects the next pair
//! of items to compare, either tier-aware or flat random.

pub mod selector;
pub mod tiers;

// Re-export commonly used types
pub use selector::{FlatRandomSelector, MatchupSelector, TieredSelector};
pub use tiers::TierPartition;
