//! Error types for the ranking engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific ranking scenarios
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Not enough items to select a matchup: {count} (need at least 2)")]
    InsufficientItems { count: usize },

    #[error("Item not found: {item_id}")]
    ItemNotFound { item_id: String },

    #[error("Duplicate item id: {item_id}")]
    DuplicateItem { item_id: String },

    #[error("Matchup would pair item {item_id} with itself")]
    SelfMatchup { item_id: String },

    #[error("Item {item_id} has a non-finite rating: {value}")]
    InvalidRating { item_id: String, value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal engine error: {message}")]
    InternalError { message: String },
}
