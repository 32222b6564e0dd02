//! Configuration management for the ranking engine
//!
//! This module handles configuration loading from environment variables,
//! validation, and default values for rating and matchup selection.

pub mod engine;

// Re-export commonly used types
pub use engine::{validate_config, EngineConfig, RatingSettings, SelectionSettings};
