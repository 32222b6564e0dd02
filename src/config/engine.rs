//! Main engine configuration
//!
//! This module defines the configuration structures for the ranking engine,
//! including environment variable loading and validation.

use crate::types::SelectionMode;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rating: RatingSettings,
    pub selection: SelectionSettings,
}

/// Rating update settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSettings {
    /// Step factor applied to each rating update
    pub k_factor: f64,
    /// Rating assigned to items with no comparison history
    pub initial_rating: f64,
}

/// Matchup selection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Selection policy for the next matchup
    pub mode: SelectionMode,
    /// Probability of a deliberate cross-tier matchup in tiered mode
    pub upset_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rating: RatingSettings::default(),
            selection: SelectionSettings::default(),
        }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            initial_rating: 1000.0,
        }
    }
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            mode: SelectionMode::Tiered,
            upset_probability: 0.2,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(k_factor) = env::var("K_FACTOR") {
            config.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(initial) = env::var("INITIAL_RATING") {
            config.rating.initial_rating = initial
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", initial))?;
        }
        if let Ok(mode) = env::var("SELECTION_MODE") {
            config.selection.mode = mode
                .parse()
                .map_err(|_| anyhow!("Invalid SELECTION_MODE value: {}", mode))?;
        }
        if let Ok(upset) = env::var("UPSET_PROBABILITY") {
            config.selection.upset_probability = upset
                .parse()
                .map_err(|_| anyhow!("Invalid UPSET_PROBABILITY value: {}", upset))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &EngineConfig) -> Result<()> {
    if !config.rating.k_factor.is_finite() || config.rating.k_factor <= 0.0 {
        return Err(anyhow!(
            "K factor must be positive and finite, got {}",
            config.rating.k_factor
        ));
    }

    if !config.rating.initial_rating.is_finite() {
        return Err(anyhow!(
            "Initial rating must be finite, got {}",
            config.rating.initial_rating
        ));
    }

    if !(0.0..=1.0).contains(&config.selection.upset_probability) {
        return Err(anyhow!(
            "Upset probability must be within [0, 1], got {}",
            config.selection.upset_probability
        ));
    }

    Ok(())
}
