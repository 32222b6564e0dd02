//! Rating calculator trait and test support
//!
//! This module defines the interface for rating calculations; concrete
//! implementations live alongside it.

use crate::types::{DuelOutcome, Item, RatingChange};
use crate::utils::current_timestamp;

/// Trait for calculating rating changes after comparisons
pub trait RatingCalculator: Send + Sync {
    /// Probability that a side rated `rating_a` is preferred over one rated
    /// `rating_b`. Pure; result in the open interval (0, 1).
    fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64;

    /// Calculate new ratings after `winner` was preferred over `loser`
    ///
    /// Returns new values only; the caller stores them back onto its item
    /// records.
    fn update_ratings(&self, winner: &Item, loser: &Item) -> crate::error::Result<DuelOutcome>;

    /// Get the initial rating for new items
    fn initial_rating(&self) -> f64;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;

    /// Update configuration from JSON
    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()>;
}

/// Mock rating calculator for testing
#[derive(Debug, Default)]
pub struct MockRatingCalculator {
    update_calls: std::sync::Mutex<Vec<(Item, Item)>>,
    fixed_outcome: std::sync::RwLock<Option<DuelOutcome>>,
    initial_rating: f64,
}

impl MockRatingCalculator {
    pub fn new() -> Self {
        Self {
            update_calls: std::sync::Mutex::new(Vec::new()),
            fixed_outcome: std::sync::RwLock::new(None),
            initial_rating: 1000.0,
        }
    }

    /// Set a fixed outcome to return for all updates
    pub fn set_fixed_outcome(&self, outcome: DuelOutcome) {
        if let Ok(mut fixed) = self.fixed_outcome.write() {
            *fixed = Some(outcome);
        }
    }

    /// Get all update calls made (for testing)
    pub fn get_update_calls(&self) -> Vec<(Item, Item)> {
        self.update_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl RatingCalculator for MockRatingCalculator {
    fn expected_score(&self, _rating_a: f64, _rating_b: f64) -> f64 {
        0.5
    }

    fn update_ratings(&self, winner: &Item, loser: &Item) -> crate::error::Result<DuelOutcome> {
        // Record the call
        if let Ok(mut calls) = self.update_calls.lock() {
            calls.push((winner.clone(), loser.clone()));
        }

        // Return fixed outcome if set, otherwise leave ratings unchanged
        if let Ok(fixed) = self.fixed_outcome.read() {
            if let Some(outcome) = fixed.as_ref() {
                return Ok(outcome.clone());
            }
        }

        Ok(DuelOutcome {
            winner: RatingChange {
                item_id: winner.id.clone(),
                old_rating: winner.rating,
                new_rating: winner.rating,
            },
            loser: RatingChange {
                item_id: loser.id.clone(),
                old_rating: loser.rating,
                new_rating: loser.rating,
            },
            expected_winner_score: 0.5,
            upset: false,
            timestamp: current_timestamp(),
        })
    }

    fn initial_rating(&self) -> f64 {
        self.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "mock",
            "initial_rating": self.initial_rating,
        })
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        if let Some(rating) = config.get("initial_rating").and_then(|v| v.as_f64()) {
            self.initial_rating = rating;
        }
        Ok(())
    }
}
