//! Elo rating system implementation
//!
//! This module provides a concrete implementation of the rating calculator
//! using the classic Elo algorithm from the skillratings crate: the expected
//! score is `1 / (1 + 10^((b - a) / 400))` and each side moves by
//! `k * (observed - expected)`.

use crate::config::RatingSettings;
use crate::error::RankingError;
use crate::rating::calculator::RatingCalculator;
use crate::types::{DuelOutcome, Item, RatingChange};
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, expected_score, EloConfig, EloRating};
use skillratings::Outcomes;
use tracing::debug;

/// Extended configuration for the Elo rating system
/// This wraps the skillratings EloConfig with additional parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedEloConfig {
    /// Core Elo parameters
    pub elo_config: EloConfig,
    /// Initial rating for new items
    pub initial_rating: f64,
}

impl Default for ExtendedEloConfig {
    fn default() -> Self {
        Self {
            elo_config: EloConfig { k: 32.0 },
            initial_rating: 1000.0,
        }
    }
}

impl ExtendedEloConfig {
    /// Create conservative configuration (slower rating changes)
    pub fn conservative() -> Self {
        Self {
            elo_config: EloConfig { k: 16.0 },
            initial_rating: 1000.0,
        }
    }

    /// Create aggressive configuration (faster rating changes)
    pub fn aggressive() -> Self {
        Self {
            elo_config: EloConfig { k: 64.0 },
            initial_rating: 1000.0,
        }
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.elo_config.k.is_finite() || self.elo_config.k <= 0.0 {
            return Err(RankingError::ConfigurationError {
                message: "K factor must be positive and finite".to_string(),
            }
            .into());
        }

        if !self.initial_rating.is_finite() {
            return Err(RankingError::ConfigurationError {
                message: "Initial rating must be finite".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl From<&RatingSettings> for ExtendedEloConfig {
    fn from(settings: &RatingSettings) -> Self {
        Self {
            elo_config: EloConfig {
                k: settings.k_factor,
            },
            initial_rating: settings.initial_rating,
        }
    }
}

/// Elo rating calculator implementation
#[derive(Debug)]
pub struct EloRatingCalculator {
    config: ExtendedEloConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: ExtendedEloConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Create a calculator from engine rating settings
    pub fn from_settings(settings: &RatingSettings) -> crate::error::Result<Self> {
        Self::new(settings.into())
    }

    fn check_finite(item: &Item) -> crate::error::Result<()> {
        if !item.rating.is_finite() {
            return Err(RankingError::InvalidRating {
                item_id: item.id.clone(),
                value: item.rating,
            }
            .into());
        }
        Ok(())
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64 {
        let (expected_a, _expected_b) = expected_score(
            &EloRating { rating: rating_a },
            &EloRating { rating: rating_b },
        );
        expected_a
    }

    fn update_ratings(&self, winner: &Item, loser: &Item) -> crate::error::Result<DuelOutcome> {
        if winner.id == loser.id {
            return Err(RankingError::SelfMatchup {
                item_id: winner.id.clone(),
            }
            .into());
        }
        Self::check_finite(winner)?;
        Self::check_finite(loser)?;

        let winner_elo = EloRating {
            rating: winner.rating,
        };
        let loser_elo = EloRating {
            rating: loser.rating,
        };

        let expected_winner = self.expected_score(winner.rating, loser.rating);
        let (new_winner, new_loser) =
            elo(&winner_elo, &loser_elo, &Outcomes::WIN, &self.config.elo_config);

        debug!(
            winner = %winner.id,
            loser = %loser.id,
            expected_winner,
            winner_delta = new_winner.rating - winner.rating,
            "Resolved duel"
        );

        Ok(DuelOutcome {
            winner: RatingChange {
                item_id: winner.id.clone(),
                old_rating: winner.rating,
                new_rating: new_winner.rating,
            },
            loser: RatingChange {
                item_id: loser.id.clone(),
                old_rating: loser.rating,
                new_rating: new_loser.rating,
            },
            expected_winner_score: expected_winner,
            upset: expected_winner < 0.5,
            timestamp: current_timestamp(),
        })
    }

    fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null)
    }

    fn update_config(&mut self, config: serde_json::Value) -> crate::error::Result<()> {
        let new_config: ExtendedEloConfig =
            serde_json::from_value(config).map_err(|e| RankingError::ConfigurationError {
                message: format!("Invalid Elo configuration: {}", e),
            })?;

        new_config.validate()?;
        self.config = new_config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn create_calculator() -> EloRatingCalculator {
        EloRatingCalculator::new(ExtendedEloConfig::default()).unwrap()
    }

    fn create_test_item(id: &str, rating: f64) -> Item {
        Item::new(id, id.to_uppercase(), rating)
    }

    #[test]
    fn test_config_validation() {
        let mut config = ExtendedEloConfig::default();
        assert!(config.validate().is_ok());

        config.elo_config.k = -1.0;
        assert!(config.validate().is_err());

        config = ExtendedEloConfig::default();
        config.initial_rating = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_presets() {
        let conservative = ExtendedEloConfig::conservative();
        let aggressive = ExtendedEloConfig::aggressive();
        let default = ExtendedEloConfig::default();

        assert!(conservative.elo_config.k < default.elo_config.k);
        assert!(aggressive.elo_config.k > default.elo_config.k);

        assert!(conservative.validate().is_ok());
        assert!(aggressive.validate().is_ok());
    }

    #[test]
    fn test_expected_score_symmetry() {
        let calculator = create_calculator();

        for (a, b) in [(1000.0, 1000.0), (1200.0, 800.0), (1437.5, 1502.25)] {
            let forward = calculator.expected_score(a, b);
            let backward = calculator.expected_score(b, a);
            assert!((forward + backward - 1.0).abs() < EPSILON);
            assert!(forward > 0.0 && forward < 1.0);
        }
    }

    #[test]
    fn test_expected_score_equal_ratings() {
        let calculator = create_calculator();
        assert!((calculator.expected_score(1000.0, 1000.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_equal_ratings_update() {
        let calculator = create_calculator();
        let winner = create_test_item("a", 1000.0);
        let loser = create_test_item("b", 1000.0);

        let outcome = calculator.update_ratings(&winner, &loser).unwrap();

        // K = 32, expected 0.5: winner gains 16, loser drops 16
        assert!((outcome.winner.new_rating - 1016.0).abs() < EPSILON);
        assert!((outcome.loser.new_rating - 984.0).abs() < EPSILON);
        assert!((outcome.expected_winner_score - 0.5).abs() < EPSILON);
        assert!(!outcome.upset);
    }

    #[test]
    fn test_favorite_beats_underdog() {
        let calculator = create_calculator();
        let winner = create_test_item("a", 1200.0);
        let loser = create_test_item("b", 800.0);

        let outcome = calculator.update_ratings(&winner, &loser).unwrap();

        assert!((outcome.expected_winner_score - 0.9091).abs() < 1e-4);
        assert!((outcome.winner.new_rating - 1202.9).abs() < 0.1);
        assert!((outcome.loser.new_rating - 797.1).abs() < 0.1);
        assert!(!outcome.upset);
    }

    #[test]
    fn test_upset_detection() {
        let calculator = create_calculator();
        let winner = create_test_item("underdog", 800.0);
        let loser = create_test_item("favorite", 1200.0);

        let outcome = calculator.update_ratings(&winner, &loser).unwrap();

        assert!(outcome.upset);
        // Underdog win moves ratings further than an expected result
        assert!(outcome.winner.delta() > 16.0);
    }

    #[test]
    fn test_zero_sum_property() {
        let calculator = create_calculator();
        let winner = create_test_item("a", 1342.0);
        let loser = create_test_item("b", 1198.0);

        let outcome = calculator.update_ratings(&winner, &loser).unwrap();

        assert!((outcome.winner.delta() + outcome.loser.delta()).abs() < EPSILON);
        assert!(outcome.winner.delta() > 0.0);
        assert!(outcome.loser.delta() < 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        let calculator = create_calculator();

        let item = create_test_item("a", 1000.0);
        let same = create_test_item("a", 1000.0);
        assert!(calculator.update_ratings(&item, &same).is_err());

        let bad = create_test_item("b", f64::NAN);
        assert!(calculator.update_ratings(&item, &bad).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let mut calculator = create_calculator();
        assert_eq!(calculator.initial_rating(), 1000.0);

        let mut config = calculator.config();
        config["initial_rating"] = serde_json::json!(1500.0);
        calculator.update_config(config).unwrap();

        assert_eq!(calculator.initial_rating(), 1500.0);
    }
}
