//! Matchup selection policies
//!
//! This module selects the next pair of items to compare. The tier-aware
//! policy mostly pairs items of similar strength and occasionally forces a
//! cross-tier "upset" matchup; the flat policy draws uniformly from the whole
//! list. All randomness comes through an injected generator so selection is
//! reproducible under a seeded RNG.

use crate::error::RankingError;
use crate::matchup::tiers::TierPartition;
use crate::types::{Item, Matchup};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::debug;

/// Trait for matchup selection policies
pub trait MatchupSelector: Send + Sync {
    /// Select the next pair of distinct items to compare
    fn select_matchup(
        &self,
        items: &[Item],
        rng: &mut dyn RngCore,
    ) -> crate::error::Result<Matchup>;
}

/// Tier-aware matchup selector
///
/// With the configured upset probability the pair crosses two distinct tiers;
/// otherwise both items come from one tier. Pairs are drawn without
/// replacement, and each branch falls back to the other when its tier-size
/// precondition cannot be met, so selection always terminates.
#[derive(Debug, Clone)]
pub struct TieredSelector {
    upset_probability: f64,
}

impl TieredSelector {
    pub fn new(upset_probability: f64) -> crate::error::Result<Self> {
        if !(0.0..=1.0).contains(&upset_probability) {
            return Err(RankingError::ConfigurationError {
                message: format!(
                    "Upset probability must be within [0, 1], got {}",
                    upset_probability
                ),
            }
            .into());
        }
        Ok(Self { upset_probability })
    }

    /// Two distinct items from one tier with at least two members
    fn within_tier(
        &self,
        partition: &TierPartition,
        rng: &mut dyn RngCore,
    ) -> Option<(Item, Item)> {
        let candidates = partition.tiers_with_at_least(2);
        let tier = *candidates.choose(rng)?;

        let picks: Vec<&Item> = partition.get(tier).choose_multiple(rng, 2).collect();
        debug!(%tier, "Selected within-tier matchup");
        Some((picks[0].clone(), picks[1].clone()))
    }

    /// One item from each of two distinct non-empty tiers
    fn cross_tier(&self, partition: &TierPartition, rng: &mut dyn RngCore) -> Option<(Item, Item)> {
        let non_empty = partition.non_empty_tiers();
        if non_empty.len() < 2 {
            return None;
        }

        let picked: Vec<_> = non_empty.choose_multiple(rng, 2).copied().collect();
        let first = partition.get(picked[0]).choose(rng)?;
        let second = partition.get(picked[1]).choose(rng)?;
        debug!(first_tier = %picked[0], second_tier = %picked[1], "Selected cross-tier matchup");
        Some((first.clone(), second.clone()))
    }
}

impl Default for TieredSelector {
    fn default() -> Self {
        Self {
            upset_probability: 0.2,
        }
    }
}

impl MatchupSelector for TieredSelector {
    fn select_matchup(
        &self,
        items: &[Item],
        rng: &mut dyn RngCore,
    ) -> crate::error::Result<Matchup> {
        if items.len() < 2 {
            return Err(RankingError::InsufficientItems { count: items.len() }.into());
        }

        let partition = TierPartition::partition(items);

        // With at least two items, one branch is always feasible: a single
        // populated tier has both items, and otherwise two tiers are populated.
        let pair = if rng.gen_bool(self.upset_probability) {
            self.cross_tier(&partition, rng)
                .or_else(|| self.within_tier(&partition, rng))
        } else {
            self.within_tier(&partition, rng)
                .or_else(|| self.cross_tier(&partition, rng))
        };

        match pair {
            Some((first, second)) => Matchup::new(first, second),
            None => Err(RankingError::InsufficientItems { count: items.len() }.into()),
        }
    }
}

/// Flat random matchup selector
///
/// Shuffles a copy of the full item list and takes the first two entries.
#[derive(Debug, Clone, Default)]
pub struct FlatRandomSelector;

impl MatchupSelector for FlatRandomSelector {
    fn select_matchup(
        &self,
        items: &[Item],
        rng: &mut dyn RngCore,
    ) -> crate::error::Result<Matchup> {
        if items.len() < 2 {
            return Err(RankingError::InsufficientItems { count: items.len() }.into());
        }

        let mut shuffled = items.to_vec();
        shuffled.shuffle(rng);

        let second = shuffled.swap_remove(1);
        let first = shuffled.swap_remove(0);
        Matchup::new(first, second)
    }
}
