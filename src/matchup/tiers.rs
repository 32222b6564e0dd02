//! Rating tier partitioning
//!
//! Items are split into four ordered buckets by descending rating: the top
//! 10%, then 30%, 30%, and the remaining 30%. The partition is derived,
//! recomputed from scratch on every query, and never stored.

use crate::types::{Item, Tier};

/// Cumulative fraction of the sorted list covered by each non-final tier
const TIER_BOUNDARIES: [f64; 3] = [0.1, 0.4, 0.7];

/// A disjoint, exhaustive partition of an item set into rating tiers
#[derive(Debug, Clone)]
pub struct TierPartition {
    tiers: [Vec<Item>; 4],
}

impl TierPartition {
    /// Partition items into tiers by descending rating
    ///
    /// Boundary indices use floor division, so small item sets leave the
    /// leading tiers empty. Each tier covers exactly the slice of the sorted
    /// list not claimed by an earlier tier.
    pub fn partition(items: &[Item]) -> Self {
        let mut sorted: Vec<Item> = items.to_vec();
        sorted.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let n = sorted.len();
        let cut = |fraction: f64| (n as f64 * fraction).floor() as usize;
        let (c1, c2, c3) = (
            cut(TIER_BOUNDARIES[0]),
            cut(TIER_BOUNDARIES[1]),
            cut(TIER_BOUNDARIES[2]),
        );

        let bronze = sorted.split_off(c3);
        let platinum = sorted.split_off(c2);
        let master = sorted.split_off(c1);
        let challenger = sorted;

        Self {
            tiers: [challenger, master, platinum, bronze],
        }
    }

    /// Items in the given tier, strongest first
    pub fn get(&self, tier: Tier) -> &[Item] {
        match tier {
            Tier::Challenger => &self.tiers[0],
            Tier::Master => &self.tiers[1],
            Tier::Platinum => &self.tiers[2],
            Tier::Bronze => &self.tiers[3],
        }
    }

    /// Tiers that contain at least `min_members` items, in rank order
    pub fn tiers_with_at_least(&self, min_members: usize) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|tier| self.get(*tier).len() >= min_members)
            .collect()
    }

    /// Tiers that contain at least one item, in rank order
    pub fn non_empty_tiers(&self) -> Vec<Tier> {
        self.tiers_with_at_least(1)
    }

    /// Total number of items across all tiers
    pub fn total_len(&self) -> usize {
        self.tiers.iter().map(|tier| tier.len()).sum()
    }
}
