//! Common types used throughout the ranking engine

use crate::error::RankingError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for rateable items
pub type ItemId = String;

/// Unique identifier for ranking sessions
pub type SessionId = Uuid;

/// How the next matchup is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Partition items into tiers and mostly match within a tier
    Tiered,
    /// Shuffle the full list and take the first two items
    Flat,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionMode::Tiered => write!(f, "Tiered"),
            SelectionMode::Flat => write!(f, "Flat"),
        }
    }
}

impl std::str::FromStr for SelectionMode {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tiered" => Ok(SelectionMode::Tiered),
            "flat" => Ok(SelectionMode::Flat),
            other => Err(RankingError::ConfigurationError {
                message: format!("Unknown selection mode: {}", other),
            }),
        }
    }
}

/// Rank-based bucket of items, ordered from strongest to weakest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Top 10% by rating
    Challenger,
    /// Next 30%
    Master,
    /// Next 30%
    Platinum,
    /// Remaining 30%
    Bronze,
}

impl Tier {
    /// All tiers in rank order
    pub const ALL: [Tier; 4] = [Tier::Challenger, Tier::Master, Tier::Platinum, Tier::Bronze];
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Challenger => write!(f, "Challenger"),
            Tier::Master => write!(f, "Master"),
            Tier::Platinum => write!(f, "Platinum"),
            Tier::Bronze => write!(f, "Bronze"),
        }
    }
}

/// A rateable item tracked by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub rating: f64,
}

impl Item {
    /// Create a new item with the given rating
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
        }
    }
}

/// An ordered pair of distinct items selected for comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    pub first: Item,
    pub second: Item,
}

impl Matchup {
    /// Create a matchup, rejecting a self-pair
    pub fn new(first: Item, second: Item) -> crate::error::Result<Self> {
        if first.id == second.id {
            return Err(RankingError::SelfMatchup { item_id: first.id }.into());
        }
        Ok(Self { first, second })
    }

    /// Whether the given item is one side of this matchup
    pub fn involves(&self, item_id: &str) -> bool {
        self.first.id == item_id || self.second.id == item_id
    }

    /// The other side of the matchup, if `item_id` is one side
    pub fn opponent_of(&self, item_id: &str) -> Option<&Item> {
        if self.first.id == item_id {
            Some(&self.second)
        } else if self.second.id == item_id {
            Some(&self.first)
        } else {
            None
        }
    }
}

/// Rating change information for one side of a duel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingChange {
    pub item_id: ItemId,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    /// Signed rating movement for this side
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}

/// Result of resolving a single comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOutcome {
    pub winner: RatingChange,
    pub loser: RatingChange,
    /// Winner's expected score before the update
    pub expected_winner_score: f64,
    /// True when the lower-rated side won
    pub upset: bool,
    pub timestamp: DateTime<Utc>,
}
