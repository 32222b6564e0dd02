//! Ranking session state
//!
//! A session owns the item collection, the matchup currently on display, and
//! the comparison counter. The original application kept this state in ambient
//! UI variables; here it is an explicit object passed through the engine, and
//! the rating and selection components underneath it stay stateless.

use crate::config::EngineConfig;
use crate::error::RankingError;
use crate::matchup::{FlatRandomSelector, MatchupSelector, TieredSelector};
use crate::rating::{EloRatingCalculator, RatingCalculator};
use crate::types::{DuelOutcome, Item, Matchup, SelectionMode, SessionId};
use crate::utils::{current_timestamp, generate_session_id};
use chrono::{DateTime, Utc};
use rand::RngCore;
use std::collections::HashSet;
use tracing::debug;

/// Comparisons suggested per item for a stable ranking
const SUGGESTED_COMPARISONS_PER_ITEM: usize = 4;

/// An in-progress pairwise ranking session
pub struct RankingSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    items: Vec<Item>,
    matchup: Matchup,
    comparisons: u64,
    calculator: Box<dyn RatingCalculator>,
    selector: Box<dyn MatchupSelector>,
}

impl RankingSession {
    /// Start a session over the given items
    ///
    /// Requires at least two items with unique ids. The opening matchup is
    /// always drawn with the flat policy; later matchups use the configured
    /// selection mode.
    pub fn new(
        items: Vec<Item>,
        config: &EngineConfig,
        rng: &mut dyn RngCore,
    ) -> crate::error::Result<Self> {
        if items.len() < 2 {
            return Err(RankingError::InsufficientItems { count: items.len() }.into());
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(RankingError::DuplicateItem {
                    item_id: item.id.clone(),
                }
                .into());
            }
        }

        let calculator = Box::new(EloRatingCalculator::from_settings(&config.rating)?);
        let selector: Box<dyn MatchupSelector> = match config.selection.mode {
            SelectionMode::Tiered => {
                Box::new(TieredSelector::new(config.selection.upset_probability)?)
            }
            SelectionMode::Flat => Box::new(FlatRandomSelector),
        };

        let matchup = FlatRandomSelector.select_matchup(&items, rng)?;

        let session = Self {
            id: generate_session_id(),
            started_at: current_timestamp(),
            items,
            matchup,
            comparisons: 0,
            calculator,
            selector,
        };

        debug!(
            session_id = %session.id,
            items = session.items.len(),
            mode = %config.selection.mode,
            "Started ranking session"
        );

        Ok(session)
    }

    /// Start a session with default configuration
    pub fn with_defaults(items: Vec<Item>, rng: &mut dyn RngCore) -> crate::error::Result<Self> {
        Self::new(items, &EngineConfig::default(), rng)
    }

    /// Record that the user preferred `winner_id` in the current matchup
    ///
    /// Updates both ratings in place, advances the comparison counter, and
    /// draws the next matchup. The winner must be one side of the matchup on
    /// display.
    pub fn record_choice(
        &mut self,
        winner_id: &str,
        rng: &mut dyn RngCore,
    ) -> crate::error::Result<DuelOutcome> {
        let loser = self
            .matchup
            .opponent_of(winner_id)
            .cloned()
            .ok_or_else(|| RankingError::ItemNotFound {
                item_id: winner_id.to_string(),
            })?;
        // opponent_of succeeded, so the winner is the other side
        let winner = if self.matchup.first.id == winner_id {
            self.matchup.first.clone()
        } else {
            self.matchup.second.clone()
        };

        let outcome = self.calculator.update_ratings(&winner, &loser)?;
        self.apply_rating(&outcome.winner.item_id, outcome.winner.new_rating)?;
        self.apply_rating(&outcome.loser.item_id, outcome.loser.new_rating)?;
        self.comparisons += 1;

        self.matchup = self.selector.select_matchup(&self.items, rng)?;

        debug!(
            session_id = %self.id,
            comparisons = self.comparisons,
            winner = %outcome.winner.item_id,
            upset = outcome.upset,
            "Recorded choice"
        );

        Ok(outcome)
    }

    fn apply_rating(&mut self, item_id: &str, new_rating: f64) -> crate::error::Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or_else(|| RankingError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;
        item.rating = new_rating;
        Ok(())
    }

    /// Session identifier
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// When the session started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The matchup currently on display
    pub fn current_matchup(&self) -> &Matchup {
        &self.matchup
    }

    /// Number of comparisons resolved so far
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// All items with their current ratings
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// How many comparisons are suggested before showing final rankings
    pub fn suggested_comparisons(&self) -> usize {
        self.items.len() * SUGGESTED_COMPARISONS_PER_ITEM
    }

    /// Items sorted by descending rating
    pub fn leaderboard(&self) -> Vec<&Item> {
        let mut ranked: Vec<&Item> = self.items.iter().collect();
        ranked.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}
