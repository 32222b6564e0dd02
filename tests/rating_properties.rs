//! Property tests for the rating and partition invariants

use proptest::prelude::*;
use std::collections::HashSet;
use taste_duel::matchup::TierPartition;
use taste_duel::rating::{EloRatingCalculator, ExtendedEloConfig, RatingCalculator};
use taste_duel::types::{Item, Tier};

const EPSILON: f64 = 1e-9;

fn calculator() -> EloRatingCalculator {
    EloRatingCalculator::new(ExtendedEloConfig::default()).unwrap()
}

proptest! {
    #[test]
    fn expected_scores_sum_to_one(a in -5000.0..5000.0f64, b in -5000.0..5000.0f64) {
        let calc = calculator();
        let forward = calc.expected_score(a, b);
        let backward = calc.expected_score(b, a);

        prop_assert!((forward + backward - 1.0).abs() < EPSILON);
        prop_assert!(forward > 0.0 && forward < 1.0);
    }

    #[test]
    fn equal_ratings_are_even_odds(rating in -5000.0..5000.0f64) {
        let calc = calculator();
        prop_assert!((calc.expected_score(rating, rating) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn updates_are_zero_sum_and_winner_favoring(
        winner_rating in 0.0..3000.0f64,
        loser_rating in 0.0..3000.0f64,
    ) {
        let calc = calculator();
        let winner = Item::new("w", "Winner", winner_rating);
        let loser = Item::new("l", "Loser", loser_rating);

        let outcome = calc.update_ratings(&winner, &loser).unwrap();

        prop_assert!((outcome.winner.delta() + outcome.loser.delta()).abs() < EPSILON);
        prop_assert!(outcome.winner.delta() > 0.0);
        prop_assert!(outcome.loser.delta() < 0.0);
    }

    #[test]
    fn higher_rated_winner_still_gains(gap in 0.0..2000.0f64) {
        let calc = calculator();
        let winner = Item::new("w", "Winner", 1000.0 + gap);
        let loser = Item::new("l", "Loser", 1000.0);

        let outcome = calc.update_ratings(&winner, &loser).unwrap();

        prop_assert!(outcome.winner.new_rating > outcome.winner.old_rating);
        prop_assert!(outcome.loser.new_rating < outcome.loser.old_rating);
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive(ratings in prop::collection::vec(0.0..3000.0f64, 0..60)) {
        let items: Vec<Item> = ratings
            .iter()
            .enumerate()
            .map(|(i, rating)| Item::new(format!("item{}", i), format!("Item {}", i), *rating))
            .collect();

        let partition = TierPartition::partition(&items);
        prop_assert_eq!(partition.total_len(), items.len());

        let mut seen = HashSet::new();
        for tier in Tier::ALL {
            for item in partition.get(tier) {
                prop_assert!(seen.insert(item.id.clone()));
            }
        }
        prop_assert_eq!(seen.len(), items.len());
    }
}
