//! Match tally engine.
//!
//! Compares a loaded game collection against the drawn numbers and counts
//! how many games reached each qualifying match tier. The whole pipeline
//! is best-effort: malformed drawn tokens degrade to non-matching values
//! and the result is an empty tally rather than an error.

use crate::models::{DrawnNumbers, Game, MatchTally};

use super::tiers::MIN_QUALIFYING_MATCHES;

/// Parse free-form drawn-number text into a set.
///
/// All whitespace is stripped, the remainder is split on commas and each
/// token parsed as an integer. Tokens that fail to parse (including the
/// empty token left by blank input) are dropped: an integer sentinel for
/// "unparsable" does not exist, and a dropped token produces the same
/// tally as a kept never-matching placeholder would.
pub fn parse_drawn_numbers(text: &str) -> DrawnNumbers {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    stripped.split(',').filter_map(|token| token.parse::<i64>().ok()).collect()
}

/// Tally games per match tier against an already-parsed drawn set.
///
/// A game's match count is the size of the intersection between the drawn
/// set and the game's numbers taken as a set. Games below
/// [`MIN_QUALIFYING_MATCHES`] are skipped. Pairs keep the insertion order
/// of the first game that reached each tier.
pub fn tally_matches(games: &[Game], drawn: &DrawnNumbers) -> MatchTally {
    let mut tally = MatchTally::new();

    for game in games {
        let numbers: DrawnNumbers = game.iter().copied().collect();
        let matches = numbers.intersection(drawn).count();

        if matches >= MIN_QUALIFYING_MATCHES {
            match tally.iter_mut().find(|(tier, _)| *tier == matches) {
                Some((_, count)) => *count += 1,
                None => tally.push((matches, 1)),
            }
        }
    }

    tally
}

/// Parse the drawn text and tally the collection against it.
pub fn compare_games(games: &[Game], drawn_text: &str) -> MatchTally {
    tally_matches(games, &parse_drawn_numbers(drawn_text))
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_games() -> impl Strategy<Value = Vec<Game>> {
        prop::collection::vec(prop::collection::vec(-50i64..50, 0..12), 0..40)
    }

    proptest! {
        /// Property: every tally tier qualifies and every count is positive.
        #[test]
        fn prop_tiers_above_threshold(games in arb_games(), drawn in "[0-9, x]{0,30}") {
            for (tier, count) in compare_games(&games, &drawn) {
                prop_assert!(tier >= MIN_QUALIFYING_MATCHES);
                prop_assert!(count >= 1);
            }
        }

        /// Property: qualifying games never exceed the collection size.
        #[test]
        fn prop_tally_bounded_by_collection(games in arb_games(), drawn in "[0-9, ]{0,30}") {
            let tally = compare_games(&games, &drawn);
            let total: usize = tally.iter().map(|&(_, count)| count).sum();
            prop_assert!(total <= games.len());
        }

        /// Property: no tier exceeds the longest game in the collection.
        #[test]
        fn prop_tier_bounded_by_max_length(games in arb_games(), drawn in "[0-9, ]{0,30}") {
            let max_len = games.iter().map(|g| g.len()).max().unwrap_or(0);
            for (tier, _) in compare_games(&games, &drawn) {
                prop_assert!(tier <= max_len);
            }
        }

        /// Property: comparison is idempotent.
        #[test]
        fn prop_compare_idempotent(games in arb_games(), drawn in "[0-9, x]{0,30}") {
            prop_assert_eq!(compare_games(&games, &drawn), compare_games(&games, &drawn));
        }

        /// Property: parsing tolerates arbitrary text without panicking.
        #[test]
        fn prop_parse_is_total(text in ".*") {
            let _ = parse_drawn_numbers(&text);
        }
    }
}
