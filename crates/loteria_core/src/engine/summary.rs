//! Game size summary.
//!
//! Groups a loaded collection by entry length. Length is structural: a
//! game that lists the same number twice is counted at its full length,
//! not its deduplicated cardinality.

use crate::models::{Game, SizeSummary};

/// Count games per entry length.
///
/// Every game contributes exactly once, keyed by its length; a malformed
/// zero-length game counts under key 0 rather than being rejected.
/// Ordering and display formatting are consumer concerns.
pub fn summarize_game_sizes(games: &[Game]) -> SizeSummary {
    let mut summary = SizeSummary::new();

    for game in games {
        *summary.entry(game.len()).or_insert(0) += 1;
    }

    summary
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_games() -> impl Strategy<Value = Vec<Game>> {
        prop::collection::vec(prop::collection::vec(-50i64..50, 0..12), 0..40)
    }

    proptest! {
        /// Property: counts partition the collection - they sum to the
        /// number of games, no count is zero, every length present is a key.
        #[test]
        fn prop_counts_partition_collection(games in arb_games()) {
            let summary = summarize_game_sizes(&games);

            prop_assert_eq!(summary.values().sum::<usize>(), games.len());
            for count in summary.values() {
                prop_assert!(*count >= 1);
            }
            for game in &games {
                prop_assert!(summary.contains_key(&game.len()));
            }
        }
    }
}
