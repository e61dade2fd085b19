//! Core data model.

use std::collections::{HashMap, HashSet};

/// One lottery entry: the numbers chosen for a single game, in load order.
///
/// Duplicates are preserved as loaded; the tally engine collapses them to a
/// set at comparison time only.
pub type Game = Vec<i64>;

/// Officially drawn numbers, parsed from user text.
pub type DrawnNumbers = HashSet<i64>;

/// Entry length -> number of games with that length.
pub type SizeSummary = HashMap<usize, usize>;

/// (match tier, game count) pairs in first-occurrence order.
///
/// Only tiers at or above the qualifying minimum appear. Consumers that
/// need sorted or labeled output apply that themselves.
pub type MatchTally = Vec<(usize, usize)>;
