//! Destructive top-N extraction

use crate::core::aggregate::{AggregateGroup, AggregatedCollection};
use crate::core::query::Direction;

/// Index of the most extreme group, first one wins on ties
fn extreme_index(collection: &AggregatedCollection, direction: Direction) -> Option<usize> {
    let groups = collection.groups();
    let mut best = 0;

    for (index, group) in groups.iter().enumerate().skip(1) {
        let better = match direction {
            Direction::Descending => group.count > groups[best].count,
            Direction::Ascending => group.count < groups[best].count,
        };
        if better {
            best = index;
        }
    }

    (!groups.is_empty()).then_some(best)
}

/// Remove and return the group with the highest (or lowest) count.
///
/// One linear scan; among equal counts the group met first in the
/// collection's current order is taken. `None` once the collection is empty.
pub fn extract_extreme(
    collection: &mut AggregatedCollection,
    direction: Direction,
) -> Option<AggregateGroup> {
    let index = extreme_index(collection, direction)?;
    collection.take(index)
}

/// Extract up to `n` groups, most extreme first.
///
/// Stops early when the collection runs out; a short result is not an error.
pub fn select_top_n(
    collection: &mut AggregatedCollection,
    n: usize,
    direction: Direction,
) -> Vec<AggregateGroup> {
    let mut selected = Vec::with_capacity(n.min(collection.len()));

    for _ in 0..n {
        match extract_extreme(collection, direction) {
            Some(group) => selected.push(group),
            None => break,
        }
    }

    selected
}
