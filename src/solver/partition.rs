//! Splitting a candidate set by the feedback one guess produces

use super::cache::FeedbackCache;
use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Candidate subsets keyed by the feedback code that selects them
pub type Groups<'w> = FxHashMap<Feedback, Vec<&'w Word>>;

/// Partition `candidates` by their feedback against `guess`
///
/// The guess itself is left out when it is a candidate: guessing it ends the
/// game, so it needs no further search.
#[must_use]
pub fn partition<'w>(cache: &FeedbackCache, candidates: &[&'w Word], guess: &Word) -> Groups<'w> {
    let mut groups = Groups::default();
    let reserve = candidates.len() / 10;

    for &target in candidates {
        if target == guess {
            continue;
        }

        groups
            .entry(cache.get(guess, target))
            .or_insert_with(|| Vec::with_capacity(reserve))
            .push(target);
    }

    debug_assert!({
        let total: usize = groups.values().map(Vec::len).sum();
        total == candidates.len() || total + 1 == candidates.len()
    });

    groups
}
