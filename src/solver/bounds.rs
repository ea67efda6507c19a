//! Depth statistics and the admissible bound used for pruning

use super::partition::Groups;
use super::tree::Children;
use crate::core::Word;

/// Lower bound on the average depth a guess can achieve with these groups
///
/// A group of one word needs exactly one more guess. A larger group of `s`
/// words needs at least `2s - 1` guesses in total: even a perfect splitter
/// that is itself one of the words costs one guess for that word and two for
/// each of the others.
///
/// # Examples
/// ```
/// use wordle_tree::core::{Vocabulary, Word};
/// use wordle_tree::solver::{FeedbackCache, partition, quick_lower_bound};
///
/// let vocabulary = Vocabulary::new(["bbbbb", "ccccc", "ddddd"], ["bxyzw"]).unwrap();
/// let cache = FeedbackCache::for_vocabulary(&vocabulary);
/// let candidates: Vec<&Word> = vocabulary.solutions().iter().collect();
///
/// // {bbbbb} and {ccccc, ddddd}: 1 + (1 + 3) / 3
/// let groups = partition(&cache, &candidates, vocabulary.get("bxyzw").unwrap());
/// let bound = quick_lower_bound(&candidates, &groups);
/// assert!((bound - 7.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn quick_lower_bound(candidates: &[&Word], groups: &Groups<'_>) -> f64 {
    let guesses: usize = groups
        .values()
        .map(|group| match group.len() {
            1 => 1,
            size => 2 * size - 1,
        })
        .sum();

    1.0 + guesses as f64 / candidates.len() as f64
}

/// Average depth of a node whose non-winning outcomes are `children`
#[must_use]
pub fn average_child_depth(candidates: &[&Word], children: &Children<'_>) -> f64 {
    let weighted: f64 = children
        .values()
        .map(|child| child.average_depth() * child.len() as f64)
        .sum();

    1.0 + weighted / candidates.len() as f64
}

/// Maximum depth of a node whose non-winning outcomes are `children`
#[must_use]
pub fn max_child_depth(children: &Children<'_>) -> usize {
    1 + children.values().map(super::tree::Node::max_depth).max().unwrap_or(0)
}
