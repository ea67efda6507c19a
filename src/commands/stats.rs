//! Statistics of a decision tree
//!
//! Replays every potential solution through the tree and summarises how many
//! guesses each one takes.

use super::build::SearchConfig;
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{DecisionTree, FeedbackCache};
use anyhow::Result;
use std::collections::BTreeMap;

/// Secrets listed as the hardest in a report
const HARDEST_SHOWN: usize = 10;

/// Guess counts over every potential solution
#[derive(Debug, Clone)]
pub struct TreeStatistics {
    pub first_guess: String,
    pub secrets: usize,
    pub total_guesses: usize,
    pub average_depth: f64,
    pub max_depth: usize,
    /// Number of secrets solved with each guess count
    pub distribution: BTreeMap<usize, usize>,
    /// Secrets needing `max_depth` guesses, alphabetically
    pub hardest: Vec<String>,
}

impl TreeStatistics {
    /// Play every secret in `solutions` through `tree`
    ///
    /// # Errors
    /// Returns `SolverError::UnreachableSecret` if the tree never guesses one
    /// of the solutions.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::commands::TreeStatistics;
    /// use wordle_tree::core::Vocabulary;
    /// use wordle_tree::solver::{FeedbackCache, SearchParams, TreeBuilder};
    ///
    /// let vocabulary = Vocabulary::new(["abcde", "fghij"], ["klmno"]).unwrap();
    /// let cache = FeedbackCache::for_vocabulary(&vocabulary);
    /// let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
    ///     .build(None)
    ///     .unwrap();
    ///
    /// let stats = TreeStatistics::collect(&tree, vocabulary.solutions()).unwrap();
    /// assert_eq!(stats.total_guesses, 3);
    /// assert_eq!(stats.hardest, ["fghij"]);
    /// ```
    pub fn collect(tree: &DecisionTree<'_>, solutions: &[Word]) -> Result<Self, SolverError> {
        let mut depths = Vec::with_capacity(solutions.len());
        for secret in solutions {
            let guesses = tree
                .guesses_for(secret)
                .ok_or_else(|| SolverError::UnreachableSecret(secret.text().to_string()))?;
            depths.push((secret, guesses.len()));
        }

        let total_guesses: usize = depths.iter().map(|(_, depth)| depth).sum();
        let max_depth = depths.iter().map(|(_, depth)| *depth).max().unwrap_or(0);

        let mut distribution = BTreeMap::new();
        for (_, depth) in &depths {
            *distribution.entry(*depth).or_insert(0) += 1;
        }

        let mut hardest: Vec<String> = depths
            .iter()
            .filter(|(_, depth)| *depth == max_depth)
            .map(|(secret, _)| secret.text().to_string())
            .collect();
        hardest.sort_unstable();
        hardest.truncate(HARDEST_SHOWN);

        Ok(Self {
            first_guess: tree.first_guess().text().to_string(),
            secrets: solutions.len(),
            total_guesses,
            average_depth: if solutions.is_empty() {
                0.0
            } else {
                total_guesses as f64 / solutions.len() as f64
            },
            max_depth,
            distribution,
            hardest,
        })
    }
}

/// Build the tree and compute its statistics
///
/// # Errors
/// Returns an error if the word lists cannot be loaded or the search fails.
pub fn run_stats(config: &SearchConfig) -> Result<TreeStatistics> {
    let vocabulary = config.vocabulary()?;
    let cache = FeedbackCache::for_vocabulary(&vocabulary);
    let outcome = config.search(&vocabulary, &cache)?;
    Ok(TreeStatistics::collect(&outcome.tree, vocabulary.solutions())?)
}
