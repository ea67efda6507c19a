//! Branch-and-bound construction of the decision tree
//!
//! At every node the ranker shortlists guesses, each shortlisted guess is
//! partitioned and bounded, and only guesses whose bound can still beat the
//! best strategy found so far are expanded recursively.

use super::bounds::{average_child_depth, max_child_depth, quick_lower_bound};
use super::cache::FeedbackCache;
use super::params::SearchParams;
use super::partition::{Groups, partition};
use super::ranking::GuessRanker;
use super::tree::{Children, DecisionTree, Node};
use crate::core::{Vocabulary, Word};
use crate::error::{Result, SolverError};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Best fully expanded guess at a node so far
struct Best<'a> {
    guess: &'a Word,
    average_depth: f64,
    max_depth: usize,
    children: Children<'a>,
}

impl Best<'_> {
    #[allow(clippy::float_cmp)]
    fn is_beaten_by(&self, average_depth: f64, max_depth: usize) -> bool {
        average_depth < self.average_depth
            || (average_depth == self.average_depth && max_depth < self.max_depth)
    }
}

pub struct TreeBuilder<'a> {
    vocabulary: &'a Vocabulary,
    cache: &'a FeedbackCache,
    ranker: GuessRanker<'a>,
    params: SearchParams,
}

impl<'a> TreeBuilder<'a> {
    /// # Panics
    /// Panics if `cache` was not sized for `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, cache: &'a FeedbackCache, params: SearchParams) -> Self {
        assert_eq!(
            cache.vocabulary_size(),
            vocabulary.len(),
            "feedback cache sized for a different vocabulary"
        );

        Self {
            vocabulary,
            cache,
            ranker: GuessRanker::new(cache, vocabulary.guesses()),
            params,
        }
    }

    #[must_use]
    pub const fn params(&self) -> SearchParams {
        self.params
    }

    /// Guesses scored by the ranker so far
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.ranker.evaluations()
    }

    /// Build the tree over every potential solution
    ///
    /// With `forced_root` the opening guess is fixed and ranking is skipped
    /// at the root; otherwise the root guess is searched like any other node.
    ///
    /// # Errors
    /// Returns `SolverError::Infeasible` if no strategy identifies every
    /// secret within `max_tree_depth` further guesses.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Vocabulary;
    /// use wordle_tree::solver::{FeedbackCache, SearchParams, TreeBuilder};
    ///
    /// let vocabulary = Vocabulary::new(["abcde", "fghij"], ["klmno"]).unwrap();
    /// let cache = FeedbackCache::for_vocabulary(&vocabulary);
    /// let builder = TreeBuilder::new(&vocabulary, &cache, SearchParams::default());
    ///
    /// let tree = builder.build(None).unwrap();
    /// assert!((tree.average_depth() - 1.5).abs() < f64::EPSILON);
    /// assert_eq!(tree.max_depth(), 2);
    /// ```
    pub fn build(&self, forced_root: Option<&'a Word>) -> Result<DecisionTree<'a>> {
        let candidates: Vec<&'a Word> = self.vocabulary.solutions().iter().collect();
        self.build_for(candidates, forced_root)
    }

    /// Build the tree over an explicit candidate set
    ///
    /// # Errors
    /// Returns `SolverError::EmptyVocabulary` for an empty candidate set and
    /// `SolverError::Infeasible` if the guess budget cannot be met.
    pub fn build_for(
        &self,
        candidates: Vec<&'a Word>,
        forced_root: Option<&'a Word>,
    ) -> Result<DecisionTree<'a>> {
        if candidates.is_empty() {
            return Err(SolverError::EmptyVocabulary);
        }

        let start = Instant::now();
        let remaining = self.params.max_tree_depth;
        info!(
            candidates = candidates.len(),
            guesses = self.vocabulary.len(),
            forced_root = forced_root.map(Word::text),
            top_n = self.params.top_n,
            hard_max = self.params.hard_max,
            max_tree_depth = remaining,
            "building decision tree"
        );

        let root = match forced_root {
            Some(guess) => self.expand(candidates, guess, remaining),
            None => self.solve(candidates, remaining),
        }
        .ok_or(SolverError::Infeasible { remaining })?;

        info!(
            first_guess = root.guess().text(),
            average_depth = root.average_depth(),
            max_depth = root.max_depth(),
            elapsed = ?start.elapsed(),
            feedback_computed = self.cache.computed(),
            evaluations = self.evaluations(),
            "decision tree complete"
        );

        Ok(DecisionTree::new(root))
    }

    /// Best subtree for `candidates` with `remaining` guesses after this one
    fn solve(&self, candidates: Vec<&'a Word>, remaining: usize) -> Option<Node<'a>> {
        match candidates.len() {
            0 => None,
            1 => Some(Node::leaf(candidates[0])),
            _ if remaining == 0 => None,
            2 => Some(Node::pair(self.cache, candidates[0], candidates[1])),
            _ => self.search(candidates, remaining),
        }
    }

    fn search(&self, candidates: Vec<&'a Word>, remaining: usize) -> Option<Node<'a>> {
        let shortlist =
            self.ranker
                .rank_and_shortlist(&candidates, self.params.top_n, self.params.hard_max);
        debug!(
            candidates = candidates.len(),
            shortlist = shortlist.len(),
            remaining,
            "ranked guesses"
        );

        let mut best: Option<Best<'a>> = None;

        for score in &shortlist {
            // With one guess left every group must already be a single word
            if remaining == 1 && score.max_size != 1 {
                continue;
            }

            let groups = partition(self.cache, &candidates, score.guess);
            let lower_bound = quick_lower_bound(&candidates, &groups);
            if best.as_ref().is_some_and(|b| b.average_depth <= lower_bound) {
                trace!(guess = score.guess.text(), lower_bound, "pruned by bound");
                continue;
            }

            let Some(children) = self.build_children(groups, remaining - 1) else {
                trace!(guess = score.guess.text(), "exceeds guess budget");
                continue;
            };

            let average_depth = average_child_depth(&candidates, &children);
            let max_depth = max_child_depth(&children);

            if best.as_ref().is_none_or(|b| b.is_beaten_by(average_depth, max_depth)) {
                best = Some(Best {
                    guess: score.guess,
                    average_depth,
                    max_depth,
                    children,
                });
            }

            // This guess reached its own bound
            if best.as_ref().is_some_and(|b| b.average_depth <= lower_bound) {
                break;
            }
        }

        best.map(|b| Node::new(candidates, b.guess, b.average_depth, b.max_depth, b.children))
    }

    /// Play `guess` here regardless of ranking and search below it
    fn expand(&self, candidates: Vec<&'a Word>, guess: &'a Word, remaining: usize) -> Option<Node<'a>> {
        let groups = partition(self.cache, &candidates, guess);
        if !groups.is_empty() && remaining == 0 {
            return None;
        }

        let children = self.build_children(groups, remaining.saturating_sub(1))?;
        Some(Node::with_children(candidates, guess, children))
    }

    /// Solve every group independently; `None` if any of them cannot be solved
    fn build_children(&self, groups: Groups<'a>, remaining: usize) -> Option<Children<'a>> {
        groups
            .into_par_iter()
            .map(|(feedback, group)| self.solve(group, remaining).map(|node| (feedback, node)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn params(max_tree_depth: usize) -> SearchParams {
        SearchParams::new(6, 50, max_tree_depth).unwrap()
    }

    fn mono_vocabulary(extra: &[&str]) -> Vocabulary {
        Vocabulary::new(["bbbbb", "ccccc", "ddddd", "eeeee", "fffff"], extra.iter().copied()).unwrap()
    }

    #[test]
    fn single_candidate_is_leaf() {
        let vocabulary = Vocabulary::new(["crane"], ["slate", "trace"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, params(5)).build(None).unwrap();

        assert!((tree.average_depth() - 1.0).abs() < f64::EPSILON);
        assert_eq!(tree.max_depth(), 1);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.first_guess().text(), "crane");
    }

    #[test]
    fn two_candidates_make_pair() {
        let vocabulary = Vocabulary::new(["abcde", "fghij"], ["klmno"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, params(5)).build(None).unwrap();
        let root = tree.root();

        assert!((tree.average_depth() - 1.5).abs() < f64::EPSILON);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(root.children().len(), 2);

        let abcde = vocabulary.get("abcde").unwrap();
        let fghij = vocabulary.get("fghij").unwrap();
        assert_eq!(root.guess(), abcde);
        assert_eq!(root.child(Feedback::calculate(abcde, abcde)).unwrap().guess(), abcde);
        assert_eq!(root.child(Feedback::calculate(abcde, fghij)).unwrap().guess(), fghij);
        assert!(root.children().values().all(Node::is_leaf));
    }

    #[test]
    fn perfect_splitter_outside_candidates() {
        let vocabulary = mono_vocabulary(&["bcdef"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, params(1)).build(None).unwrap();

        assert_eq!(tree.first_guess().text(), "bcdef");
        assert!((tree.average_depth() - 2.0).abs() < 1e-12);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.root().children().len(), 5);
    }

    #[test]
    fn chain_of_candidates_within_budget() {
        let vocabulary = mono_vocabulary(&[]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, params(4)).build(None).unwrap();

        // 1 + 2 + 3 + 4 + 5 guesses over five secrets
        assert!((tree.average_depth() - 3.0).abs() < 1e-12);
        assert_eq!(tree.max_depth(), 5);
        assert_eq!(tree.first_guess().text(), "bbbbb");
    }

    #[test]
    fn budget_too_small_is_infeasible() {
        let vocabulary = mono_vocabulary(&[]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);

        let err = TreeBuilder::new(&vocabulary, &cache, params(3)).build(None).unwrap_err();
        assert!(matches!(err, SolverError::Infeasible { remaining: 3 }));

        let err = TreeBuilder::new(&vocabulary, &cache, params(1)).build(None).unwrap_err();
        assert!(matches!(err, SolverError::Infeasible { remaining: 1 }));
    }

    #[test]
    fn pair_needs_one_further_guess() {
        let vocabulary = Vocabulary::new(["abcde", "fghij"], ["klmno"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);

        let err = TreeBuilder::new(&vocabulary, &cache, params(0)).build(None).unwrap_err();
        assert!(matches!(err, SolverError::Infeasible { remaining: 0 }));
    }

    #[test]
    fn forced_root_skips_ranking() {
        let vocabulary = mono_vocabulary(&["bcdef"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let builder = TreeBuilder::new(&vocabulary, &cache, params(4));

        let forced = builder.build(vocabulary.get("bbbbb")).unwrap();
        assert_eq!(forced.first_guess().text(), "bbbbb");
        // Below the root BCDEF splits the remaining four at once
        assert!((forced.average_depth() - (1.0 + 4.0 * 2.0 / 5.0)).abs() < 1e-12);
        assert_eq!(forced.max_depth(), 3);

        let searched = builder.build(None).unwrap();
        assert_eq!(searched.first_guess().text(), "bcdef");
        assert!(searched.average_depth() < forced.average_depth());
    }

    #[test]
    fn forced_root_on_single_candidate() {
        let vocabulary = Vocabulary::new(["crane"], ["slate"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let builder = TreeBuilder::new(&vocabulary, &cache, params(0));

        let tree = builder.build(vocabulary.get("crane")).unwrap();
        assert!(tree.root().is_leaf());
        assert_eq!(tree.max_depth(), 1);

        let err = builder.build(vocabulary.get("slate")).unwrap_err();
        assert!(matches!(err, SolverError::Infeasible { .. }));
    }

    #[test]
    fn every_secret_has_a_path() {
        let vocabulary = Vocabulary::new(
            ["crane", "slate", "trace", "crate", "grate", "irate", "plate", "stare", "share", "spare", "scare", "snare"],
            ["pious", "thumb", "dwarf"],
        )
        .unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let tree = TreeBuilder::new(&vocabulary, &cache, params(5)).build(None).unwrap();

        for secret in vocabulary.solutions() {
            let guesses = tree.guesses_for(secret).unwrap();
            assert_eq!(guesses.last().copied(), Some(secret));
            assert!(guesses.len() <= tree.max_depth());
        }

        let total: usize = tree.secret_paths().iter().map(Vec::len).sum();
        let average = total as f64 / vocabulary.solutions().len() as f64;
        assert!((average - tree.average_depth()).abs() < 1e-9);
    }

    #[test]
    fn rebuilding_gives_identical_tree() {
        let vocabulary = Vocabulary::new(
            ["crane", "slate", "trace", "crate", "grate", "irate", "plate", "stare", "share", "spare", "scare", "snare"],
            ["pious", "thumb", "dwarf"],
        )
        .unwrap();

        let shared = FeedbackCache::for_vocabulary(&vocabulary);
        let first = TreeBuilder::new(&vocabulary, &shared, params(5)).build(None).unwrap();
        let second = TreeBuilder::new(&vocabulary, &shared, params(5)).build(None).unwrap();
        let fresh = FeedbackCache::for_vocabulary(&vocabulary);
        let third = TreeBuilder::new(&vocabulary, &fresh, params(5)).build(None).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    /// Exact optimum of the average depth by exhaustive search
    fn brute_force(cache: &FeedbackCache, candidates: &[&Word], guesses: &[Word]) -> f64 {
        if candidates.len() == 1 {
            return 1.0;
        }

        guesses
            .iter()
            .filter_map(|guess| best_over_grouping(cache, candidates, guesses, guess))
            .fold(f64::INFINITY, f64::min)
    }

    /// Optimal average depth when `guess` is played first, if it makes progress
    fn best_over_grouping(
        cache: &FeedbackCache,
        candidates: &[&Word],
        guesses: &[Word],
        guess: &Word,
    ) -> Option<f64> {
        let groups = partition(cache, candidates, guess);
        if groups.values().any(|group| group.len() == candidates.len()) {
            return None;
        }

        let total: f64 = groups
            .values()
            .map(|group| group.len() as f64 * brute_force(cache, group, guesses))
            .sum();
        Some(1.0 + total / candidates.len() as f64)
    }

    fn random_vocabulary(rng: &mut StdRng) -> Vocabulary {
        let size = rng.random_range(2..=6);
        let words: Vec<String> = (0..size)
            .map(|_| {
                (0..5)
                    .map(|_| char::from(b'a' + rng.random_range(0..3u8)))
                    .collect()
            })
            .collect();
        Vocabulary::new(&words, Vec::<String>::new()).unwrap()
    }

    #[test]
    fn lower_bound_is_admissible() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let vocabulary = random_vocabulary(&mut rng);
            let cache = FeedbackCache::for_vocabulary(&vocabulary);
            let candidates: Vec<&Word> = vocabulary.solutions().iter().collect();
            if candidates.len() < 2 {
                continue;
            }

            for guess in vocabulary.guesses() {
                let Some(optimal) = best_over_grouping(&cache, &candidates, vocabulary.guesses(), guess)
                else {
                    continue;
                };
                let groups = partition(&cache, &candidates, guess);
                assert!(quick_lower_bound(&candidates, &groups) <= optimal + 1e-9);
            }
        }
    }

    #[test]
    fn builder_never_beats_exhaustive_optimum() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let vocabulary = random_vocabulary(&mut rng);
            let cache = FeedbackCache::for_vocabulary(&vocabulary);
            let candidates: Vec<&Word> = vocabulary.solutions().iter().collect();

            let optimal = brute_force(&cache, &candidates, vocabulary.guesses());
            let tree = TreeBuilder::new(&vocabulary, &cache, params(6)).build(None).unwrap();

            assert!(tree.average_depth() >= optimal - 1e-9);
            assert!(tree.average_depth() >= 1.0);
        }
    }
}
