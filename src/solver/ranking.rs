//! Size-based guess ranking
//!
//! A guess partitions the candidates into groups. The size metric looks at
//! the average and the largest group a guess leaves behind, which is cheap
//! enough to evaluate for every permitted guess at every node.

use super::cache::FeedbackCache;
use crate::core::{Feedback, Word};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

/// Candidate sets at or below this size first look for a perfect splitter
/// among themselves
pub const SMALL_SET: usize = 10;

/// Size metric of one guess over one candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessScore<'w> {
    pub guess: &'w Word,
    /// Candidates left per outcome, counting an immediate win as an outcome
    pub avg_size: f64,
    /// Largest group the guess can leave
    pub max_size: usize,
    /// Whether the guess is itself a candidate
    pub is_candidate: bool,
}

/// Score `guess` without materialising its groups
///
/// `avg_size = (|C| - self) / (#codes + self)` where `self` is 1 if the guess
/// is a candidate. A self-matching guess finishes that candidate for free, so
/// it counts as its own group of nothing left.
#[must_use]
pub fn score_guess<'w>(cache: &FeedbackCache, candidates: &[&Word], guess: &'w Word) -> GuessScore<'w> {
    let mut counts = [0u32; Feedback::CODE_SPACE];
    let mut is_candidate = false;
    let mut distinct = 0usize;
    let mut max_size = 0u32;

    for &target in candidates {
        if target == guess {
            is_candidate = true;
            continue;
        }

        let count = &mut counts[usize::from(cache.get(guess, target).value())];
        if *count == 0 {
            distinct += 1;
        }
        *count += 1;
        max_size = max_size.max(*count);
    }

    let remaining = candidates.len() - usize::from(is_candidate);
    let outcomes = distinct + usize::from(is_candidate);

    GuessScore {
        guess,
        avg_size: remaining as f64 / outcomes as f64,
        max_size: max_size as usize,
        is_candidate,
    }
}

/// Ranking order: smaller average first, candidates first on ties
#[must_use]
pub fn ranking_order(left: &GuessScore<'_>, right: &GuessScore<'_>) -> Ordering {
    left.avg_size
        .total_cmp(&right.avg_size)
        .then_with(|| right.is_candidate.cmp(&left.is_candidate))
}

/// Shortlists guesses for the tree builder
pub struct GuessRanker<'a> {
    cache: &'a FeedbackCache,
    guesses: &'a [Word],
    evaluations: AtomicUsize,
}

impl<'a> GuessRanker<'a> {
    #[must_use]
    pub const fn new(cache: &'a FeedbackCache, guesses: &'a [Word]) -> Self {
        Self {
            cache,
            guesses,
            evaluations: AtomicUsize::new(0),
        }
    }

    /// Number of guesses scored so far
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(AtomicOrdering::Relaxed)
    }

    fn score(&self, candidates: &[&Word], guess: &'a Word) -> GuessScore<'a> {
        self.evaluations.fetch_add(1, AtomicOrdering::Relaxed);
        score_guess(self.cache, candidates, guess)
    }

    /// Pick the guesses worth a full search at this node
    ///
    /// May return fewer than `top_n` results when one is provably optimal
    /// (a perfect splitter, or a best guess whose worst group has two words),
    /// and more than `top_n` when the cut-off falls inside a run of equal
    /// scores. Never more than `hard_max` after widening.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Vocabulary, Word};
    /// use wordle_tree::solver::{FeedbackCache, GuessRanker};
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate", "pious"], ["zzzzz"]).unwrap();
    /// let cache = FeedbackCache::for_vocabulary(&vocabulary);
    /// let ranker = GuessRanker::new(&cache, vocabulary.guesses());
    /// let candidates: Vec<&Word> = vocabulary.solutions().iter().collect();
    ///
    /// // CRANE tells all three apart, so nothing else is considered
    /// let shortlist = ranker.rank_and_shortlist(&candidates, 6, 50);
    /// assert_eq!(shortlist.len(), 1);
    /// assert_eq!(shortlist[0].guess.text(), "crane");
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn rank_and_shortlist(
        &self,
        candidates: &[&'a Word],
        top_n: usize,
        hard_max: usize,
    ) -> Vec<GuessScore<'a>> {
        if candidates.len() <= SMALL_SET {
            let perfect = candidates
                .iter()
                .map(|&guess| self.score(candidates, guess))
                .find(|score| score.max_size == 1);
            if let Some(score) = perfect {
                return vec![score];
            }
        }

        let mut scores: Vec<GuessScore<'a>> = self
            .guesses
            .par_iter()
            .map(|guess| self.score(candidates, guess))
            .collect();
        scores.sort_by(ranking_order);

        let Some(best) = scores.first() else {
            return scores;
        };

        let keep = (top_n + 1).min(scores.len());
        let len = if best.max_size == 2 {
            // Every group then needs at most two more guesses
            1
        } else if keep >= 2 && scores[keep - 2].avg_size == scores[keep - 1].avg_size {
            let cut = scores[keep - 1].avg_size;
            let tied = scores.partition_point(|score| score.avg_size <= cut);
            tied.min(hard_max)
        } else {
            top_n
        };

        scores.truncate(len);
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vocabulary;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    /// Five words with no letters in common: every candidate leaves the
    /// other four in a single group
    fn mono_vocabulary(extra: &[&str]) -> Vocabulary {
        Vocabulary::new(["bbbbb", "ccccc", "ddddd", "eeeee", "fffff"], extra.iter().copied()).unwrap()
    }

    #[test]
    fn score_counts_groups() {
        let vocabulary = mono_vocabulary(&["bcxyz"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let candidates = refs(vocabulary.solutions());

        // {b}, {c}, {d, e, f}
        let score = score_guess(&cache, &candidates, vocabulary.get("bcxyz").unwrap());
        assert!((score.avg_size - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(score.max_size, 3);
        assert!(!score.is_candidate);
    }

    #[test]
    fn score_self_match_counts_as_outcome() {
        let vocabulary = mono_vocabulary(&[]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let candidates = refs(vocabulary.solutions());

        // win + {c, d, e, f}: 4 remaining over 2 outcomes
        let score = score_guess(&cache, &candidates, vocabulary.get("bbbbb").unwrap());
        assert!((score.avg_size - 2.0).abs() < 1e-12);
        assert_eq!(score.max_size, 4);
        assert!(score.is_candidate);
    }

    #[test]
    fn shortcut_skips_full_vocabulary() {
        let vocabulary =
            Vocabulary::new(["crane", "slate", "pious"], ["zzzzz", "yyyyy", "xxxxx"]).unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let ranker = GuessRanker::new(&cache, vocabulary.guesses());
        let candidates = refs(vocabulary.solutions());

        let shortlist = ranker.rank_and_shortlist(&candidates, 6, 50);

        assert_eq!(shortlist.len(), 1);
        assert_eq!(shortlist[0].guess.text(), "crane");
        assert_eq!(shortlist[0].max_size, 1);
        // Only CRANE itself was scored
        assert_eq!(ranker.evaluations(), 1);
    }

    #[test]
    fn best_with_max_two_collapses_shortlist() {
        let vocabulary = Vocabulary::new(
            ["bbbbb", "ccccc", "ddddd", "eeeee"],
            ["bcxyz", "bxyzw"],
        )
        .unwrap();
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let ranker = GuessRanker::new(&cache, vocabulary.guesses());
        let candidates = refs(vocabulary.solutions());

        let shortlist = ranker.rank_and_shortlist(&candidates, 3, 50);

        assert_eq!(shortlist.len(), 1);
        assert_eq!(shortlist[0].guess.text(), "bcxyz");
        assert_eq!(shortlist[0].max_size, 2);
        // Four candidates tried for the shortcut, then all six guesses
        assert_eq!(ranker.evaluations(), 4 + 6);
    }

    #[test]
    fn no_tie_keeps_top_n() {
        let vocabulary = mono_vocabulary(&["bcxyz", "bxyzw"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let ranker = GuessRanker::new(&cache, vocabulary.guesses());
        let candidates = refs(vocabulary.solutions());

        let shortlist = ranker.rank_and_shortlist(&candidates, 1, 50);

        assert_eq!(shortlist.len(), 1);
        assert_eq!(shortlist[0].guess.text(), "bcxyz");
    }

    #[test]
    fn tie_at_cut_widens_shortlist() {
        let vocabulary = mono_vocabulary(&["bcxyz", "bxyzw"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let ranker = GuessRanker::new(&cache, vocabulary.guesses());
        let candidates = refs(vocabulary.solutions());

        // Positions 1 and 2 are both candidates at 2.0, so all five come in
        let shortlist = ranker.rank_and_shortlist(&candidates, 2, 50);
        let texts: Vec<&str> = shortlist.iter().map(|s| s.guess.text()).collect();
        assert_eq!(texts, ["bcxyz", "bbbbb", "ccccc", "ddddd", "eeeee", "fffff"]);

        let capped = ranker.rank_and_shortlist(&candidates, 2, 4);
        assert_eq!(capped.len(), 4);
    }

    #[test]
    fn ties_prefer_candidates() {
        let vocabulary = mono_vocabulary(&["zzzzz"]);
        let candidate = vocabulary.get("bbbbb").unwrap();
        let outsider = vocabulary.get("zzzzz").unwrap();

        let mut scores = vec![
            GuessScore { guess: outsider, avg_size: 2.0, max_size: 3, is_candidate: false },
            GuessScore { guess: candidate, avg_size: 2.0, max_size: 3, is_candidate: true },
            GuessScore { guess: outsider, avg_size: 1.5, max_size: 3, is_candidate: false },
        ];
        scores.sort_by(ranking_order);

        assert!((scores[0].avg_size - 1.5).abs() < 1e-12);
        assert!(scores[1].is_candidate);
        assert!(!scores[2].is_candidate);
    }

    #[test]
    fn ranking_is_deterministic() {
        let vocabulary = mono_vocabulary(&["bcxyz", "bxyzw", "zzzzz"]);
        let cache = FeedbackCache::for_vocabulary(&vocabulary);
        let ranker = GuessRanker::new(&cache, vocabulary.guesses());
        let candidates = refs(vocabulary.solutions());

        let first = ranker.rank_and_shortlist(&candidates, 3, 50);
        let second = ranker.rank_and_shortlist(&candidates, 3, 50);
        assert_eq!(first, second);
    }
}
