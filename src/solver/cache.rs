//! Memoised feedback codes
//!
//! One slot per ordered (guess, target) pair, keyed by
//! `guess_id * vocabulary_size + target_id`. Slots start out unset and are
//! written at most once with a value that never changes, so concurrent
//! readers only need an atomic load to decide whether to compute.

use crate::core::{Feedback, Vocabulary, Word};
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};

/// Marker for a slot that has not been computed yet (outside the code space)
const UNSET: u16 = u16::MAX;

pub struct FeedbackCache {
    vocabulary_size: usize,
    slots: Box<[AtomicU16]>,
    computed: AtomicUsize,
}

impl FeedbackCache {
    /// Allocate every slot up front for `vocabulary_size²` pairs
    #[must_use]
    pub fn new(vocabulary_size: usize) -> Self {
        let slots = (0..vocabulary_size * vocabulary_size)
            .map(|_| AtomicU16::new(UNSET))
            .collect();

        Self {
            vocabulary_size,
            slots,
            computed: AtomicUsize::new(0),
        }
    }

    /// Size a cache for every word of `vocabulary`
    #[must_use]
    pub fn for_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(vocabulary.len())
    }

    /// Feedback for `guess` against `target`, computed on first request
    ///
    /// # Panics
    /// Panics if either identifier lies outside the vocabulary the cache was
    /// sized for.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Feedback, Vocabulary};
    /// use wordle_tree::solver::FeedbackCache;
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate"], ["trace"]).unwrap();
    /// let cache = FeedbackCache::for_vocabulary(&vocabulary);
    /// let crane = vocabulary.get("crane").unwrap();
    ///
    /// assert_eq!(cache.get(crane, crane), Feedback::ALL_EXACT);
    /// ```
    #[inline]
    pub fn get(&self, guess: &Word, target: &Word) -> Feedback {
        let slot = &self.slots[guess.id().index() * self.vocabulary_size + target.id().index()];

        let cached = slot.load(Ordering::Relaxed);
        if cached != UNSET {
            return Feedback::new(cached);
        }

        let feedback = Feedback::calculate(guess, target);
        slot.store(feedback.value(), Ordering::Relaxed);
        self.computed.fetch_add(1, Ordering::Relaxed);
        feedback
    }

    /// Number of codes computed so far (cache misses)
    #[must_use]
    pub fn computed(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub const fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }
}
