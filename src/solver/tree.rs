//! The decision tree produced by the search
//!
//! Each node records the candidates still possible when it is reached, the
//! guess to play there and the depth statistics that guess achieves. Children
//! are keyed by the feedback that leads to them and owned by their parent.

use super::bounds::{average_child_depth, max_child_depth};
use super::cache::FeedbackCache;
use crate::core::{Feedback, Word};
use std::collections::BTreeMap;

/// Child nodes keyed by the feedback that selects them
pub type Children<'w> = BTreeMap<Feedback, Node<'w>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Node<'w> {
    candidates: Vec<&'w Word>,
    guess: &'w Word,
    average_depth: f64,
    max_depth: usize,
    children: Children<'w>,
}

impl<'w> Node<'w> {
    /// A single remaining candidate: guess it
    #[must_use]
    pub fn leaf(word: &'w Word) -> Self {
        Self {
            candidates: vec![word],
            guess: word,
            average_depth: 1.0,
            max_depth: 1,
            children: Children::new(),
        }
    }

    /// Two remaining candidates: guess the first, then the second if needed
    #[must_use]
    pub fn pair(cache: &FeedbackCache, first: &'w Word, second: &'w Word) -> Self {
        let mut children = Children::new();
        children.insert(cache.get(first, first), Self::leaf(first));
        children.insert(cache.get(first, second), Self::leaf(second));

        Self {
            candidates: vec![first, second],
            guess: first,
            average_depth: 1.5,
            max_depth: 2,
            children,
        }
    }

    /// A node whose statistics are derived from its children
    #[must_use]
    pub fn with_children(candidates: Vec<&'w Word>, guess: &'w Word, children: Children<'w>) -> Self {
        let average_depth = average_child_depth(&candidates, &children);
        let max_depth = max_child_depth(&children);
        Self::new(candidates, guess, average_depth, max_depth, children)
    }

    pub(crate) const fn new(
        candidates: Vec<&'w Word>,
        guess: &'w Word,
        average_depth: f64,
        max_depth: usize,
        children: Children<'w>,
    ) -> Self {
        Self {
            candidates,
            guess,
            average_depth,
            max_depth,
            children,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'w Word] {
        &self.candidates
    }

    /// The guess to play at this node
    #[must_use]
    pub const fn guess(&self) -> &'w Word {
        self.guess
    }

    /// Guesses needed on average, over the secrets that reach this node
    #[must_use]
    pub const fn average_depth(&self) -> f64 {
        self.average_depth
    }

    /// Guesses needed in the worst case from this node
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn children(&self) -> &Children<'w> {
        &self.children
    }

    #[must_use]
    pub fn child(&self, feedback: Feedback) -> Option<&Self> {
        self.children.get(&feedback)
    }

    /// Number of secrets that reach this node
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the guess played here can itself be the secret
    #[must_use]
    pub fn finishes_here(&self) -> bool {
        self.candidates.contains(&self.guess)
    }
}

/// A complete strategy for one candidate set
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree<'w> {
    root: Node<'w>,
}

impl<'w> DecisionTree<'w> {
    #[must_use]
    pub const fn new(root: Node<'w>) -> Self {
        Self { root }
    }

    #[must_use]
    pub const fn root(&self) -> &Node<'w> {
        &self.root
    }

    /// The opening guess
    #[must_use]
    pub const fn first_guess(&self) -> &'w Word {
        self.root.guess
    }

    #[must_use]
    pub const fn average_depth(&self) -> f64 {
        self.root.average_depth
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.root.max_depth
    }

    /// The node reached by replaying `feedback` from the root
    #[must_use]
    pub fn node_after(&self, feedback: &[Feedback]) -> Option<&Node<'w>> {
        feedback
            .iter()
            .try_fold(&self.root, |node, &code| node.child(code))
    }

    /// The guesses the tree plays when `secret` is the answer
    ///
    /// Returns `None` if the secret is not one of the tree's candidates.
    #[must_use]
    pub fn guesses_for(&self, secret: &Word) -> Option<Vec<&'w Word>> {
        let mut node = &self.root;
        let mut guesses = vec![node.guess];

        while node.guess != secret {
            node = node.child(Feedback::calculate(node.guess, secret))?;
            guesses.push(node.guess);
        }

        Some(guesses)
    }

    /// One guess sequence per secret, in tree order
    ///
    /// A path ends where its secret is guessed: at a leaf, or at an inner
    /// node whose own guess is the secret.
    #[must_use]
    pub fn secret_paths(&self) -> Vec<Vec<&'w Word>> {
        let mut paths = Vec::with_capacity(self.root.len());
        collect_paths(&self.root, &mut Vec::new(), &mut paths);
        paths
    }

    /// How many secrets are solved with each number of guesses
    #[must_use]
    pub fn depth_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for path in self.secret_paths() {
            *histogram.entry(path.len()).or_insert(0) += 1;
        }
        histogram
    }
}

fn collect_paths<'w>(node: &Node<'w>, prefix: &mut Vec<&'w Word>, paths: &mut Vec<Vec<&'w Word>>) {
    prefix.push(node.guess);

    if node.is_leaf() || node.finishes_here() {
        paths.push(prefix.clone());
    }

    for (feedback, child) in &node.children {
        if !feedback.is_all_exact() {
            collect_paths(child, prefix, paths);
        }
    }

    prefix.pop();
}
