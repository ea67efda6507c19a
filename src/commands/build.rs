//! Build command
//!
//! Loads the word lists, searches for the tree and writes it to disk. The
//! search itself is shared with the `stats` and `play` commands.

use crate::core::Vocabulary;
use crate::output::write_tree_to_file;
use crate::solver::{DecisionTree, FeedbackCache, SearchParams, TreeBuilder};
use crate::wordlists::load_vocabulary;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Initial-guess argument that lets the search choose the root
pub const AUTO_GUESS: &str = "auto";

/// Interpret the initial-guess argument
///
/// # Examples
/// ```
/// use wordle_tree::commands::build::forced_guess;
///
/// assert_eq!(forced_guess("salet"), Some("salet"));
/// assert_eq!(forced_guess("AUTO"), None);
/// ```
#[must_use]
pub fn forced_guess(argument: &str) -> Option<&str> {
    let argument = argument.trim();
    (!argument.eq_ignore_ascii_case(AUTO_GUESS)).then_some(argument)
}

/// Word lists and parameters of one search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Forced root guess, or `None` to rank at the root too
    pub initial_guess: Option<String>,
    pub solutions: PathBuf,
    pub guesses: PathBuf,
    pub params: SearchParams,
}

/// A finished search
pub struct SearchOutcome<'a> {
    pub tree: DecisionTree<'a>,
    pub elapsed: Duration,
    pub evaluations: usize,
}

impl SearchConfig {
    /// Load both word lists
    ///
    /// # Errors
    /// Returns an error if either list cannot be read or validated.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        load_vocabulary(&self.solutions, &self.guesses).context("failed to load word lists")
    }

    /// Run the tree search with a progress spinner
    ///
    /// # Errors
    /// Returns an error if the initial guess is not a permitted guess or no
    /// tree fits the guess budget.
    pub fn search<'a>(&self, vocabulary: &'a Vocabulary, cache: &'a FeedbackCache) -> Result<SearchOutcome<'a>> {
        let forced_root = self
            .initial_guess
            .as_deref()
            .map(|text| vocabulary.resolve_guess(text))
            .transpose()?;

        info!(
            solutions = vocabulary.solutions().len(),
            words = vocabulary.len(),
            "loaded vocabulary"
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
        spinner.set_message(match forced_root {
            Some(word) => format!("Searching below {}", word.text().to_uppercase()),
            None => "Searching for the best opening".to_string(),
        });
        spinner.enable_steady_tick(Duration::from_millis(120));

        let start = Instant::now();
        let builder = TreeBuilder::new(vocabulary, cache, self.params);
        let built = builder.build(forced_root);
        spinner.finish_and_clear();

        Ok(SearchOutcome {
            tree: built?,
            elapsed: start.elapsed(),
            evaluations: builder.evaluations(),
        })
    }
}

/// Configuration for one build
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub search: SearchConfig,
    pub output: PathBuf,
}

/// Outcome of a build
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub first_guess: String,
    pub average_depth: f64,
    pub max_depth: usize,
    pub secrets: usize,
    pub vocabulary_size: usize,
    pub lines_written: usize,
    pub feedback_computed: usize,
    pub evaluations: usize,
    pub elapsed: Duration,
    pub output: PathBuf,
}

/// Run a full build and write the tree to `config.output`
///
/// # Errors
/// Returns an error if a word list cannot be loaded, the initial guess is not
/// a permitted guess, no tree fits the guess budget, or the output cannot be
/// written.
pub fn run_build(config: &BuildConfig) -> Result<BuildSummary> {
    let vocabulary = config.search.vocabulary()?;
    let cache = FeedbackCache::for_vocabulary(&vocabulary);
    let outcome = config.search.search(&vocabulary, &cache)?;
    let tree = &outcome.tree;

    let lines_written = write_tree_to_file(tree, &config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    info!(path = %config.output.display(), lines = lines_written, "wrote decision tree");

    Ok(BuildSummary {
        first_guess: tree.first_guess().text().to_string(),
        average_depth: tree.average_depth(),
        max_depth: tree.max_depth(),
        secrets: vocabulary.solutions().len(),
        vocabulary_size: vocabulary.len(),
        lines_written,
        feedback_computed: cache.computed(),
        evaluations: outcome.evaluations,
        elapsed: outcome.elapsed,
        output: config.output.clone(),
    })
}
