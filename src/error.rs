//! Error types for the decision-tree builder

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our error
pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Debug, Error)]
pub enum SolverError {
    /// A word-list entry is not five ASCII letters
    #[error("invalid word '{word}': {reason}")]
    InvalidWord {
        word: String,
        #[source]
        reason: WordError,
    },

    /// A word-list line is not five ASCII letters
    #[error("{}:{line}: invalid word '{word}': {reason}", .path.display())]
    InvalidEntry {
        path: PathBuf,
        line: usize,
        word: String,
        #[source]
        reason: WordError,
    },

    /// A word list could not be read
    #[error("failed to read {}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A tree has no path that ends at this secret
    #[error("tree has no path to secret '{0}'")]
    UnreachableSecret(String),

    #[error("no potential solutions were supplied")]
    EmptyVocabulary,

    /// The forced first guess is not a permitted guess
    #[error("initial guess '{0}' is not a permitted guess")]
    UnknownGuess(String),

    #[error("invalid search parameters: {0}")]
    InvalidParams(String),

    /// Every candidate guess was pruned by the guess budget
    #[error("no strategy identifies every secret within {remaining} further guesses")]
    Infeasible { remaining: usize },
}
