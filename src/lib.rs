//! Wordle Decision Tree Builder
//!
//! Builds a complete Wordle strategy tree that minimises the average number of
//! guesses over every potential solution, using branch-and-bound search with a
//! size-based guess ranking and an admissible lower bound.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::core::Vocabulary;
//! use wordle_tree::solver::{FeedbackCache, SearchParams, TreeBuilder};
//!
//! let vocabulary = Vocabulary::new(
//!     ["crane", "slate", "trace", "crate"],
//!     ["pious"],
//! )
//! .unwrap();
//! let cache = FeedbackCache::for_vocabulary(&vocabulary);
//! let builder = TreeBuilder::new(&vocabulary, &cache, SearchParams::default());
//!
//! let tree = builder.build(None).unwrap();
//! println!("open with {} ({:.4} guesses on average)", tree.first_guess(), tree.average_depth());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Tree search
pub mod solver;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Tree serialisation and terminal output
pub mod output;
