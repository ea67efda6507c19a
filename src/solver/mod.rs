//! Decision tree search
//!
//! This module contains the feedback cache, guess ranking, the admissible
//! lower bound and the branch-and-bound tree builder.

pub mod bounds;
mod builder;
pub mod cache;
pub mod params;
pub mod partition;
pub mod ranking;
pub mod tree;

pub use bounds::{average_child_depth, max_child_depth, quick_lower_bound};
pub use builder::TreeBuilder;
pub use cache::FeedbackCache;
pub use params::SearchParams;
pub use partition::{Groups, partition};
pub use ranking::{GuessRanker, GuessScore, score_guess};
pub use tree::{Children, DecisionTree, Node};
