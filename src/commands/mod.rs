//! Command implementations

pub mod build;
pub mod play;
pub mod stats;

pub use build::{BuildConfig, BuildSummary, SearchConfig, SearchOutcome, forced_guess, run_build};
pub use play::{play_tree, run_play};
pub use stats::{TreeStatistics, run_stats};
