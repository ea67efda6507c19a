//! Tuning parameters for the tree search

use crate::error::{Result, SolverError};

/// Shortlist size, widening cap and guess budget of one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Guesses fully explored at every node
    pub top_n: usize,
    /// Upper limit on the shortlist when heuristic ties widen it
    pub hard_max: usize,
    /// Further guesses allowed after the root guess (5 for standard Wordle)
    pub max_tree_depth: usize,
}

impl SearchParams {
    /// Create validated search parameters
    ///
    /// # Errors
    /// Returns `SolverError::InvalidParams` if `top_n` or `hard_max` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::solver::SearchParams;
    ///
    /// let params = SearchParams::new(6, 50, 5).unwrap();
    /// assert_eq!(params.top_n, 6);
    /// assert!(SearchParams::new(0, 50, 5).is_err());
    /// ```
    pub fn new(top_n: usize, hard_max: usize, max_tree_depth: usize) -> Result<Self> {
        if top_n == 0 {
            return Err(SolverError::InvalidParams(
                "top_n must be at least 1".to_string(),
            ));
        }
        if hard_max == 0 {
            return Err(SolverError::InvalidParams(
                "hard_max must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            top_n,
            hard_max,
            max_tree_depth,
        })
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            top_n: 6,
            hard_max: 50,
            max_tree_depth: 7,
        }
    }
}
