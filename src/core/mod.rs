//! Core domain types for the decision-tree search
//!
//! Words, the vocabulary that assigns their identifiers, and the feedback
//! codes a guess produces against a target. Everything here is pure data with
//! no knowledge of the search itself.

mod feedback;
mod vocabulary;
mod word;

pub use feedback::Feedback;
pub use vocabulary::Vocabulary;
pub use word::{ALPHABET_SIZE, WORD_LENGTH, Word, WordError, WordId};
