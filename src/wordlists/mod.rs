//! Word lists for the tree search
//!
//! Solutions and permitted guesses are read from text files at run time.

pub mod loader;

pub use loader::{load_vocabulary, read_word_list};
