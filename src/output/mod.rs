//! Tree files and terminal output
//!
//! Serialising trees to text and pretty-printing command results.

pub mod display;
pub mod formatters;
mod writer;

pub use display::{print_build_summary, print_tree_statistics};
pub use writer::{DELIMITER, write_tree, write_tree_to_file};
