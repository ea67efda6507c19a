//! Plain-text serialisation of a decision tree
//!
//! One line per secret: the guesses the tree plays for it, joined by
//! [`DELIMITER`], ending with the secret itself.

use crate::solver::DecisionTree;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Separator between the guesses of one path
pub const DELIMITER: &str = ", ";

/// Write every root-to-secret path of `tree` into `sink`
///
/// Returns the number of lines written.
///
/// # Errors
/// Propagates any I/O error from `sink`.
///
/// # Examples
/// ```
/// use wordle_tree::core::Vocabulary;
/// use wordle_tree::output::write_tree;
/// use wordle_tree::solver::{FeedbackCache, SearchParams, TreeBuilder};
///
/// let vocabulary = Vocabulary::new(["abcde", "fghij"], ["klmno"]).unwrap();
/// let cache = FeedbackCache::for_vocabulary(&vocabulary);
/// let tree = TreeBuilder::new(&vocabulary, &cache, SearchParams::default())
///     .build(None)
///     .unwrap();
///
/// let mut out = Vec::new();
/// assert_eq!(write_tree(&tree, &mut out).unwrap(), 2);
/// assert_eq!(String::from_utf8(out).unwrap(), "abcde\nabcde, fghij\n");
/// ```
pub fn write_tree<W: Write>(tree: &DecisionTree<'_>, mut sink: W) -> io::Result<usize> {
    let paths = tree.secret_paths();

    for path in &paths {
        let line = path
            .iter()
            .map(|word| word.text())
            .collect::<Vec<_>>()
            .join(DELIMITER);
        writeln!(sink, "{line}")?;
    }

    sink.flush()?;
    Ok(paths.len())
}

/// Write the tree to a file, replacing any existing content
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_tree_to_file<P: AsRef<Path>>(tree: &DecisionTree<'_>, path: P) -> io::Result<usize> {
    let file = File::create(path)?;
    write_tree(tree, BufWriter::new(file))
}
