//! Word list loading utilities
//!
//! Word lists are plain text files with one word per line. Blank lines are
//! skipped and case is normalised.

use crate::core::{Vocabulary, Word, WordId};
use crate::error::{Result, SolverError};
use std::fs;
use std::path::Path;

/// Parse word-list text, validating every entry
///
/// Returns the lowercase words in file order. `path` is only used to label
/// errors.
///
/// # Errors
/// Returns `SolverError::InvalidEntry` with the 1-based line number of the
/// first entry that is not five ASCII letters.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use wordle_tree::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Crane\n\n slate \n", Path::new("answers.txt")).unwrap();
/// assert_eq!(words, ["crane", "slate"]);
/// ```
pub fn parse_word_list(content: &str, path: &Path) -> Result<Vec<String>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let trimmed = line.trim();
            Word::new(WordId::new(0), trimmed)
                .map(|word| word.text().to_string())
                .map_err(|reason| SolverError::InvalidEntry {
                    path: path.to_path_buf(),
                    line: index + 1,
                    word: trimmed.to_string(),
                    reason,
                })
        })
        .collect()
}

/// Read and validate a word-list file
///
/// # Errors
/// Returns `SolverError::ReadFile` if the file cannot be read, or
/// `SolverError::InvalidEntry` for a malformed line.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content, path)
}

/// Load the solution and guess lists into one vocabulary
///
/// # Errors
/// Propagates read and validation errors from either list, and
/// `SolverError::EmptyVocabulary` if the solution list has no words.
pub fn load_vocabulary<P, Q>(solutions: P, guesses: Q) -> Result<Vocabulary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let solutions = read_word_list(solutions)?;
    let guesses = read_word_list(guesses)?;
    Vocabulary::new(&solutions, &guesses)
}
