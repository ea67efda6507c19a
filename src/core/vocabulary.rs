//! Identifier-resolved word collections
//!
//! The vocabulary owns every word for the run. Potential solutions are
//! numbered first, then the remaining permitted guesses, so identifiers are
//! contiguous and solutions are always permitted guesses too.

use super::word::{Word, WordId};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    solution_count: usize,
    by_text: FxHashMap<String, WordId>,
}

impl Vocabulary {
    /// Build a vocabulary from the two word lists
    ///
    /// Repeated words keep the identifier of their first occurrence, so a
    /// guess-list word that is also a solution is not duplicated.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidWord` for any entry that is not five ASCII
    /// letters, and `SolverError::EmptyVocabulary` if there are no solutions.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::new(["crane", "slate"], ["trace", "crane"]).unwrap();
    /// assert_eq!(vocabulary.solutions().len(), 2);
    /// assert_eq!(vocabulary.len(), 3);
    /// assert_eq!(vocabulary.get("trace").unwrap().id().index(), 2);
    /// ```
    pub fn new<S, G>(
        solutions: impl IntoIterator<Item = S>,
        guesses: impl IntoIterator<Item = G>,
    ) -> Result<Self, SolverError>
    where
        S: AsRef<str>,
        G: AsRef<str>,
    {
        let mut vocabulary = Self {
            words: Vec::new(),
            solution_count: 0,
            by_text: FxHashMap::default(),
        };

        for text in solutions {
            vocabulary.insert(text.as_ref())?;
        }
        vocabulary.solution_count = vocabulary.words.len();

        if vocabulary.solution_count == 0 {
            return Err(SolverError::EmptyVocabulary);
        }

        for text in guesses {
            vocabulary.insert(text.as_ref())?;
        }

        Ok(vocabulary)
    }

    fn insert(&mut self, text: &str) -> Result<(), SolverError> {
        let normalized = text.trim().to_lowercase();
        if self.by_text.contains_key(&normalized) {
            return Ok(());
        }

        let id = WordId::new(self.words.len() as u32);
        let word = Word::new(id, normalized).map_err(|reason| SolverError::InvalidWord {
            word: text.to_string(),
            reason,
        })?;

        self.by_text.insert(word.text().to_string(), id);
        self.words.push(word);
        Ok(())
    }

    /// The potential secrets, in load order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.words[..self.solution_count]
    }

    /// Every permitted guess: the solutions followed by the guess-only words
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.words
    }

    /// Total number of distinct words (the feedback cache dimension)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look a word up by its text (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.by_text
            .get(&text.trim().to_lowercase())
            .map(|id| &self.words[id.index()])
    }

    /// Look up a permitted guess supplied by the user
    ///
    /// # Errors
    /// Returns `SolverError::UnknownGuess` if `text` is not in the vocabulary.
    pub fn resolve_guess(&self, text: &str) -> Result<&Word, SolverError> {
        self.get(text)
            .ok_or_else(|| SolverError::UnknownGuess(text.trim().to_string()))
    }

    /// Resolve an identifier issued by this vocabulary
    ///
    /// # Panics
    /// Panics if `id` was not issued by this vocabulary
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_contiguous_solutions_first() {
        let vocabulary = Vocabulary::new(["crane", "slate"], ["trace", "irate"]).unwrap();

        let ids: Vec<usize> = vocabulary.guesses().iter().map(|w| w.id().index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(vocabulary.solutions()[1].text(), "slate");
        assert_eq!(vocabulary.word(WordId::new(3)).text(), "irate");
    }

    #[test]
    fn duplicates_are_skipped() {
        let vocabulary =
            Vocabulary::new(["crane", "CRANE", "slate"], ["slate", "trace"]).unwrap();

        assert_eq!(vocabulary.solutions().len(), 2);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let vocabulary = Vocabulary::new(["crane"], ["slate"]).unwrap();

        assert_eq!(vocabulary.get("SLATE").map(Word::text), Some("slate"));
        assert!(vocabulary.get("zzzzz").is_none());
    }

    #[test]
    fn unknown_guess_is_reported() {
        let vocabulary = Vocabulary::new(["crane"], ["slate"]).unwrap();

        assert_eq!(vocabulary.resolve_guess(" Slate ").unwrap().text(), "slate");
        let err = vocabulary.resolve_guess("pious").unwrap_err();
        assert!(matches!(err, SolverError::UnknownGuess(ref text) if text == "pious"));
    }

    #[test]
    fn invalid_word_is_reported() {
        let err = Vocabulary::new(["crane"], ["toolong"]).unwrap_err();
        assert!(matches!(err, SolverError::InvalidWord { ref word, .. } if word == "toolong"));
    }

    #[test]
    fn empty_solutions_rejected() {
        let err = Vocabulary::new(Vec::<String>::new(), ["crane"]).unwrap_err();
        assert!(matches!(err, SolverError::EmptyVocabulary));
    }
}
