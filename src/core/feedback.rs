//! Feedback code calculation and representation
//!
//! Each letter position `k` owns two bits of the code:
//! - bit `2k + 1`: exact match at this position (green)
//! - bit `2k`: letter present elsewhere with unconsumed multiplicity (yellow)
//!
//! The two bits of a position are never both set, so a code reads as a
//! base-4 number whose digits are 0 (absent), 1 (present) or 2 (exact).

use super::word::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;

/// Feedback for one guess against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Feedback(u16);

impl Feedback {
    /// Every position exact (the guess is the target)
    pub const ALL_EXACT: Self = Self(0b10_1010_1010);

    /// No letter of the guess occurs in the target
    pub const ALL_ABSENT: Self = Self(0);

    /// Exclusive upper bound of raw code values
    pub const CODE_SPACE: usize = 1 << (2 * WORD_LENGTH);

    /// Create a feedback code from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value is outside the code space
    #[inline]
    #[must_use]
    pub const fn new(value: u16) -> Self {
        debug_assert!((value as usize) < Self::CODE_SPACE, "feedback code out of range");
        Self(value)
    }

    /// Get the raw code value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Compute the feedback for `guess` played against `target`, uncached
    ///
    /// # Algorithm
    /// 1. Per letter, the shared multiplicity is the smaller of the two counts
    /// 2. First pass: mark exact positions and consume their shared letters
    /// 3. Second pass: mark a remaining position present if its letter still
    ///    has shared multiplicity left, consuming one
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Feedback, Word, WordId};
    ///
    /// let guess = Word::new(WordId::new(0), "crane").unwrap();
    /// let target = Word::new(WordId::new(1), "slate").unwrap();
    ///
    /// // A and E are exact, everything else is absent
    /// let feedback = Feedback::calculate(&guess, &target);
    /// assert!(feedback.is_exact_at(2) && feedback.is_exact_at(4));
    /// assert_eq!(feedback.count_present(), 0);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut shared = [0u8; ALPHABET_SIZE];
        for (slot, (&in_guess, &in_target)) in shared
            .iter_mut()
            .zip(guess.counts().iter().zip(target.counts()))
        {
            *slot = in_guess.min(in_target);
        }

        let mut code = 0u16;
        for (position, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                code |= exact_bit(position);
                shared[letter_index(g)] -= 1;
            }
        }

        for (position, &g) in guess.letters().iter().enumerate() {
            if code & exact_bit(position) != 0 {
                continue;
            }
            let remaining = &mut shared[letter_index(g)];
            if *remaining > 0 {
                code |= present_bit(position);
                *remaining -= 1;
            }
        }

        Self(code)
    }

    /// Check if this is the winning code
    #[inline]
    #[must_use]
    pub const fn is_all_exact(self) -> bool {
        self.0 == Self::ALL_EXACT.0
    }

    #[inline]
    #[must_use]
    pub const fn is_exact_at(self, position: usize) -> bool {
        self.0 & exact_bit(position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_present_at(self, position: usize) -> bool {
        self.0 & present_bit(position) != 0
    }

    /// Count the exact (green) positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        (0..WORD_LENGTH).filter(|&p| self.is_exact_at(p)).count()
    }

    /// Count the present-elsewhere (yellow) positions
    #[must_use]
    pub fn count_present(self) -> usize {
        (0..WORD_LENGTH).filter(|&p| self.is_present_at(p)).count()
    }

    /// Parse a code from a string like "GY-GY", "🟩🟨⬜🟩🟨" or "21021"
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for exact
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'0'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Feedback;
    ///
    /// let letters = Feedback::parse("GY-GY").unwrap();
    /// let emoji = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let digits = Feedback::parse("21021").unwrap();
    /// assert_eq!(letters, emoji);
    /// assert_eq!(letters, digits);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut code = 0u16;
        let mut positions = 0;

        for ch in s.trim().chars() {
            if positions == WORD_LENGTH {
                return None;
            }
            match ch {
                'G' | 'g' | '2' | '🟩' => code |= exact_bit(positions),
                'Y' | 'y' | '1' | '🟨' => code |= present_bit(positions),
                '-' | '_' | '0' | '⬜' | '⬛' => {}
                _ => return None,
            }
            positions += 1;
        }

        (positions == WORD_LENGTH).then_some(Self(code))
    }

    /// Render the code as a row of coloured squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        (0..WORD_LENGTH)
            .map(|p| {
                if self.is_exact_at(p) {
                    '🟩'
                } else if self.is_present_at(p) {
                    '🟨'
                } else {
                    '⬜'
                }
            })
            .collect()
    }
}

#[inline]
const fn exact_bit(position: usize) -> u16 {
    1 << (2 * position + 1)
}

#[inline]
const fn present_bit(position: usize) -> u16 {
    1 << (2 * position)
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
