//! Word representation for the guess engine
//!
//! A Word stores a 5-letter word along with letter position indices used by
//! constraint filtering and duplicate-letter handling. Letters are full
//! `char`s rather than ASCII bytes so language packs with accented alphabets
//! (e.g. German umlauts) work unchanged.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;

/// Fixed word length for the whole engine.
pub const WORD_LEN: usize = 5;

/// A 5-letter word with letter position tracking
///
/// Stores the word as chars and maintains a map of letter positions for
/// occurrence counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [char; WORD_LEN],
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(WordError::InvalidLength(chars.len()));
        }

        if !chars.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [char; WORD_LEN] = match chars.try_into() {
            Ok(arr) => arr,
            Err(rest) => return Err(WordError::InvalidLength(rest.len())),
        };

        // Build position map for occurrence counting
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a char array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Count occurrences of a letter in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self, letter: char) -> usize {
        self.char_positions.get(&letter).map_or(0, Vec::len)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the feedback oracle for duplicate-letter accounting.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

// Dictionary order, used as the deterministic ranking tie-break.
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
