//! Feedback colors and pattern scoring
//!
//! A pattern is the per-position feedback for one guess against one secret:
//! five [`Color`]s, one per letter. [`Pattern::score`] is the feedback oracle
//! and implements the two-pass, duplicate-letter-correct rules: greens consume
//! from the secret's letter counter first, then yellows are granted only while
//! that counter still has occurrences left. A naive `letter in secret` check
//! over-reports yellows for repeated letters and is deliberately not what this
//! module does.

use super::Word;
use super::word::WORD_LEN;

/// Feedback classification for a single letter position
///
/// Ordered `Grey < Yellow < Green` so callers that track a letter panel can
/// collapse repeated observations of one letter to its best color with `max`.
/// The engine itself only needs the three cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// Letter does not occur (beyond occurrences already accounted for)
    Grey,
    /// Letter occurs, but not at this position
    Yellow,
    /// Letter occurs at exactly this position
    Green,
}

/// Number of distinct patterns for a 5-letter guess (3^5).
pub const PATTERN_COUNT: usize = 243;

/// Feedback pattern for one guess: five colors, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Color; WORD_LEN]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Color::Green; WORD_LEN]);

    /// Create a pattern from explicit colors
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; WORD_LEN]) -> Self {
        Self(colors)
    }

    /// Get the colors, one per guess position
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LEN] {
        &self.0
    }

    /// Get the color at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn color_at(&self, position: usize) -> Color {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&c| c == Color::Green)
    }

    /// Score `guess` against the true `secret`
    ///
    /// This is the feedback oracle. Pure and total: both inputs are already
    /// validated 5-letter [`Word`]s.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches green and decrement that
    ///    letter's remaining count in the secret.
    /// 2. Second pass: for each unresolved position, mark yellow only if the
    ///    letter still has remaining count, decrementing; otherwise grey.
    ///
    /// Guessing "sheep" against "speed" therefore yellows only as many copies
    /// of a letter as the secret actually has left after the greens.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Color, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    /// let pattern = Pattern::score(&guess, &secret);
    ///
    /// use Color::{Green, Grey};
    /// assert_eq!(pattern.colors(), &[Grey, Grey, Green, Grey, Green]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut colors = [Color::Grey; WORD_LEN];
        let mut remaining = secret.char_counts();

        // First pass: greens consume from the secret's letter pool
        for (i, color) in colors.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *color = Color::Green;
                if let Some(count) = remaining.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows only while the letter has occurrences left
        for (i, color) in colors.iter_mut().enumerate() {
            if *color == Color::Grey {
                let letter = guess.char_at(i);
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    *color = Color::Yellow;
                    *count -= 1;
                }
            }
        }

        Self(colors)
    }

    /// Iterate over all 243 possible patterns
    ///
    /// Position 0 varies fastest. Used by the entropy ranker to simulate
    /// every feedback outcome for a hypothetical guess.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..PATTERN_COUNT).map(|mut value| {
            let mut colors = [Color::Grey; WORD_LEN];
            for color in &mut colors {
                *color = match value % 3 {
                    1 => Color::Yellow,
                    2 => Color::Green,
                    _ => Color::Grey,
                };
                value /= 3;
            }
            Self::new(colors)
        })
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&c| c == Color::Yellow).count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for grey
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Ergonomic Option API; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut colors = [Color::Grey; WORD_LEN];
        for (color, ch) in colors.iter_mut().zip(chars) {
            *color = match ch {
                'G' | 'g' | '🟩' => Color::Green,
                'Y' | 'y' | '🟨' => Color::Yellow,
                '-' | '_' | '⬜' => Color::Grey,
                _ => return None,
            };
        }

        Some(Self(colors))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p = Pattern::from_str("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|color| match color {
                Color::Green => '🟩',
                Color::Yellow => '🟨',
                Color::Grey => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in &self.0 {
            f.write_str(match color {
                Color::Green => "G",
                Color::Yellow => "Y",
                Color::Grey => "-",
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Green, Grey, Yellow};

    #[test]
    fn color_ordering_for_letter_panels() {
        assert!(Grey < Yellow);
        assert!(Yellow < Green);
        assert_eq!(Grey.max(Green), Green);
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_greens(), 5);
        assert_eq!(Pattern::PERFECT.count_yellows(), 0);
    }

    #[test]
    fn pattern_all_grey() {
        let guess = Word::new("abcde").unwrap();
        let secret = Word::new("fghij").unwrap();
        let pattern = Pattern::score(&guess, &secret);

        assert_eq!(pattern.colors(), &[Grey; 5]);
    }

    #[test]
    fn pattern_all_green() {
        let word = Word::new("crane").unwrap();
        let pattern = Pattern::score(&word, &word);

        assert_eq!(pattern, Pattern::PERFECT);
    }

    #[test]
    fn pattern_speed_vs_sheep() {
        // s-p-e-e-d vs s-h-e-e-p: greens at 0, 2, 3 consume the secret's
        // S and both E's; the P at position 1 takes the remaining P as
        // yellow; D is absent.
        let guess = Word::new("speed").unwrap();
        let secret = Word::new("sheep").unwrap();
        let pattern = Pattern::score(&guess, &secret);

        assert_eq!(pattern.colors(), &[Green, Yellow, Green, Green, Grey]);
    }

    #[test]
    fn pattern_sheep_vs_speed() {
        // s-h-e-e-p vs s-p-e-e-d: H is absent, the trailing P is yellow
        // because SPEED still has an unconsumed P.
        let guess = Word::new("sheep").unwrap();
        let secret = Word::new("speed").unwrap();
        let pattern = Pattern::score(&guess, &secret);

        assert_eq!(pattern.colors(), &[Green, Grey, Green, Green, Yellow]);
    }

    #[test]
    fn pattern_duplicate_letters_capped_by_secret() {
        // SPEED vs ERASE: ERASE has two E's, so both guessed E's are yellow,
        // but no third E could ever be granted.
        let guess = Word::new("speed").unwrap();
        let secret = Word::new("erase").unwrap();
        let pattern = Pattern::score(&guess, &secret);

        assert_eq!(pattern.colors(), &[Yellow, Grey, Yellow, Yellow, Grey]);
    }

    #[test]
    fn pattern_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is green; the first O goes yellow
        // from the remaining pool.
        let guess = Word::new("robot").unwrap();
        let secret = Word::new("floor").unwrap();
        let pattern = Pattern::score(&guess, &secret);

        assert_eq!(pattern.colors(), &[Yellow, Yellow, Grey, Green, Grey]);
    }

    #[test]
    fn pattern_matched_letters_never_exceed_secret_count() {
        let words = ["speed", "sheep", "erase", "eeeee", "melee"];
        for guess in words {
            for secret in words {
                let g = Word::new(guess).unwrap();
                let s = Word::new(secret).unwrap();
                let pattern = Pattern::score(&g, &s);

                // Green+Yellow count for each letter is bounded by the
                // secret's count of that letter.
                for &letter in g.chars() {
                    let matched = g
                        .positions_of(letter)
                        .iter()
                        .filter(|&&i| pattern.color_at(i) != Grey)
                        .count();
                    assert!(
                        matched <= s.letter_count(letter),
                        "{guess} vs {secret}: letter {letter} over-matched"
                    );
                }
            }
        }
    }

    #[test]
    fn pattern_all_yields_243_unique() {
        let patterns: Vec<Pattern> = Pattern::all().collect();
        assert_eq!(patterns.len(), PATTERN_COUNT);

        let unique: std::collections::HashSet<Pattern> = patterns.iter().copied().collect();
        assert_eq!(unique.len(), PATTERN_COUNT);
        assert!(unique.contains(&Pattern::PERFECT));
    }

    #[test]
    fn pattern_new_matches_parsed_colors() {
        let pattern = Pattern::new([Green, Yellow, Grey, Green, Grey]);
        assert_eq!(pattern, Pattern::from_str("GY-G-").unwrap());
        assert_eq!(pattern.colors(), &[Green, Yellow, Grey, Green, Grey]);
        assert_eq!(Pattern::new([Green; 5]), Pattern::PERFECT);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.colors(), &[Green, Yellow, Green, Grey, Grey]);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GYGGYX").is_none()); // Too long (6 chars)
        assert!(Pattern::from_str("GYG").is_none()); // Too short
        assert!(Pattern::from_str("GXGGY").is_none()); // Invalid char
        assert!(Pattern::from_str("").is_none()); // Empty
    }

    #[test]
    fn pattern_display_round_trip() {
        let pattern = Pattern::from_str("GY-G-").unwrap();
        assert_eq!(pattern.to_string(), "GY-G-");
        assert_eq!(Pattern::from_str(&pattern.to_string()), Some(pattern));
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn pattern_symmetry() {
        // Pattern of word vs itself is always perfect
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::score(&w, &w), Pattern::PERFECT);
        }
    }
}
