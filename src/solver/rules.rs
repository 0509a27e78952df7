//! Letter constraints derived from guess feedback
//!
//! One `(guess, pattern)` observation is reduced to a minimal set of
//! per-letter rules: how many occurrences a candidate must have (exactly or
//! at least), which positions the letter must occupy, and which positions it
//! must avoid. Rules aggregate over every position a letter takes in the
//! guess, which is what makes repeated letters come out right: a grey copy of
//! a letter that also scored green or yellow elsewhere means "no additional
//! occurrence", not "absent".

use crate::core::{Color, Pattern, Word};
use rustc_hash::FxHashMap;

/// How a rule's occurrence count binds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountOp {
    /// Candidate must contain the letter exactly `count` times
    Exactly,
    /// Candidate must contain the letter at least `count` times
    AtLeast,
}

/// Occurrence and position constraints for one letter of a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRule {
    letter: char,
    count: usize,
    op: CountOp,
    /// Positions the letter must occupy (greens)
    positions: Vec<usize>,
    /// Positions the letter must not occupy (yellows)
    excluded: Vec<usize>,
}

impl LetterRule {
    /// The constrained letter
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// Required occurrence count, interpreted via [`Self::op`]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether [`Self::count`] is exact or a lower bound
    #[must_use]
    pub const fn op(&self) -> CountOp {
        self.op
    }

    /// Test whether a candidate word satisfies this rule
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let occurrences = word.letter_count(self.letter);
        let count_ok = match self.op {
            CountOp::Exactly => occurrences == self.count,
            CountOp::AtLeast => occurrences >= self.count,
        };

        count_ok
            && self.positions.iter().all(|&p| word.char_at(p) == self.letter)
            && self.excluded.iter().all(|&p| word.char_at(p) != self.letter)
    }
}

// Per-letter accumulator used during derivation.
#[derive(Debug, Default)]
struct RuleBuilder {
    count: usize,
    saw_grey: bool,
    positions: Vec<usize>,
    excluded: Vec<usize>,
}

/// Derive the letter rules implied by observing `pattern` for `guess`
///
/// Returns `None` when the pattern is infeasible: feedback cannot mark a
/// letter "present but misplaced" (yellow) after already marking an earlier
/// copy of it "absent" (grey) within the same guess. Callers treat `None` as
/// an empty candidate set.
///
/// Per letter, aggregated over all its positions in the guess:
/// - Green at p: occurrence count +1, require position p.
/// - Yellow at p: occurrence count +1, forbid position p.
/// - Grey: the letter has no occurrences beyond those already counted, so
///   the count operator becomes [`CountOp::Exactly`]. A letter seen only
///   grey ends up as "exactly 0".
#[must_use]
pub fn derive_rules(guess: &Word, pattern: Pattern) -> Option<Vec<LetterRule>> {
    let mut builders: FxHashMap<char, RuleBuilder> = FxHashMap::default();
    // Keeps rule order stable for a given guess, so filtering cost is
    // reproducible; the final set is order-independent.
    let mut order: Vec<char> = Vec::new();

    for (pos, &color) in pattern.colors().iter().enumerate() {
        let letter = guess.char_at(pos);
        if !builders.contains_key(&letter) {
            order.push(letter);
        }
        let builder = builders.entry(letter).or_default();

        match color {
            Color::Green => {
                builder.count += 1;
                builder.positions.push(pos);
            }
            Color::Yellow => {
                if builder.saw_grey {
                    // Grey already declared this letter exhausted
                    return None;
                }
                builder.count += 1;
                builder.excluded.push(pos);
            }
            Color::Grey => builder.saw_grey = true,
        }
    }

    Some(
        order
            .into_iter()
            .map(|letter| {
                let builder = builders.remove(&letter).unwrap_or_default();
                LetterRule {
                    letter,
                    count: builder.count,
                    op: if builder.saw_grey {
                        CountOp::Exactly
                    } else {
                        CountOp::AtLeast
                    },
                    positions: builder.positions,
                    excluded: builder.excluded,
                }
            })
            .collect(),
    )
}

/// Filter `words` down to those satisfying every rule
///
/// Rules apply as a sequential AND; the result is a pure intersection, so
/// rule order never changes the outcome.
#[must_use]
pub fn filter_words(rules: &[LetterRule], words: &[Word]) -> Vec<Word> {
    words
        .iter()
        .filter(|word| rules.iter().all(|rule| rule.matches(word)))
        .cloned()
        .collect()
}

/// Count how many of `words` satisfy every rule without materializing them
#[must_use]
pub fn count_matching(rules: &[LetterRule], words: &[Word]) -> usize {
    words
        .iter()
        .filter(|word| rules.iter().all(|rule| rule.matches(word)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::from_str(text).unwrap()
    }

    fn rule_for(rules: &[LetterRule], letter: char) -> &LetterRule {
        rules
            .iter()
            .find(|r| r.letter() == letter)
            .unwrap_or_else(|| panic!("no rule for {letter}"))
    }

    #[test]
    fn grey_only_letter_means_exactly_zero() {
        let rules = derive_rules(&word("crane"), pattern("-----")).unwrap();

        assert_eq!(rules.len(), 5);
        for rule in &rules {
            assert_eq!(rule.op(), CountOp::Exactly);
            assert_eq!(rule.count(), 0);
        }
    }

    #[test]
    fn green_requires_position_and_bumps_count() {
        let rules = derive_rules(&word("crane"), pattern("G----")).unwrap();
        let c = rule_for(&rules, 'c');

        assert_eq!(c.op(), CountOp::AtLeast);
        assert_eq!(c.count(), 1);
        assert!(c.matches(&word("cigar")));
        assert!(!c.matches(&word("acorn"))); // has C, wrong position
    }

    #[test]
    fn yellow_forbids_position_but_requires_presence() {
        let rules = derive_rules(&word("crane"), pattern("Y----")).unwrap();
        let c = rule_for(&rules, 'c');

        assert!(!c.matches(&word("cigar"))); // C at the forbidden position
        assert!(c.matches(&word("acorn"))); // C elsewhere
        assert!(!c.matches(&word("slate"))); // no C at all
    }

    #[test]
    fn grey_with_green_elsewhere_caps_count() {
        // SPEED with the first E green and the second grey: exactly one E.
        let rules = derive_rules(&word("speed"), pattern("--G--")).unwrap();
        let e = rule_for(&rules, 'e');

        assert_eq!(e.op(), CountOp::Exactly);
        assert_eq!(e.count(), 1);
        assert!(!e.matches(&word("sheep"))); // two E's
        assert!(e.matches(&word("sperm"))); // one E, at the green position
        assert!(!e.matches(&word("zzzzz"))); // zero E's
    }

    #[test]
    fn yellow_after_grey_is_infeasible() {
        // SPEED: grey E at position 2, yellow E at position 3 contradicts it.
        assert!(derive_rules(&word("speed"), pattern("---Y-")).is_none());
    }

    #[test]
    fn grey_after_yellow_is_feasible() {
        // Yellow then grey for the same letter just caps the count at 1.
        let rules = derive_rules(&word("speed"), pattern("--Y--")).unwrap();
        let e = rule_for(&rules, 'e');

        assert_eq!(e.op(), CountOp::Exactly);
        assert_eq!(e.count(), 1);
    }

    #[test]
    fn oracle_pattern_never_filters_out_the_secret() {
        // Soundness: the true secret always survives its own feedback.
        let dictionary: Vec<Word> = ["speed", "sheep", "crane", "slate", "erase", "robot"]
            .iter()
            .map(|w| word(w))
            .collect();

        for guess in &dictionary {
            for secret in &dictionary {
                let observed = Pattern::score(guess, secret);
                let rules = derive_rules(guess, observed)
                    .unwrap_or_else(|| panic!("oracle produced infeasible pattern"));
                let remaining = filter_words(&rules, &dictionary);

                assert!(
                    remaining.contains(secret),
                    "{guess} vs {secret} filtered out the secret"
                );
            }
        }
    }

    #[test]
    fn filtering_is_monotonic() {
        let dictionary: Vec<Word> = ["speed", "sheep", "crane", "slate"]
            .iter()
            .map(|w| word(w))
            .collect();

        let observed = Pattern::score(&word("crane"), &word("slate"));
        let rules = derive_rules(&word("crane"), observed).unwrap();
        let remaining = filter_words(&rules, &dictionary);

        assert!(remaining.len() <= dictionary.len());
        assert!(remaining.contains(&word("slate")));
        assert!(!remaining.contains(&word("crane"))); // crane scores itself all green
    }

    #[test]
    fn rule_order_does_not_change_result() {
        let dictionary: Vec<Word> = ["speed", "sheep", "crane", "slate", "erase"]
            .iter()
            .map(|w| word(w))
            .collect();

        let observed = Pattern::score(&word("speed"), &word("sheep"));
        let mut rules = derive_rules(&word("speed"), observed).unwrap();
        let forward = filter_words(&rules, &dictionary);
        rules.reverse();
        let backward = filter_words(&rules, &dictionary);

        assert_eq!(forward, backward);
    }

    #[test]
    fn count_matching_agrees_with_filter() {
        let dictionary: Vec<Word> = ["speed", "sheep", "crane", "slate"]
            .iter()
            .map(|w| word(w))
            .collect();

        let rules = derive_rules(&word("crane"), pattern("--Y--")).unwrap();
        assert_eq!(
            count_matching(&rules, &dictionary),
            filter_words(&rules, &dictionary).len()
        );
    }
}
