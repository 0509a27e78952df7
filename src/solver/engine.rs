//! Solver engine: candidate store and recommendation surface
//!
//! Owns the immutable full dictionary and the mutable set of words still
//! consistent with every observation fed this round. The game loop feeds
//! `(guess, pattern)` observations and asks for ranked next guesses; rounds
//! are independent and start from `reset`.

use super::entropy::{self, Recommendation};
use super::rules::{derive_rules, filter_words};
use crate::core::{Pattern, Word};
use log::debug;
use std::fmt;

/// Errors from the solver surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A fed pattern was self-contradictory for its guess (a letter marked
    /// both absent and misplaced within one guess)
    InfeasiblePattern { guess: String },
    /// No candidates remain; there is nothing to rank
    EmptyCandidates,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfeasiblePattern { guess } => {
                write!(f, "Pattern for guess '{guess}' is self-contradictory")
            }
            Self::EmptyCandidates => {
                write!(f, "No candidate words remain consistent with the feedback")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Guess-recommendation engine
///
/// # Examples
/// ```
/// use wordle_advisor::core::{Pattern, Word};
/// use wordle_advisor::solver::Solver;
///
/// let dictionary = vec![
///     Word::new("speed").unwrap(),
///     Word::new("sheep").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let mut solver = Solver::new(dictionary, None);
///
/// // C, R, A, N absent; E present but not last
/// let guess = Word::new("crane").unwrap();
/// let observed = Pattern::from_str("----Y").unwrap();
/// solver.feed(&guess, observed).unwrap();
///
/// assert_eq!(solver.candidate_count(), 2); // speed and sheep survive
/// ```
pub struct Solver {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    opening: Vec<Recommendation>,
    /// Whether any observation has been fed this round; while false,
    /// `best_guesses` serves the precomputed opening list.
    fed: bool,
}

impl Solver {
    /// Create a solver over `dictionary`
    ///
    /// `opening` is the precomputed full-dictionary ranking, normally loaded
    /// from the recommendation cache. When absent it is computed here, which
    /// is the single most expensive ranking call; callers that care should
    /// persist the result (see [`crate::solver::cache`]).
    #[must_use]
    pub fn new(dictionary: Vec<Word>, opening: Option<Vec<Recommendation>>) -> Self {
        let opening = opening.unwrap_or_else(|| {
            debug!(
                "no opening recommendations supplied; ranking full dictionary of {} words",
                dictionary.len()
            );
            entropy::rank_guesses(&dictionary, &dictionary, None)
        });

        Self {
            candidates: dictionary.clone(),
            dictionary,
            opening,
            fed: false,
        }
    }

    /// Restore the full dictionary for a new round
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.clone();
        self.fed = false;
    }

    /// Narrow the candidate set by one observed `(guess, pattern)` pair
    ///
    /// # Errors
    /// Returns [`SolverError::InfeasiblePattern`] when the pattern is
    /// self-contradictory; the candidate set is emptied rather than left in
    /// a half-applied state, so a caller that ignores the error still sees a
    /// consistent (terminal) store.
    pub fn feed(&mut self, guess: &Word, pattern: Pattern) -> Result<(), SolverError> {
        self.fed = true;

        let Some(rules) = derive_rules(guess, pattern) else {
            self.candidates.clear();
            return Err(SolverError::InfeasiblePattern {
                guess: guess.text().to_string(),
            });
        };

        let before = self.candidates.len();
        self.candidates = filter_words(&rules, &self.candidates);
        debug!(
            "feed {guess} {pattern}: {before} -> {} candidates",
            self.candidates.len()
        );

        Ok(())
    }

    /// Ranked next-guess recommendations, best first
    ///
    /// Before the first feed of a round this serves the opening list, which
    /// covers the full dictionary; afterwards it ranks the live candidate
    /// set. Deterministic: ties break in dictionary order.
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidates`] when nothing remains to
    /// rank. That is a benign terminal state, checkable up front via
    /// [`Self::candidate_count`]; it signals an inconsistent observation
    /// history upstream.
    pub fn best_guesses(&self, top_n: usize) -> Result<Vec<Recommendation>, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyCandidates);
        }

        if !self.fed {
            return Ok(self.opening.iter().take(top_n).cloned().collect());
        }

        Ok(entropy::rank_guesses(
            &self.candidates,
            &self.candidates,
            Some(top_n),
        ))
    }

    /// Remaining uncertainty over the candidate set, in bits
    ///
    /// Zero when at most one candidate remains.
    #[must_use]
    pub fn remaining_uncertainty(&self) -> f64 {
        entropy::remaining_entropy(&self.candidates)
    }

    /// Number of words still consistent with all feedback this round
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// The words still consistent with all feedback this round
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The precomputed opening recommendations
    #[must_use]
    pub fn opening_recommendations(&self) -> &[Recommendation] {
        &self.opening
    }
}
