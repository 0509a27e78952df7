//! Expected-information ranking of guesses
//!
//! For every word in a guess pool, simulates all 243 feedback patterns,
//! measures how each would partition the current candidate set (reusing the
//! constraint model), and scores the guess by the Shannon entropy of that
//! outcome distribution. Per-word evaluation is pure and independent, so it
//! fans out over rayon; the gather step sorts on the calling thread, which is
//! what makes rankings deterministic regardless of worker count.

use super::rules::{count_matching, derive_rules};
use crate::core::{Pattern, Word};
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A ranked guess: the word and the information it is expected to resolve
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: Word,
    /// Expected information gain in bits
    pub bits: f64,
}

/// Cooperative cancellation handle for long rankings
///
/// Cloneable; all clones observe the same flag. Workers check it between
/// pool words, so cancellation takes effect at word granularity.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of any ranking holding a clone of this token
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Expected information (bits) from guessing `guess` against `candidates`
///
/// Simulates every possible feedback pattern, counts the candidates each
/// would leave via the constraint model, and takes the Shannon entropy of
/// the resulting distribution over realized outcomes:
///
/// H = Σ p · log₂(1/p)  over outcomes with p > 0
///
/// Infeasible patterns leave nothing and are skipped, as are patterns no
/// candidate produces (a zero-probability outcome contributes no
/// information). An empty candidate set has no uncertainty left to resolve
/// and yields 0.0.
#[must_use]
pub fn expected_information(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;
    let mut bits = 0.0;

    for pattern in Pattern::all() {
        let Some(rules) = derive_rules(guess, pattern) else {
            continue;
        };

        let count = count_matching(&rules, candidates);
        if count > 0 {
            let p = count as f64 / total;
            bits -= p * p.log2();
        }
    }

    bits
}

/// Remaining uncertainty of a candidate set, in bits
///
/// `log₂(n)` for n candidates; 0 when the set is empty or a singleton. The
/// drop in this value across a round is the information a guess actually
/// gained.
#[must_use]
pub fn remaining_entropy(candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        0.0
    } else {
        (candidates.len() as f64).log2()
    }
}

/// Rank every pool word by expected information
///
/// `pool` is the universe of allowed guesses and may exceed `candidates`;
/// guessing a word known to be wrong purely for information is legitimate.
/// Sorted descending by bits, ties broken by dictionary order, truncated to
/// `top_n` when given.
#[must_use]
pub fn rank_guesses(
    pool: &[Word],
    candidates: &[Word],
    top_n: Option<usize>,
) -> Vec<Recommendation> {
    // A fresh token is never cancelled, so the ranking always completes.
    rank_guesses_where(pool, candidates, top_n, &CancelToken::new(), &|| {})
        .unwrap_or_default()
}

/// Rank with cancellation and a per-word progress hook
///
/// `tick` runs once per evaluated pool word (from worker threads, so it must
/// be `Sync`); binaries use it to drive a progress bar. Returns `None` if
/// `cancel` fires before the ranking completes.
#[must_use]
pub fn rank_guesses_where(
    pool: &[Word],
    candidates: &[Word],
    top_n: Option<usize>,
    cancel: &CancelToken,
    tick: &(dyn Fn() + Sync),
) -> Option<Vec<Recommendation>> {
    let start = Instant::now();

    let ranked: Option<Vec<Recommendation>> = pool
        .par_iter()
        .map(|word| {
            if cancel.is_cancelled() {
                return None;
            }
            let bits = expected_information(word, candidates);
            tick();
            Some(Recommendation {
                word: word.clone(),
                bits,
            })
        })
        .collect();

    let mut ranked = ranked?;

    // Deterministic merge: sort after gather rather than preserving
    // dispatch order.
    ranked.sort_by(|a, b| b.bits.total_cmp(&a.bits).then_with(|| a.word.cmp(&b.word)));

    if let Some(n) = top_n {
        ranked.truncate(n);
    }

    debug!(
        "ranked {} pool words over {} candidates in {:?}",
        pool.len(),
        candidates.len(),
        start.elapsed()
    );

    Some(ranked)
}
