//! Wordle Advisor
//!
//! A guess-recommendation engine for fixed-length word-guessing games: it
//! tracks the words still consistent with observed feedback and ranks next
//! guesses by expected information gain (bits).
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{Pattern, Word};
//! use wordle_advisor::solver::Solver;
//!
//! let dictionary = vec![
//!     Word::new("speed").unwrap(),
//!     Word::new("sheep").unwrap(),
//!     Word::new("crane").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//! let mut solver = Solver::new(dictionary, None);
//!
//! // Feed what the game showed for a played guess
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("sheep").unwrap();
//! solver.feed(&guess, Pattern::score(&guess, &secret)).unwrap();
//!
//! let tips = solver.best_guesses(3).unwrap();
//! assert!(!tips.is_empty());
//! println!("uncertainty: {:.2} bits", solver.remaining_uncertainty());
//! ```

// Core domain types
pub mod core;

// Constraint model, entropy ranking, and the solver surface
pub mod solver;

// Dictionary loading
pub mod wordlists;
