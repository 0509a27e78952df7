//! Guess-recommendation core
//!
//! Constraint derivation, entropy ranking, and the solver surface the game
//! loop talks to.

pub mod cache;
mod engine;
pub mod entropy;
pub mod rules;

pub use engine::{Solver, SolverError};
pub use entropy::{CancelToken, Recommendation};
