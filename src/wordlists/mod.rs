//! Dictionary loading
//!
//! The engine never owns a word list of its own; language packs supply one
//! file per language and the caller hands the loaded dictionary to
//! [`crate::solver::Solver`].

pub mod loader;
