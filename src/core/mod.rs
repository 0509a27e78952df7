//! Core domain types for the guess engine
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear
//! mathematical properties.

mod pattern;
mod word;

pub use pattern::{Color, PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word, WordError};
