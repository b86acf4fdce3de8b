//! Core domain types for the helper
//!
//! Words from the dictionary and the hints a player has gathered so far.
//! Everything here is plain data with no I/O.

mod hint;
mod word;

pub use hint::{Hint, HintError, LetterSet, PLACEHOLDER};
pub use word::{WORD_LENGTH, Word, WordError};
