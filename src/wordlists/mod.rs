//! Dictionaries for the helper
//!
//! A default five-letter dictionary is embedded in the binary; a word list
//! file may be loaded instead.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
