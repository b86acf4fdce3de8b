//! Wordle Helper
//!
//! Filters a five-letter dictionary by the hints gathered so far and
//! recommends the candidate whose letters are most common, slot by slot,
//! among the words that remain.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_helper::core::{Hint, LetterSet};
//! use wordle_helper::solver::{HintConfig, Recommender, TieBreak};
//! use wordle_helper::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let words = words_from_slice(DICTIONARY);
//! let recommender = Recommender::new(&words, TieBreak::Random);
//!
//! let hints = HintConfig {
//!     correct: Hint::parse("h____").unwrap(),
//!     known: LetterSet::parse("e").unwrap(),
//!     invalid_positions: vec![Hint::parse("_a___").unwrap()],
//!     ..HintConfig::default()
//! };
//!
//! let result = recommender.recommend(&hints, &mut StdRng::seed_from_u64(1));
//! if let Some(word) = result.word {
//!     assert!(word.text().starts_with('h'));
//! }
//! ```

// Core domain types
pub mod core;

// Recommendation pipeline
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
