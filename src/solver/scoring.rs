//! Positional letter-frequency scoring
//!
//! A candidate scores well when its letters are common among the remaining
//! candidates in the same slot. Words with five distinct letters get a bonus
//! that shrinks as more slots become known.

use crate::core::{WORD_LENGTH, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Per-slot letter counts over a candidate set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [FxHashMap<u8, u32>; WORD_LENGTH],
}

impl FrequencyTable {
    /// Count letters per slot across `candidates`
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::solver::FrequencyTable;
    ///
    /// let words = [Word::new("hello").unwrap(), Word::new("hillo").unwrap()];
    /// let refs: Vec<&Word> = words.iter().collect();
    /// let table = FrequencyTable::build(&refs);
    ///
    /// assert_eq!(table.count(0, b'h'), 2);
    /// assert_eq!(table.count(1, b'e'), 1);
    /// assert_eq!(table.count(1, b'z'), 0);
    /// ```
    #[must_use]
    pub fn build(candidates: &[&Word]) -> Self {
        let mut counts: [FxHashMap<u8, u32>; WORD_LENGTH] = Default::default();
        for word in candidates {
            for (position, &letter) in word.chars().iter().enumerate() {
                *counts[position].entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of candidates with `letter` at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position].get(&letter).copied().unwrap_or(0)
    }

    /// Sum of the slot counts of each of the word's letters
    #[must_use]
    pub fn raw_score(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.count(position, letter))
            .sum()
    }

    /// Letters seen at `position`, most frequent first, ties alphabetical
    #[must_use]
    pub fn ranked(&self, position: usize) -> Vec<(u8, u32)> {
        let mut letters: Vec<(u8, u32)> = self.counts[position]
            .iter()
            .map(|(&letter, &count)| (letter, count))
            .collect();
        letters.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }
}

/// Multiplier applied to words with five distinct letters
///
/// `1 + 1/(known_positions + 1)`: doubles the score with nothing known and
/// tends toward 1 as the solve progresses.
#[must_use]
pub fn uniqueness_weight(known_positions: usize) -> f64 {
    1.0 + 1.0 / (known_positions as f64 + 1.0)
}

/// A candidate and its final score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Final score of one word against a frequency table
#[must_use]
pub fn score_word(word: &Word, table: &FrequencyTable, known_positions: usize) -> f64 {
    let raw = f64::from(table.raw_score(word));
    if word.has_unique_letters() {
        raw * uniqueness_weight(known_positions)
    } else {
        raw
    }
}

/// Score every candidate, preserving candidate order
#[must_use]
pub fn score_candidates<'a>(
    candidates: &[&'a Word],
    table: &FrequencyTable,
    known_positions: usize,
) -> Vec<ScoredCandidate<'a>> {
    candidates
        .par_iter()
        .map(|&word| ScoredCandidate {
            word,
            score: score_word(word, table, known_positions),
        })
        .collect()
}
