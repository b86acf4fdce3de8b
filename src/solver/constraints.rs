//! Constraint parsing
//!
//! Turns the hints a player supplies into the structured constraints the
//! filter consumes.

use crate::core::{Hint, LetterSet, WORD_LENGTH};
use rustc_hash::FxHashMap;

/// How the set of globally absent letters is obtained
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InvalidLetters {
    /// Every letter in the invalid-positions hints, minus the known letters
    #[default]
    Derived,
    /// Legacy mode: exactly the letters the user listed.
    ///
    /// Not equivalent to `Derived`: invalid-positions hints then only exclude
    /// letters from their own slots and never from the whole word. Kept for
    /// the `-i` flag; prefer `Derived`.
    Manual(LetterSet),
}

/// Everything the player knows, validated at the CLI boundary
#[derive(Debug, Clone, Default)]
pub struct HintConfig {
    /// Letters in their final slots
    pub correct: Hint,
    /// Letters present somewhere, slot unknown
    pub known: LetterSet,
    /// One hint per earlier guess: letters present but in the wrong slot
    pub invalid_positions: Vec<Hint>,
    pub invalid_letters: InvalidLetters,
}

/// Structured constraints consumed by the filter and scorer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Required letter per slot
    pub positions: Hint,
    /// Letters that may not occupy a given slot
    pub exclusions: FxHashMap<usize, LetterSet>,
    /// Letters that must appear somewhere
    pub known: LetterSet,
    /// Letters that may not appear anywhere
    pub invalid: LetterSet,
}

impl Constraints {
    /// Build constraints from the player's hints
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Hint, LetterSet};
    /// use wordle_helper::solver::{Constraints, HintConfig};
    ///
    /// let config = HintConfig {
    ///     known: LetterSet::parse("h").unwrap(),
    ///     invalid_positions: vec![Hint::parse("h_y__").unwrap()],
    ///     ..HintConfig::default()
    /// };
    /// let constraints = Constraints::from_config(&config);
    ///
    /// // 'h' is misplaced but present; 'y' is absent everywhere
    /// assert!(!constraints.invalid.contains(b'h'));
    /// assert!(constraints.invalid.contains(b'y'));
    /// ```
    #[must_use]
    pub fn from_config(config: &HintConfig) -> Self {
        let exclusions = exclusion_map(&config.invalid_positions);

        let invalid = match &config.invalid_letters {
            InvalidLetters::Derived => derive_invalid_letters(&exclusions, &config.known),
            InvalidLetters::Manual(letters) => letters.clone(),
        };

        Self {
            positions: config.correct,
            exclusions,
            known: config.known.clone(),
            invalid,
        }
    }

    /// Number of slots whose letter is already known
    #[must_use]
    pub fn known_position_count(&self) -> usize {
        self.positions.filled_count()
    }

    /// True when no constraint of any kind is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.exclusions.is_empty()
            && self.known.is_empty()
            && self.invalid.is_empty()
    }
}

/// Union the letters of every hint per slot
fn exclusion_map(hints: &[Hint]) -> FxHashMap<usize, LetterSet> {
    let mut exclusions: FxHashMap<usize, LetterSet> = FxHashMap::default();
    for hint in hints {
        for (position, letter) in hint.letters() {
            debug_assert!(position < WORD_LENGTH);
            exclusions.entry(position).or_default().insert(letter);
        }
    }
    exclusions
}

/// Letters seen in any invalid-positions hint that are not known to be present
fn derive_invalid_letters(
    exclusions: &FxHashMap<usize, LetterSet>,
    known: &LetterSet,
) -> LetterSet {
    exclusions
        .values()
        .flat_map(LetterSet::iter)
        .filter(|&letter| !known.contains(letter))
        .collect()
}
