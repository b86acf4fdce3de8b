//! Hint strings and letter sets
//!
//! A hint encodes one letter (or nothing) per slot using `_` as the
//! placeholder, e.g. `h_l__`. Hints are parsed best-effort: characters past
//! the fifth slot are ignored and short strings leave the trailing slots open.

use super::word::WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Character marking an unknown slot in a hint string
pub const PLACEHOLDER: char = '_';

/// Error type for malformed hint or letter strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    /// A character that is neither an ASCII letter nor the placeholder
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "'{character}' at position {position} is not a letter or '{PLACEHOLDER}'"
            ),
        }
    }
}

impl std::error::Error for HintError {}

/// Parse one hint character into an optional lowercase letter
fn parse_slot(character: char, position: usize) -> Result<Option<u8>, HintError> {
    if character == PLACEHOLDER {
        return Ok(None);
    }
    if character.is_ascii_alphabetic() {
        // ASCII checked above, so the cast is lossless
        return Ok(Some(character.to_ascii_lowercase() as u8));
    }
    Err(HintError::InvalidCharacter {
        character,
        position,
    })
}

/// Fixed-size optional-letter array parsed from a hint string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hint([Option<u8>; WORD_LENGTH]);

impl Hint {
    /// A hint with every slot open
    pub const EMPTY: Self = Self([None; WORD_LENGTH]);

    /// Parse a hint string like `h_l__`
    ///
    /// # Errors
    /// Returns `HintError::InvalidCharacter` for any character within the
    /// first five slots that is not a letter or `_`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Hint;
    ///
    /// let hint = Hint::parse("h_ll_").unwrap();
    /// assert_eq!(hint.slot(0), Some(b'h'));
    /// assert_eq!(hint.slot(1), None);
    /// assert_eq!(hint.filled_count(), 3);
    ///
    /// // Short strings only constrain the slots they cover
    /// assert_eq!(Hint::parse("h").unwrap().filled_count(), 1);
    /// assert!(Hint::parse("h3___").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, HintError> {
        let mut slots = [None; WORD_LENGTH];
        for (position, character) in s.chars().take(WORD_LENGTH).enumerate() {
            slots[position] = parse_slot(character, position)?;
        }
        Ok(Self(slots))
    }

    /// Letter at a slot, or `None` when open
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    /// Iterate over `(position, letter)` pairs of the filled slots
    pub fn letters(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(position, slot)| slot.map(|letter| (position, letter)))
    }

    /// Number of filled slots
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// True when every slot is open
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl FromStr for Hint {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            match slot {
                Some(letter) => write!(f, "{}", char::from(*letter))?,
                None => write!(f, "{PLACEHOLDER}")?,
            }
        }
        Ok(())
    }
}

/// Unordered set of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterSet(FxHashSet<u8>);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a run of letters like `hle`
    ///
    /// Placeholders are skipped and duplicates collapse.
    ///
    /// # Errors
    /// Returns `HintError::InvalidCharacter` for any non-letter character.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::LetterSet;
    ///
    /// let known = LetterSet::parse("HlEl").unwrap();
    /// assert!(known.contains(b'h'));
    /// assert_eq!(known.to_string(), "ehl");
    /// ```
    pub fn parse(s: &str) -> Result<Self, HintError> {
        let mut set = Self::new();
        for (position, character) in s.chars().enumerate() {
            if let Some(letter) = parse_slot(character, position)? {
                set.insert(letter);
            }
        }
        Ok(set)
    }

    /// Add a letter, returning whether it was new
    pub fn insert(&mut self, letter: u8) -> bool {
        self.0.insert(letter)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// Letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.iter().collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for LetterSet {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.sorted() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
