//! Main recommendation interface

use super::constraints::{Constraints, HintConfig};
use super::filter::filter_candidates;
use super::scoring::{FrequencyTable, ScoredCandidate, score_candidates};
use super::selector::{BestCandidates, TieBreak, best_candidates, choose};
use crate::core::Word;
use rand::Rng;

/// Everything produced by one pass of the pipeline
#[derive(Debug, Clone)]
pub struct Recommendation<'a> {
    pub constraints: Constraints,
    /// Surviving words, in dictionary order
    pub candidates: Vec<&'a Word>,
    pub table: FrequencyTable,
    /// Scores in candidate order
    pub scored: Vec<ScoredCandidate<'a>>,
    /// Candidates tied at the maximum score, if any survived
    pub best: Option<BestCandidates<'a>>,
    /// The recommended word, or `None` when no word fits
    pub word: Option<&'a Word>,
}

/// Main recommendation engine
///
/// Runs parse, filter, score, and select over a fixed dictionary.
pub struct Recommender<'a> {
    dictionary: &'a [Word],
    tie_break: TieBreak,
}

impl<'a> Recommender<'a> {
    /// Create a recommender over the given dictionary
    ///
    /// # Parameters
    /// - `dictionary`: All words the answer may be drawn from
    /// - `tie_break`: How to choose between equally scored words
    #[must_use]
    pub const fn new(dictionary: &'a [Word], tie_break: TieBreak) -> Self {
        Self {
            dictionary,
            tie_break,
        }
    }

    /// Number of words in the dictionary
    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Run the full pipeline for the given hints
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_helper::core::{Hint, Word};
    /// use wordle_helper::solver::{HintConfig, Recommender, TieBreak};
    ///
    /// let words: Vec<Word> = ["hello", "hillo", "jelly"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let recommender = Recommender::new(&words, TieBreak::First);
    /// let config = HintConfig {
    ///     correct: Hint::parse("h_ll_").unwrap(),
    ///     ..HintConfig::default()
    /// };
    ///
    /// let result = recommender.recommend(&config, &mut StdRng::seed_from_u64(1));
    /// assert_eq!(result.candidates.len(), 2);
    /// assert_eq!(result.word.map(Word::text), Some("hello"));
    /// ```
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        config: &HintConfig,
        rng: &mut R,
    ) -> Recommendation<'a> {
        let constraints = Constraints::from_config(config);
        self.recommend_with(constraints, rng)
    }

    /// Run filter, score, and select for already-built constraints
    pub fn recommend_with<R: Rng + ?Sized>(
        &self,
        constraints: Constraints,
        rng: &mut R,
    ) -> Recommendation<'a> {
        let candidates = filter_candidates(self.dictionary, &constraints);
        let table = FrequencyTable::build(&candidates);
        let scored = score_candidates(&candidates, &table, constraints.known_position_count());
        let best = best_candidates(&scored);
        let word = best
            .as_ref()
            .and_then(|best| choose(best, self.tie_break, rng));

        Recommendation {
            constraints,
            candidates,
            table,
            scored,
            best,
            word,
        }
    }
}
