//! Recommendation command
//!
//! Runs the pipeline once and collects everything the output layer prints.

use crate::core::{Hint, LetterSet, WORD_LENGTH, Word};
use crate::solver::{HintConfig, Recommendation, Recommender, TieBreak};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Number of top-scoring candidates kept for the verbose report
pub const TOP_CANDIDATES: usize = 10;

/// Number of letters per slot kept for the verbose report
pub const TOP_LETTERS: usize = 3;

/// Configuration for one recommendation
pub struct RecommendConfig {
    pub hints: HintConfig,
    pub tie_break: TieBreak,
    /// Seed for the tie-break; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl RecommendConfig {
    #[must_use]
    pub fn new(hints: HintConfig) -> Self {
        Self {
            hints,
            tie_break: TieBreak::default(),
            seed: None,
        }
    }
}

/// Result of one recommendation
pub struct RecommendResult {
    /// The recommended word, `None` when no word fits
    pub word: Option<String>,
    pub dictionary_size: usize,
    pub candidate_count: usize,
    pub positions: Hint,
    /// Excluded letters per slot, slot order
    pub exclusions: Vec<(usize, LetterSet)>,
    pub known: LetterSet,
    pub invalid: LetterSet,
    /// Highest-scoring candidates, best first, dictionary order within ties
    pub top: Vec<(String, f64)>,
    /// Every candidate tied at the best score
    pub tied: Vec<String>,
    pub best_score: Option<f64>,
    /// Most frequent letters per slot with their counts
    pub letter_ranks: Vec<Vec<(char, u32)>>,
}

impl RecommendResult {
    fn from_recommendation(recommendation: &Recommendation<'_>, dictionary_size: usize) -> Self {
        let constraints = &recommendation.constraints;

        let mut exclusions: Vec<(usize, LetterSet)> = constraints
            .exclusions
            .iter()
            .map(|(&position, letters)| (position, letters.clone()))
            .collect();
        exclusions.sort_unstable_by_key(|(position, _)| *position);

        let mut ranked = recommendation.scored.clone();
        // Stable sort keeps dictionary order within equal scores
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        let top = ranked
            .iter()
            .take(TOP_CANDIDATES)
            .map(|c| (c.word.text().to_string(), c.score))
            .collect();

        let (tied, best_score) = recommendation.best.as_ref().map_or_else(
            || (Vec::new(), None),
            |best| {
                let words = best.words.iter().map(|w| w.text().to_string()).collect();
                (words, Some(best.score))
            },
        );

        let letter_ranks = (0..WORD_LENGTH)
            .map(|position| {
                recommendation
                    .table
                    .ranked(position)
                    .into_iter()
                    .take(TOP_LETTERS)
                    .map(|(letter, count)| (char::from(letter), count))
                    .collect()
            })
            .collect();

        Self {
            word: recommendation.word.map(|w| w.text().to_string()),
            dictionary_size,
            candidate_count: recommendation.candidates.len(),
            positions: constraints.positions,
            exclusions,
            known: constraints.known.clone(),
            invalid: constraints.invalid.clone(),
            top,
            tied,
            best_score,
            letter_ranks,
        }
    }
}

/// Recommend a word from `dictionary` for the configured hints
///
/// An empty dictionary or hints that rule out every word give a result with
/// no word; that is not an error.
#[must_use]
pub fn run_recommend(config: &RecommendConfig, dictionary: &[Word]) -> RecommendResult {
    let recommender = Recommender::new(dictionary, config.tie_break);

    let recommendation = match config.seed {
        Some(seed) => recommender.recommend(&config.hints, &mut StdRng::seed_from_u64(seed)),
        None => recommender.recommend(&config.hints, &mut rand::rng()),
    };

    RecommendResult::from_recommendation(&recommendation, recommender.dictionary_size())
}
