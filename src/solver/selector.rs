//! Best-candidate selection
//!
//! Collects every candidate tied at the maximum score and picks one of them.

use super::scoring::ScoredCandidate;
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// How to choose between candidates tied at the maximum score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Uniformly at random among the tied candidates (default)
    #[default]
    Random,
    /// The first tied candidate in dictionary order
    First,
}

impl TieBreak {
    /// Create a tie-break mode from its name
    ///
    /// Supported names: "random", "first". Defaults to random if the name is
    /// unrecognized. The CLI restricts `--tie-break` to those two values, so
    /// the fallback only applies to library callers.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First,
            _ => Self::Random,
        }
    }
}

/// Candidates sharing the highest score
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidates<'a> {
    pub score: f64,
    pub words: Vec<&'a Word>,
}

/// Find every candidate tied at the maximum score
///
/// A strictly higher score replaces the tied set; an equal one joins it.
/// Returns `None` when there are no candidates.
#[must_use]
// Ties are exact: equal letter counts give bit-identical scores
#[allow(clippy::float_cmp)]
pub fn best_candidates<'a>(scored: &[ScoredCandidate<'a>]) -> Option<BestCandidates<'a>> {
    let (first, rest) = scored.split_first()?;
    let mut best = BestCandidates {
        score: first.score,
        words: vec![first.word],
    };

    for candidate in rest {
        if candidate.score > best.score {
            best.score = candidate.score;
            best.words.clear();
            best.words.push(candidate.word);
        } else if candidate.score == best.score {
            best.words.push(candidate.word);
        }
    }

    Some(best)
}

/// Pick the recommended word from a tied set
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::{BestCandidates, TieBreak, choose};
///
/// let words = [Word::new("hello").unwrap(), Word::new("hillo").unwrap()];
/// let best = BestCandidates { score: 10.0, words: words.iter().collect() };
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = choose(&best, TieBreak::Random, &mut rng).unwrap();
/// assert!(words.contains(picked));
///
/// assert_eq!(choose(&best, TieBreak::First, &mut rng), Some(&words[0]));
/// ```
pub fn choose<'a, R: Rng + ?Sized>(
    best: &BestCandidates<'a>,
    tie_break: TieBreak,
    rng: &mut R,
) -> Option<&'a Word> {
    match tie_break {
        TieBreak::Random => best.words.choose(rng).copied(),
        TieBreak::First => best.words.first().copied(),
    }
}

/// Select the recommended word from scored candidates
///
/// Returns `None` when there are no candidates.
pub fn select_best<'a, R: Rng + ?Sized>(
    scored: &[ScoredCandidate<'a>],
    tie_break: TieBreak,
    rng: &mut R,
) -> Option<&'a Word> {
    best_candidates(scored).and_then(|best| choose(&best, tie_break, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn scored<'a>(words: &'a [Word], scores: &[f64]) -> Vec<ScoredCandidate<'a>> {
        words
            .iter()
            .zip(scores)
            .map(|(word, &score)| ScoredCandidate { word, score })
            .collect()
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(best_candidates(&[]).is_none());
        assert!(select_best(&[], TieBreak::Random, &mut rng).is_none());
        assert!(select_best(&[], TieBreak::First, &mut rng).is_none());
    }

    #[test]
    fn strictly_higher_score_replaces_tied_set() {
        let dict = words(&["hello", "hillo", "jelly", "crane"]);
        let candidates = scored(&dict, &[4.0, 4.0, 9.0, 1.0]);

        let best = best_candidates(&candidates).unwrap();
        assert_eq!(best.score, 9.0);
        assert_eq!(best.words, vec![&dict[2]]);
    }

    #[test]
    fn equal_scores_join_tied_set() {
        let dict = words(&["hello", "hillo", "jelly", "crane"]);
        let candidates = scored(&dict, &[2.0, 7.5, 1.0, 7.5]);

        let best = best_candidates(&candidates).unwrap();
        assert_eq!(best.words, vec![&dict[1], &dict[3]]);
    }

    #[test]
    fn first_mode_keeps_first_maximum() {
        let dict = words(&["hello", "hillo", "jelly"]);
        let candidates = scored(&dict, &[3.0, 5.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..10 {
            assert_eq!(
                select_best(&candidates, TieBreak::First, &mut rng),
                Some(&dict[1])
            );
        }
    }

    #[test]
    fn random_mode_only_returns_tied_words_and_reaches_all() {
        let dict = words(&["hello", "hillo", "jelly", "crane", "slate"]);
        let candidates = scored(&dict, &[6.0, 1.0, 6.0, 6.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            let picked = select_best(&candidates, TieBreak::Random, &mut rng).unwrap();
            assert!(["hello", "jelly", "crane"].contains(&picked.text()));
            seen.insert(picked.text());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        let dict = words(&["hello", "hillo", "jelly", "crane"]);
        let candidates = scored(&dict, &[5.0, 5.0, 5.0, 5.0]);

        let first = select_best(&candidates, TieBreak::Random, &mut StdRng::seed_from_u64(9));
        let second = select_best(&candidates, TieBreak::Random, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn tie_break_from_name() {
        assert_eq!(TieBreak::from_name("first"), TieBreak::First);
        assert_eq!(TieBreak::from_name("random"), TieBreak::Random);
        assert_eq!(TieBreak::from_name("bogus"), TieBreak::Random);
    }
}
