//! Candidate filtering
//!
//! Four independent narrowing passes over the dictionary. Each pass is its
//! own predicate and is skipped when its constraint is empty, so the order
//! they run in never changes the result.

use super::constraints::Constraints;
use crate::core::{Hint, LetterSet, Word};
use rustc_hash::FxHashMap;

/// Word has every required letter in its slot
#[must_use]
pub fn matches_positions(word: &Word, positions: &Hint) -> bool {
    positions
        .letters()
        .all(|(position, letter)| word.char_at(position) == letter)
}

/// Word has no excluded letter in the excluded slot
#[must_use]
pub fn avoids_exclusions(word: &Word, exclusions: &FxHashMap<usize, LetterSet>) -> bool {
    exclusions
        .iter()
        .all(|(&position, excluded)| !excluded.contains(word.char_at(position)))
}

/// Word contains every known letter somewhere
#[must_use]
pub fn contains_known(word: &Word, known: &LetterSet) -> bool {
    known.iter().all(|letter| word.has_letter(letter))
}

/// Word contains none of the invalid letters
#[must_use]
pub fn avoids_invalid(word: &Word, invalid: &LetterSet) -> bool {
    !invalid.iter().any(|letter| word.has_letter(letter))
}

/// Keep only the words satisfying `keep`, or all of them when `skip` is set
fn narrow<'a>(
    words: Vec<&'a Word>,
    skip: bool,
    keep: impl Fn(&Word) -> bool,
) -> Vec<&'a Word> {
    if skip {
        return words;
    }
    words.into_iter().filter(|&word| keep(word)).collect()
}

/// Filter the dictionary down to words consistent with every constraint
///
/// Dictionary order is preserved. An empty result means no word fits.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Hint, Word};
/// use wordle_helper::solver::{Constraints, filter_candidates};
///
/// let words: Vec<Word> = ["hello", "hillo", "jelly"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let constraints = Constraints {
///     positions: Hint::parse("h_ll_").unwrap(),
///     ..Constraints::default()
/// };
///
/// let candidates = filter_candidates(&words, &constraints);
/// let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["hello", "hillo"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(words: &'a [Word], constraints: &Constraints) -> Vec<&'a Word> {
    let candidates: Vec<&Word> = words.iter().collect();

    let candidates = narrow(candidates, constraints.positions.is_empty(), |word| {
        matches_positions(word, &constraints.positions)
    });
    let candidates = narrow(candidates, constraints.exclusions.is_empty(), |word| {
        avoids_exclusions(word, &constraints.exclusions)
    });
    let candidates = narrow(candidates, constraints.known.is_empty(), |word| {
        contains_known(word, &constraints.known)
    });
    narrow(candidates, constraints.invalid.is_empty(), |word| {
        avoids_invalid(word, &constraints.invalid)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::constraints::HintConfig;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts<'a>(candidates: &[&'a Word]) -> Vec<&'a str> {
        candidates.iter().map(|w| w.text()).collect()
    }

    fn config(correct: &str, known: &str, invalid_positions: &[&str]) -> HintConfig {
        HintConfig {
            correct: Hint::parse(correct).unwrap(),
            known: LetterSet::parse(known).unwrap(),
            invalid_positions: invalid_positions
                .iter()
                .map(|s| Hint::parse(s).unwrap())
                .collect(),
            ..HintConfig::default()
        }
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "hello", "hillo", "jelly", "happy", "lithe", "shell", "holly", "crane", "puppy",
            "hotel",
        ])
    }

    #[test]
    fn empty_constraints_keep_everything() {
        let dict = dictionary();
        let candidates = filter_candidates(&dict, &Constraints::default());
        assert_eq!(candidates.len(), dict.len());
        assert!(candidates.iter().zip(&dict).all(|(&a, b)| a == b));
    }

    #[test]
    fn correct_positions_scenario() {
        let dict = words(&["hello", "hillo", "jelly"]);
        let constraints = Constraints::from_config(&config("h_ll_", "", &[]));
        assert_eq!(texts(&filter_candidates(&dict, &constraints)), ["hello", "hillo"]);
    }

    #[test]
    fn invalid_positions_exclude_letters_everywhere() {
        let dict = dictionary();
        let constraints = Constraints::from_config(&config("", "", &["_appy"]));
        let candidates = filter_candidates(&dict, &constraints);

        for word in &candidates {
            for letter in [b'a', b'p', b'y'] {
                assert!(!word.has_letter(letter), "{word} contains excluded letter");
            }
        }
        assert_eq!(
            texts(&candidates),
            ["hello", "hillo", "lithe", "shell", "hotel"]
        );
    }

    #[test]
    fn known_letter_excluded_from_one_slot() {
        let dict = dictionary();
        let constraints = Constraints::from_config(&config("", "hl", &["h____"]));
        assert_eq!(texts(&filter_candidates(&dict, &constraints)), ["lithe", "shell"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let dict = dictionary();
        let constraints = Constraints::from_config(&config("zzzzz", "", &[]));
        assert!(filter_candidates(&dict, &constraints).is_empty());
    }

    #[test]
    fn conflicting_constraints_yield_empty() {
        let dict = dictionary();
        // 'h' required and excluded at slot 0
        let constraints = Constraints::from_config(&config("h____", "h", &["h____"]));
        assert!(filter_candidates(&dict, &constraints).is_empty());
    }

    #[test]
    fn pass_order_does_not_matter() {
        let dict = dictionary();
        let constraints = Constraints::from_config(&config("h____", "l", &["_a___"]));

        let forward = filter_candidates(&dict, &constraints);
        let reversed: Vec<&Word> = dict
            .iter()
            .filter(|w| avoids_invalid(w, &constraints.invalid))
            .filter(|w| contains_known(w, &constraints.known))
            .filter(|w| avoids_exclusions(w, &constraints.exclusions))
            .filter(|w| matches_positions(w, &constraints.positions))
            .collect();

        assert_eq!(forward, reversed);
    }

    #[test]
    fn adding_constraints_only_narrows() {
        let dict = dictionary();
        let steps = [
            config("", "", &[]),
            config("h____", "", &[]),
            config("h____", "l", &[]),
            config("h____", "l", &["_a___"]),
            config("h_l__", "l", &["_a___", "__t__"]),
        ];

        let mut previous = dict.iter().collect::<Vec<_>>();
        for step in &steps {
            let current = filter_candidates(&dict, &Constraints::from_config(step));
            assert!(current.iter().all(|w| previous.contains(w)));
            previous = current;
        }
    }

    #[test]
    fn predicates_individually() {
        let word = Word::new("hello").unwrap();
        assert!(matches_positions(&word, &Hint::parse("he").unwrap()));
        assert!(!matches_positions(&word, &Hint::parse("j").unwrap()));
        assert!(contains_known(&word, &LetterSet::parse("ol").unwrap()));
        assert!(!contains_known(&word, &LetterSet::parse("oz").unwrap()));
        assert!(avoids_invalid(&word, &LetterSet::parse("xyz").unwrap()));
        assert!(!avoids_invalid(&word, &LetterSet::parse("xyo").unwrap()));
    }
}
