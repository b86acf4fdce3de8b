//! Wordle Helper - CLI
//!
//! Filters the dictionary by the hints gathered so far and prints the
//! candidate whose letters are most common slot by slot.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use wordle_helper::{
    commands::{RecommendConfig, run_recommend},
    core::{Hint, LetterSet, Word},
    output::{print_legacy_warning, print_recommendation, print_report},
    solver::{HintConfig, InvalidLetters, TieBreak},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Helper tool for solving Wordle puzzles",
    after_help = "E.g. wordle_helper h_l__ -k hle -x _appy _o_es",
    version,
    author
)]
struct Cli {
    /// Known letters in their correct positions, '_' for unknown. E.g. h_l__
    #[arg(default_value = "", value_parser = Hint::parse)]
    correct_positions: Hint,

    /// Letters known to be in the word, position unknown. E.g. hle
    #[arg(short = 'k', long, default_value = "", value_parser = LetterSet::parse)]
    known_letters: LetterSet,

    /// Letters in the wrong position, one hint per earlier guess. E.g. _appy _o_es
    #[arg(short = 'x', long, num_args = 0.., value_parser = Hint::parse)]
    invalid_positions: Vec<Hint>,

    /// Legacy: letters known to be absent. Replaces the set derived from
    /// --invalid-positions minus --known-letters; the two are not equivalent
    #[arg(short = 'i', long, value_parser = LetterSet::parse)]
    invalid_letters: Option<LetterSet>,

    /// Tie-break between equally scored words: random (default) or first
    #[arg(long, default_value = "random", value_parser = ["random", "first"])]
    tie_break: String,

    /// Seed for the random tie-break
    #[arg(long)]
    seed: Option<u64>,

    /// Word list file, one five-letter word per line (default: embedded list)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Print constraints, candidate counts, and top scores to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load the dictionary from `path`, or the embedded list when absent
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display())),
        None => Ok(words_from_slice(DICTIONARY)),
    }
}

impl Cli {
    /// Gather the hint arguments into a recommendation config
    fn recommend_config(&self) -> RecommendConfig {
        let invalid_letters = self
            .invalid_letters
            .clone()
            .map_or(InvalidLetters::Derived, InvalidLetters::Manual);

        RecommendConfig {
            hints: HintConfig {
                correct: self.correct_positions,
                known: self.known_letters.clone(),
                invalid_positions: self.invalid_positions.clone(),
                invalid_letters,
            },
            tie_break: TieBreak::from_name(&self.tie_break),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;

    if cli.invalid_letters.is_some() {
        print_legacy_warning();
    }

    let result = run_recommend(&cli.recommend_config(), &dictionary);

    if cli.verbose {
        print_report(&result);
    }
    print_recommendation(&result);

    Ok(())
}
