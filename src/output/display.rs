//! Display functions for command results
//!
//! Standard output carries only the recommended word. Reports and warnings
//! go to standard error.

use super::formatters::{
    create_progress_bar, format_exclusions, format_letter_ranks, format_letters,
};
use crate::commands::RecommendResult;
use colored::Colorize;

/// Print the recommended word, or nothing when no word fits
pub fn print_recommendation(result: &RecommendResult) {
    if let Some(word) = &result.word {
        println!("{word}");
    }
}

/// Print the constraints, candidate counts, and top scores to stderr
pub fn print_report(result: &RecommendResult) {
    eprintln!("\n{}", "─".repeat(60).cyan());
    eprintln!(" {} ", "WORDLE HELPER".bright_cyan().bold());
    eprintln!("{}", "─".repeat(60).cyan());

    eprintln!("\n🔎 {}", "Constraints:".bright_cyan().bold());
    eprintln!("   Correct:          {}", result.positions.to_string().bright_green());
    eprintln!(
        "   Wrong slot:       {}",
        format_exclusions(&result.exclusions).yellow()
    );
    eprintln!("   Known letters:    {}", format_letters(&result.known).yellow());
    eprintln!(
        "   Invalid letters:  {}",
        format_letters(&result.invalid).bright_black()
    );

    eprintln!(
        "\n📊 {} {} of {} words",
        "Candidates:".bright_cyan().bold(),
        result.candidate_count.to_string().bright_yellow().bold(),
        result.dictionary_size
    );

    if result.candidate_count == 0 {
        eprintln!("\n{}", "❌ No word matches these hints".red().bold());
        return;
    }

    eprintln!("\n🔤 {}", "Common letters per slot:".bright_cyan().bold());
    for (position, ranks) in result.letter_ranks.iter().enumerate() {
        eprintln!("   {position}: {}", format_letter_ranks(ranks));
    }

    let max_score = result.best_score.unwrap_or(0.0);
    eprintln!("\n🏆 {}", "Top candidates:".bright_cyan().bold());
    for (word, score) in &result.top {
        let bar = create_progress_bar(*score, max_score, 30);
        eprintln!(
            "   {} [{}] {}",
            word.to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{score:.2}").bright_yellow()
        );
    }

    if result.tied.len() > 1 {
        eprintln!(
            "\n🎲 {} tied at {max_score:.2}: {}",
            result.tied.len(),
            result.tied.join(", ")
        );
    }

    if let Some(word) = &result.word {
        eprintln!(
            "\n{}",
            format!("✅ Suggested guess: {}", word.to_uppercase())
                .green()
                .bold()
        );
    }
}

/// Warn that manually supplied invalid letters are a legacy mode
pub fn print_legacy_warning() {
    eprintln!(
        "{} {}",
        "warning:".yellow().bold(),
        "--invalid-letters is a legacy mode; invalid letters are normally derived \
         from --invalid-positions minus --known-letters, and the two are not equivalent"
    );
}
