//! Display functions for command results

use super::formatters::word_entry;
use crate::commands::{CheckResult, SolveResult};
use colored::Colorize;

/// Derivations shown by default before `--verbose` kicks in
const DEFAULT_LISTING: usize = 15;

fn heading(text: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {text} ");
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    let title = format!(
        "{} {} {}",
        result.candidate.to_uppercase().bright_yellow().bold(),
        "against".cyan(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    heading(&title);

    match &result.verdict {
        Ok(points) => {
            let plural = if *points == 1 { "point" } else { "points" };
            println!("\n{}", format!("✅ Accepted for {points} {plural}").green().bold());
        }
        Err(rejection) => {
            println!(
                "\n{} {}",
                format!("❌ {}", rejection.title()).red().bold(),
                rejection.message()
            );
        }
    }
    println!();
}

/// Print the result of a derivation sweep
///
/// With `verbose`, every word is listed; otherwise only the best finds.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let title = format!(
        "{} {}",
        "DERIVATIONS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    heading(&title);

    println!("\n📚 Swept {} dictionary words", result.dictionary_size);
    println!(
        "   Playable words:   {}",
        result.derivations.len().to_string().bright_yellow()
    );
    println!(
        "   Attainable score: {}",
        result.total_points.to_string().bright_yellow()
    );

    if result.derivations.is_empty() {
        println!("\nNothing to find. Pick a juicier root.\n");
        return;
    }

    let shown = if verbose {
        result.derivations.len()
    } else {
        result.derivations.len().min(DEFAULT_LISTING)
    };

    println!("\nBest finds:");
    for derivation in result.derivations.iter().take(shown) {
        println!("  {}", word_entry(&derivation.word, derivation.points));
    }

    let hidden = result.derivations.len() - shown;
    if hidden > 0 {
        println!("  … and {hidden} more (use --verbose to list all)");
    }
    println!();
}
