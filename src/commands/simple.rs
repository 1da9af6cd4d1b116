//! Simple interactive CLI mode
//!
//! Plain stdin/stdout game loop without the TUI.

use crate::game::{GameSession, SubmitResult};
use crate::wordlists::{Dictionary, RootSource};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on an I/O failure while prompting or reading input.
pub fn run_simple(roots: &impl RootSource, dictionary: &impl Dictionary) -> Result<()> {
    print_banner();

    let mut session = GameSession::start(roots);
    announce_root(&session);

    loop {
        let input = read_word()?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_final_score(&session);
                return Ok(());
            }
            "new" | "n" => {
                session.reset(roots);
                println!("\n🔄 New game started!\n");
                announce_root(&session);
                continue;
            }
            _ => {}
        }

        match session.submit(&input, dictionary) {
            SubmitResult::Accepted { word, points, score } => {
                let plural = if points == 1 { "point" } else { "points" };
                println!(
                    "  {} {} (+{points} {plural}, total {score})\n",
                    "✓".bright_green().bold(),
                    word.bright_white().bold()
                );
            }
            SubmitResult::Rejected(rejection) => {
                if !rejection.is_silent() {
                    println!(
                        "  {} {}: {}\n",
                        "✗".bright_red().bold(),
                        rejection.title().bright_red(),
                        rejection.message()
                    );
                }
            }
        }
    }
}

fn print_banner() {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!("{}", "  W O R D   S C R A M B L E".bright_cyan().bold());
    println!("{}\n", "═".repeat(62).bright_cyan());

    println!("Spell as many words as you can from the letters of the root word.");
    println!("Rules: at least 4 letters, real words only, each root letter");
    println!("usable once per occurrence, no repeats.\n");
    println!("Commands: 'quit' to exit, 'new' for a fresh root word\n");
}

fn announce_root(session: &GameSession) {
    println!(
        "Your root word is: {}\n",
        session.root().to_uppercase().bright_yellow().bold()
    );
}

fn print_final_score(session: &GameSession) {
    let found = session.used_words().len();
    println!(
        "\nFinal score for {}: {} ({} {})",
        session.root().to_uppercase().bright_yellow().bold(),
        session.score().to_string().bright_cyan().bold(),
        found,
        if found == 1 { "word" } else { "words" }
    );
    println!("\n👋 Thanks for playing!\n");
}

/// Prompt for and read one line from stdin
fn read_word() -> Result<String> {
    print!("Word: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;

    Ok(line.trim().to_string())
}
