//! Word Scramble - CLI
//!
//! Word derivation game with TUI and CLI modes, plus helper commands for
//! checking words, solving roots, and curating the root list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::commands::{check_word, print_rank_statistics, rank_roots, run_simple, solve_root};
use word_scramble::interactive::{App, run_tui};
use word_scramble::output::{print_check_result, print_solve_result};
use word_scramble::wordlists::loader::{load_from_file, words_from_slice};
use word_scramble::wordlists::{DICTIONARY, ROOTS, RootList, WordListDictionary};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Word derivation game: spell as many words as you can from a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Root list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    roots: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short, long, global = true, default_value = "embedded")]
    dict: String,
}

#[derive(Subcommand)]
enum Command {
    /// Play in the full-screen TUI (the default)
    Play,

    /// Play on plain stdin/stdout
    Simple,

    /// Check one candidate word against a root
    Check {
        /// The root word to spell from
        root: String,

        /// The candidate word to validate
        word: String,
    },

    /// List every dictionary word derivable from a root
    Solve {
        /// The root word to sweep
        root: String,

        /// List all derivations instead of the best finds
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank the root list by how many words each root yields
    Rank {
        /// Limit the number of roots to evaluate
        #[arg(short, long)]
        limit: Option<usize>,

        /// How many top roots to print
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Resolve a word-list flag to its words
///
/// A missing or unreadable file is fatal at startup: the game cannot run
/// without its lists. An empty roots list is tolerated later (the session
/// falls back to a built-in root).
fn load_list(mode: &str, embedded: &[&str], what: &str) -> Result<Vec<String>> {
    if mode == "embedded" {
        return Ok(words_from_slice(embedded));
    }
    load_from_file(mode).with_context(|| format!("Failed to load {what} from {mode}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root_words = load_list(&cli.roots, ROOTS, "root word list")?;
    let dictionary_words = load_list(&cli.dict, DICTIONARY, "dictionary")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let roots = RootList::new(root_words);
            let dictionary = WordListDictionary::new(dictionary_words, "en");
            run_tui(App::new(roots, dictionary))
        }
        Command::Simple => {
            let roots = RootList::new(root_words);
            let dictionary = WordListDictionary::new(dictionary_words, "en");
            run_simple(&roots, &dictionary)
        }
        Command::Check { root, word } => {
            let dictionary = WordListDictionary::new(dictionary_words, "en");
            print_check_result(&check_word(&root, &word, &dictionary));
            Ok(())
        }
        Command::Solve { root, verbose } => {
            print_solve_result(&solve_root(&root, &dictionary_words), verbose);
            Ok(())
        }
        Command::Rank { limit, top } => {
            print_rank_statistics(&rank_roots(&root_words, &dictionary_words, limit), top);
            Ok(())
        }
    }
}
