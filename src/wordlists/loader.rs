//! Loading word lists from disk
//!
//! File-backed alternative to the embedded lists, selected by the CLI's
//! `--roots` and `--dict` flags.

use std::fs;
use std::io;
use std::path::Path;

/// Read a newline-delimited word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/dictionary.txt").unwrap();
/// assert!(!dictionary.is_empty());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_list(&raw))
}

/// Parse newline-delimited word-list text
///
/// Entries are trimmed and lowercased; blank lines are dropped.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Owned copies of an embedded list
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_trims_and_lowercases() {
        let raw = "Silk\n  WORMS  \n\nmilk\n";
        assert_eq!(parse_list(raw), ["silk", "worms", "milk"]);
    }

    #[test]
    fn parse_list_of_blank_text_is_empty() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("\n  \n\t\n").is_empty());
    }

    #[test]
    fn words_from_slice_keeps_order() {
        assert_eq!(
            words_from_slice(&["silk", "worm", "milk"]),
            ["silk", "worm", "milk"]
        );
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }

    #[test]
    fn embedded_roots_convert_whole() {
        use crate::wordlists::ROOTS;

        assert_eq!(words_from_slice(ROOTS).len(), ROOTS.len());
    }
}
