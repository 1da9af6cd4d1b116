//! Small pure helpers shared by the CLI and TUI output

/// Format a letter count as a circled glyph
///
/// Counts 1-20 map to the Unicode circled numbers; anything else falls back
/// to a plain parenthesized number.
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::circled_count;
///
/// assert_eq!(circled_count(4), "④");
/// assert_eq!(circled_count(21), "(21)");
/// ```
#[must_use]
pub fn circled_count(count: usize) -> String {
    match count {
        0 => "⓪".to_string(),
        1..=20 => {
            // '①' is U+2460; the block runs contiguously through '⑳'
            let glyph = char::from_u32(0x2460 + (count as u32 - 1)).unwrap_or('?');
            glyph.to_string()
        }
        _ => format!("({count})"),
    }
}

/// Format an accepted word with its letter count and point value
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::word_entry;
///
/// assert_eq!(word_entry("silk", 1), "④ silk  +1");
/// ```
#[must_use]
pub fn word_entry(word: &str, points: u32) -> String {
    format!("{} {word}  +{points}", circled_count(word.chars().count()))
}

/// Format the running score banner
#[must_use]
pub fn score_line(root: &str, score: u32) -> String {
    format!("Your score for {} is {score}", root.to_uppercase())
}
