//! Root ranking command
//!
//! Sweeps the dictionary once per root to measure how fruitful each root is,
//! and summarizes the whole list.

use super::solve::solve_root;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// How one root scored in the ranking sweep
#[derive(Debug, Clone)]
pub struct RootRanking {
    pub root: String,
    /// Number of playable words for this root
    pub derivations: usize,
    /// Total points attainable for this root
    pub attainable_points: u32,
}

/// Statistics from ranking a root list
#[derive(Debug)]
pub struct RankStatistics {
    pub total_roots: usize,
    pub average_derivations: f64,
    /// Most fruitful root
    pub best: Option<RootRanking>,
    /// Least fruitful root
    pub sparsest: Option<RootRanking>,
    /// All rankings, most derivations first
    pub rankings: Vec<RootRanking>,
}

fn sweep_progress(total: usize) -> ProgressBar {
    let style = ProgressStyle::with_template("{bar:40.green/black} {pos}/{len} roots  {msg}")
        .expect("valid progress template")
        .progress_chars("█▉░");
    ProgressBar::new(total as u64).with_style(style)
}

/// Rank every root (or a limited prefix) by derivable-word count
#[must_use]
pub fn rank_roots(
    roots: &[String],
    dictionary_words: &[String],
    limit: Option<usize>,
) -> RankStatistics {
    let cutoff = limit.unwrap_or(roots.len());
    let progress = sweep_progress(roots.len().min(cutoff));

    let mut rankings: Vec<RootRanking> = roots
        .iter()
        .take(cutoff)
        .map(|root| {
            progress.set_message(root.clone());
            let result = solve_root(root, dictionary_words);
            progress.inc(1);
            RootRanking {
                root: root.clone(),
                derivations: result.derivations.len(),
                attainable_points: result.total_points,
            }
        })
        .collect();

    progress.finish_and_clear();

    rankings.sort_by(|a, b| {
        b.derivations
            .cmp(&a.derivations)
            .then_with(|| a.root.cmp(&b.root))
    });

    let total_roots = rankings.len();
    let total_derivations: usize = rankings.iter().map(|r| r.derivations).sum();
    let average_derivations = if total_roots == 0 {
        0.0
    } else {
        total_derivations as f64 / total_roots as f64
    };

    RankStatistics {
        total_roots,
        average_derivations,
        best: rankings.first().cloned(),
        sparsest: rankings.last().cloned(),
        rankings,
    }
}

/// Print ranking statistics to the terminal
pub fn print_rank_statistics(stats: &RankStatistics, top: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "ROOT RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\nRoots evaluated:  {}", stats.total_roots);
    println!("Average words:    {:.1} per root", stats.average_derivations);

    if let Some(best) = &stats.best {
        println!(
            "Most fruitful:    {} ({} words, {} points)",
            best.root.to_uppercase().bright_green().bold(),
            best.derivations,
            best.attainable_points
        );
    }
    if let Some(sparsest) = &stats.sparsest {
        println!(
            "Least fruitful:   {} ({} words, {} points)",
            sparsest.root.to_uppercase().bright_red(),
            sparsest.derivations,
            sparsest.attainable_points
        );
    }

    if !stats.rankings.is_empty() {
        println!("\nTop roots:");
        for (i, ranking) in stats.rankings.iter().take(top).enumerate() {
            println!(
                "  {:>3}. {}  {} words, {} points",
                i + 1,
                ranking.root.to_uppercase().bright_white().bold(),
                ranking.derivations,
                ranking.attainable_points
            );
        }
    }

    println!();
}
