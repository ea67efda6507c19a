//! Display functions for command results

use super::formatters::{depth_bar, format_elapsed, percentage};
use crate::commands::{BuildSummary, TreeStatistics};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print the result of a build
pub fn print_build_summary(summary: &BuildSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DECISION TREE:".bright_cyan().bold(),
        summary.first_guess.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Tree:".bright_cyan().bold());
    println!(
        "   Average guesses:  {}",
        format!("{:.5}", summary.average_depth).bright_yellow().bold()
    );
    println!(
        "   Worst case:       {}",
        summary.max_depth.to_string().yellow()
    );
    println!("   Secrets:          {}", summary.secrets);
    println!("   Vocabulary:       {} words", summary.vocabulary_size);

    println!("\n⚙️  {}", "Search:".bright_cyan().bold());
    println!("   Execution Time:   {}", format_elapsed(summary.elapsed));
    println!("   Guesses scored:   {}", summary.evaluations);
    println!("   Feedback pairs:   {}", summary.feedback_computed);

    println!(
        "\n✅ Wrote {} paths to {}",
        summary.lines_written,
        summary.output.display().to_string().green()
    );
}

/// Print the guess statistics of a tree
pub fn print_tree_statistics(stats: &TreeStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" Tree Statistics ");
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Word:          {}", stats.first_guess.to_uppercase().bright_yellow());
    println!(
        "  Average Depth: {}",
        format!("{:.5}", stats.average_depth).bright_yellow().bold()
    );
    println!("  Max Depth:     {}", stats.max_depth);
    println!("  Total Guesses: {}", stats.total_guesses);

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for (&guesses, &count) in &stats.distribution {
        let (filled, empty) = depth_bar(count, max_count, BAR_WIDTH);
        println!(
            "  {guesses} guesses: {}{} {count:5} ({:5.1}%)",
            filled.green(),
            empty.bright_black(),
            percentage(count, stats.secrets)
        );
    }

    if !stats.hardest.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Words ({} guesses)", stats.max_depth).yellow().bold()
        );
        for word in &stats.hardest {
            println!("  {}", word.to_uppercase().yellow());
        }
    }
}
