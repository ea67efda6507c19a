//! Wordle Decision Tree Builder - CLI
//!
//! Searches for the average-optimal Wordle strategy tree and writes it to a
//! file, reports its guess distribution, or plays it interactively.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordle_tree::{
    commands::{BuildConfig, SearchConfig, forced_guess, run_build, run_play, run_stats},
    output::{print_build_summary, print_tree_statistics},
    solver::SearchParams,
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Branch-and-bound search for average-optimal Wordle decision trees",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log search progress at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a decision tree and write it to a file
    Build {
        /// First guess to force at the root, or 'auto' to search for it
        initial_guess: String,

        /// Potential solutions, one word per line
        solutions: PathBuf,

        /// Additional permitted guesses, one word per line
        guesses: PathBuf,

        /// Guesses fully explored at every node
        top_n: usize,

        /// Shortlist limit when heuristic ties widen it
        hard_max: usize,

        /// Further guesses allowed after the first
        max_tree_depth: usize,

        /// Where to write the tree, one path per line
        output: PathBuf,
    },

    /// Build a tree and print how many guesses each answer takes
    Stats(SearchArgs),

    /// Build a tree and play Wordle with it suggesting every guess
    Play(SearchArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Potential solutions, one word per line
    solutions: PathBuf,

    /// Additional permitted guesses, one word per line
    guesses: PathBuf,

    /// First guess to force at the root, or 'auto' to search for it
    #[arg(short, long, default_value = "auto")]
    first_guess: String,

    /// Guesses fully explored at every node
    #[arg(long, default_value = "6")]
    top_n: usize,

    /// Shortlist limit when heuristic ties widen it
    #[arg(long, default_value = "50")]
    hard_max: usize,

    /// Further guesses allowed after the first
    #[arg(long, default_value = "7")]
    max_tree_depth: usize,
}

impl SearchArgs {
    fn into_config(self) -> Result<SearchConfig> {
        Ok(SearchConfig {
            initial_guess: forced_guess(&self.first_guess).map(str::to_string),
            solutions: self.solutions,
            guesses: self.guesses,
            params: SearchParams::new(self.top_n, self.hard_max, self.max_tree_depth)?,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            initial_guess,
            solutions,
            guesses,
            top_n,
            hard_max,
            max_tree_depth,
            output,
        } => {
            let config = BuildConfig {
                search: SearchConfig {
                    initial_guess: forced_guess(&initial_guess).map(str::to_string),
                    solutions,
                    guesses,
                    params: SearchParams::new(top_n, hard_max, max_tree_depth)?,
                },
                output,
            };
            let summary = run_build(&config)?;
            print_build_summary(&summary);
        }
        Commands::Stats(args) => {
            let stats = run_stats(&args.into_config()?)?;
            print_tree_statistics(&stats);
        }
        Commands::Play(args) => match run_play(&args.into_config()?)? {
            Some(guesses) => println!("\n🎉 {}", format!("Done after {guesses} guesses").green().bold()),
            None => println!("\n👋 Thanks for playing!"),
        },
    }

    Ok(())
}

/// Log to stderr so that command output stays clean on stdout
fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,wordle_tree=debug"
    } else {
        "warn,wordle_tree=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
