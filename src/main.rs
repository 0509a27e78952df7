//! Wordle Advisor - CLI
//!
//! Thin front-end over the recommendation engine: scores guesses, suggests
//! next guesses for an observed history, and precomputes the opening cache.
//! The actual game loop (secret words, turn limits, difficulty rules) lives
//! with the caller, not here.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use wordle_advisor::{
    core::{Color, Pattern, Word},
    solver::{CancelToken, Recommendation, Solver, SolverError, cache, entropy},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Entropy-based guess recommendations for Wordle-style games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the dictionary file (one 5-letter word per line)
    #[arg(short = 'w', long, global = true, default_value = "data/en/database.txt")]
    wordlist: PathBuf,

    /// Path to the opening-recommendation cache file
    #[arg(short = 'c', long, global = true)]
    cache: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a known secret and print the feedback pattern
    Score {
        /// The guessed word
        guess: String,

        /// The true secret word
        secret: String,
    },

    /// Suggest next guesses for a history of observations
    Suggest {
        /// Observation as guess=pattern, e.g. crane=-Y--G (repeatable)
        #[arg(short, long = "feed")]
        feeds: Vec<String>,

        /// Number of recommendations to show
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Interactive assistant: type observations, get recommendations
    Assist {
        /// Number of recommendations to show per turn
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Rank the full dictionary and save the opening cache
    Precompute,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { guess, secret } => run_score(&guess, &secret),
        Commands::Suggest { feeds, top } => {
            run_suggest(&cli.wordlist, cli.cache.as_deref(), &feeds, top)
        }
        Commands::Assist { top } => run_assist(&cli.wordlist, cli.cache.as_deref(), top),
        Commands::Precompute => run_precompute(&cli.wordlist, cli.cache.as_deref()),
    }
}

fn load_dictionary(path: &Path) -> Result<Vec<Word>> {
    let words = load_from_file(path)
        .with_context(|| format!("failed to read dictionary {}", path.display()))?;
    if words.is_empty() {
        bail!("dictionary {} contains no valid words", path.display());
    }
    Ok(words)
}

/// Build a solver, serving the opening ranking from the cache when possible
/// and writing it back after a cold computation.
fn build_solver(dictionary: Vec<Word>, cache_path: Option<&Path>) -> Result<Solver> {
    let cached = match cache_path {
        Some(path) => cache::load(path)
            .with_context(|| format!("failed to read cache {}", path.display()))?
            .filter(|recs| !recs.is_empty()),
        None => None,
    };

    let cache_was_cold = cached.is_none();
    let solver = Solver::new(dictionary, cached);

    if cache_was_cold && let Some(path) = cache_path {
        cache::save(path, solver.opening_recommendations())
            .with_context(|| format!("failed to write cache {}", path.display()))?;
    }

    Ok(solver)
}

fn run_score(guess: &str, secret: &str) -> Result<()> {
    let guess = Word::new(guess).map_err(|e| anyhow!("invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| anyhow!("invalid secret: {e}"))?;

    let pattern = Pattern::score(&guess, &secret);
    println!("{}  {}", paint(&guess, pattern), pattern.to_emoji());
    Ok(())
}

fn run_suggest(
    wordlist: &Path,
    cache_path: Option<&Path>,
    feeds: &[String],
    top: usize,
) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let mut solver = build_solver(dictionary, cache_path)?;

    for feed in feeds {
        let (guess, pattern) = parse_observation(feed)?;
        match solver.feed(&guess, pattern) {
            Ok(()) => println!("{}", paint(&guess, pattern)),
            Err(err) => bail!("{err}"),
        }
    }

    print_status(&solver, top)
}

fn run_assist(wordlist: &Path, cache_path: Option<&Path>, top: usize) -> Result<()> {
    let dictionary = load_dictionary(wordlist)?;
    let mut solver = build_solver(dictionary, cache_path)?;

    println!("Enter observations as 'guess pattern' (pattern letters: G, Y, -).");
    println!("Commands: tips, reset, quit.");
    print_status(&solver, top)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" | "tips" => print_status(&solver, top)?,
            "quit" | "exit" => break,
            "reset" => {
                solver.reset();
                println!("New round: dictionary restored.");
            }
            observation => match observation.split_once(char::is_whitespace) {
                Some((guess, pattern)) => match parse_parts(guess, pattern.trim()) {
                    Ok((guess, pattern)) => match solver.feed(&guess, pattern) {
                        Ok(()) => {
                            println!("{}", paint(&guess, pattern));
                            print_status(&solver, top)?;
                        }
                        Err(err @ SolverError::InfeasiblePattern { .. }) => {
                            println!("{err}; resetting the round.");
                            solver.reset();
                        }
                        Err(err) => println!("{err}"),
                    },
                    Err(err) => println!("Could not read that: {err}"),
                },
                None => println!("Expected 'guess pattern', e.g. crane -Y--G"),
            },
        }
    }

    Ok(())
}

fn run_precompute(wordlist: &Path, cache_path: Option<&Path>) -> Result<()> {
    let cache_path = cache_path.ok_or_else(|| anyhow!("precompute requires --cache <path>"))?;
    let dictionary = load_dictionary(wordlist)?;

    println!("Ranking {} words...", dictionary.len());
    let pb = ProgressBar::new(dictionary.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );

    let ranked = entropy::rank_guesses_where(
        &dictionary,
        &dictionary,
        None,
        &CancelToken::new(),
        &|| pb.inc(1),
    )
    .ok_or_else(|| anyhow!("ranking was cancelled"))?;
    pb.finish_and_clear();

    cache::save(cache_path, &ranked)
        .with_context(|| format!("failed to write cache {}", cache_path.display()))?;
    println!("Saved {} recommendations to {}", ranked.len(), cache_path.display());

    if let Some(best) = ranked.first() {
        println!("Best opening: {} ({:.3} bits)", best.word, best.bits);
    }
    Ok(())
}

fn print_status(solver: &Solver, top: usize) -> Result<()> {
    println!(
        "{} candidates, {:.2} bits of uncertainty",
        solver.candidate_count(),
        solver.remaining_uncertainty()
    );

    match solver.best_guesses(top) {
        Ok(recommendations) => print_recommendations(&recommendations),
        Err(SolverError::EmptyCandidates) => {
            println!("No words fit all observations; check the fed patterns or reset.");
        }
        Err(err) => bail!("{err}"),
    }
    Ok(())
}

fn print_recommendations(recommendations: &[Recommendation]) {
    for (i, rec) in recommendations.iter().enumerate() {
        println!("  {}. {}  [{:.2} bits]", i + 1, rec.word.to_string().bold(), rec.bits);
    }
}

fn parse_observation(feed: &str) -> Result<(Word, Pattern)> {
    let (guess, pattern) = feed
        .split_once('=')
        .ok_or_else(|| anyhow!("expected guess=pattern, got '{feed}'"))?;
    parse_parts(guess, pattern)
}

fn parse_parts(guess: &str, pattern: &str) -> Result<(Word, Pattern)> {
    let guess = Word::new(guess).map_err(|e| anyhow!("invalid guess '{guess}': {e}"))?;
    let pattern = Pattern::from_str(pattern)
        .ok_or_else(|| anyhow!("invalid pattern '{pattern}' (use G, Y, - for each letter)"))?;
    Ok((guess, pattern))
}

/// Render a guess with its feedback colors
fn paint(guess: &Word, pattern: Pattern) -> String {
    guess
        .chars()
        .iter()
        .zip(pattern.colors())
        .map(|(&letter, color)| {
            let letter = letter.to_string();
            match color {
                Color::Green => format!("{} ", letter.green().bold()),
                Color::Yellow => format!("{} ", letter.yellow().bold()),
                Color::Grey => format!("{} ", letter.dimmed().bold()),
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}
