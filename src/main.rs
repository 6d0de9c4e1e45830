//! Wordle Minimax - CLI
//!
//! Suggests guesses that minimise the worst-case number of remaining solutions.

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use wordle_minimax::{
    commands::{
        BenchmarkConfig, GameSetup, analyze_guess, build_solver, fill_context, play_out,
        run_benchmark, run_interactive,
    },
    core::{Context, Mode, Word},
    output::{
        print_analysis, print_benchmark_result, print_best_guesses, print_fill_report,
        print_play_result,
    },
    solver::{Parallelism, SearchOptions},
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle solver ranking guesses by their worst case",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game variant, e.g. new_york_times or wordlegame_org
    #[arg(short, long, global = true, default_value = "new_york_times")]
    variant: String,

    /// Word length, required for variants supporting several
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Treat every word in the guess list as a possible solution
    #[arg(long, global = true)]
    naive: bool,

    /// Directory holding word lists and cache files
    #[arg(short, long, global = true, default_value = "cache")]
    data_dir: PathBuf,

    /// Neither read nor write the result cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Worker threads: off, auto, or a count
    #[arg(short, long, global = true, default_value = "auto")]
    jobs: Parallelism,

    /// Seconds to wait for the cache lock
    #[arg(long, global = true, default_value = "15")]
    lock_timeout: u64,

    /// Hide the progress bar
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play,

    /// Show the best first guesses
    Best,

    /// Play a game automatically, against the foil when no word is given
    Solve {
        /// The solution to play against
        word: Option<String>,

        /// Show solution counts and ranks per turn
        #[arg(long)]
        verbose: bool,
    },

    /// Rank one guess and list its partitions
    Analyze {
        /// Guess to analyze
        word: String,
    },

    /// Play out every solution
    Benchmark {
        /// Play at most this many solutions
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Shuffle seed
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Pre-compute the cache for the first two turns
    Fill {
        /// Every variant, mode and length instead of the selected one
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let setup = GameSetup {
        data_dir: cli.data_dir.clone(),
        use_cache: !cli.no_cache,
        lock_timeout: Duration::from_secs(cli.lock_timeout),
        options: SearchOptions {
            parallelism: cli.jobs,
            progress: !cli.no_progress,
        },
    };

    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Fill { all: true } => {
            for context in Context::all() {
                fill_command(&context, &setup)?;
            }
            Ok(())
        }
        Commands::Fill { all: false } => fill_command(&selected_context(&cli)?, &setup),
        command => {
            let context = selected_context(&cli)?;
            run_game_command(command, context, &setup)
        }
    }
}

fn selected_context(cli: &Cli) -> Result<Context> {
    let mode = if cli.naive { Mode::Naive } else { Mode::Smart };
    Context::new(&cli.variant, mode, cli.length).context("invalid game selection")
}

fn run_game_command(command: Commands, context: Context, setup: &GameSetup) -> Result<()> {
    let mut solver = build_solver(context, setup).with_context(|| {
        format!("failed to load word lists from {}", setup.data_dir.display())
    })?;

    match command {
        Commands::Play => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            run_interactive(&mut solver, &mut input, &mut output)?;
        }
        Commands::Best => {
            let best = solver.best_guesses()?;
            print_best_guesses(&best);
        }
        Commands::Solve { word, verbose } => {
            let solution = word.as_deref().map(Word::new).transpose()?;
            let result = play_out(&mut solver, solution.as_ref())?;
            print_play_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let guess = Word::new(&word)?;
            if !solver.guesses().contains(&guess) {
                eprintln!("{guess} is not in the word list");
            }
            let analysis = analyze_guess(solver.solutions(), &guess)?;
            print_analysis(&analysis);
        }
        Commands::Benchmark { limit, seed } => {
            println!(
                "Running benchmark on {} solutions...",
                limit.map_or(solver.solutions().len(), |limit| limit
                    .min(solver.solutions().len()))
            );
            let result = run_benchmark(&mut solver, BenchmarkConfig { seed, limit })?;
            print_benchmark_result(&result);
        }
        Commands::Fill { .. } => bail!("fill does not play a game"),
    }
    Ok(())
}

fn fill_command(context: &Context, setup: &GameSetup) -> Result<()> {
    println!("Building cache for {context}");
    let report = fill_context(context, setup)
        .with_context(|| format!("failed to fill cache for {context}"))?;
    print_fill_report(context, &report);
    Ok(())
}
