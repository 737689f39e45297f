//! Guess the Number - CLI
//!
//! 5-digit deduction game with TUI and CLI modes and a digit-grouping tutorial.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_the_number::{
    commands::{run_audit, run_simple, score_guess},
    output::{print_audit_result, print_score_result},
    session::GameConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "guess_the_number",
    about = "Guess a secret 5-digit number with exact and partial match clues",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game (1-10)
    #[arg(long, global = true, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
    turns: u8,

    /// Seed for reproducible secrets and audits
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter when RUST_LOG is unset (e.g. warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against a known secret
    Score {
        /// The guess to score
        guess: String,

        /// The secret to score it against
        secret: String,
    },

    /// Play many strategy games and check the tutorial's conclusions
    Audit {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = GameConfig {
        max_turns: cli.turns,
    };
    debug!(max_turns = config.max_turns, seed = ?cli.seed, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, make_rng(cli.seed)),
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            run_simple(config, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Audit { count } => {
            run_audit_command(count, cli.seed);
            Ok(())
        }
    }
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_guess(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_audit_command(count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Auditing the tutorial over {count} strategy games (seed {seed})...");

    let result = run_audit(count, seed);
    print_audit_result(&result);
}

fn run_play_command(config: GameConfig, rng: StdRng) -> Result<()> {
    use guess_the_number::interactive::{App, run_tui};

    let app = App::new(config, rng);
    run_tui(app)
}
