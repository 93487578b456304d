//! Wolfle - CLI
//!
//! Play the word-guessing game in the terminal, either line by line or in a
//! full-screen TUI.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use wolfle::{
    commands::{PlayConfig, run_play},
    interactive::{App, run_tui},
    telemetry::init_tracing,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wolfle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word for the first game (must be in the secret list)
    #[arg(long, global = true)]
    secret: Option<String>,

    /// Seed for secret selection, for reproducible sessions
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File of allowed guesses, one word per line
    #[arg(long, global = true, requires = "secrets")]
    allowed: Option<PathBuf>,

    /// File of possible secrets, one word per line
    #[arg(long, global = true, requires = "allowed")]
    secrets: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Plain-text mode (default)
    Play,

    /// Full-screen terminal UI
    Tui,
}

/// Embedded lists unless both paths were given
fn load_dictionary(allowed: Option<&PathBuf>, secrets: Option<&PathBuf>) -> Result<Dictionary> {
    match (allowed, secrets) {
        (Some(allowed), Some(secrets)) => Dictionary::from_files(allowed, secrets)
            .with_context(|| {
                format!(
                    "loading word lists from {} and {}",
                    allowed.display(),
                    secrets.display()
                )
            }),
        _ => Dictionary::embedded().context("loading embedded word lists"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(cli.allowed.as_ref(), cli.secrets.as_ref())?;
    info!(
        allowed = dictionary.allowed_len(),
        secrets = dictionary.secrets().len(),
        "word lists loaded"
    );

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Word lists are stored uppercase
    let secret = cli.secret.map(|word| word.trim().to_ascii_uppercase());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, secret, rng),
        Commands::Tui => run_tui_command(&dictionary, secret.as_deref(), rng),
    }
}

fn run_play_command(dictionary: &Dictionary, secret: Option<String>, mut rng: StdRng) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let stats = run_play(dictionary, PlayConfig { secret }, &mut rng, &mut input, &mut out)?;
    info!(
        games = stats.total_games,
        won = stats.games_won,
        "session finished"
    );
    Ok(())
}

fn run_tui_command(dictionary: &Dictionary, secret: Option<&str>, rng: StdRng) -> Result<()> {
    let app = App::new(dictionary, secret, rng).context("starting game")?;
    run_tui(app)
}
