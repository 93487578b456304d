//! Plain-text interactive mode
//!
//! Reads guesses line by line and prints the board after each one. Input and
//! output are generic so whole sessions can be driven from tests.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use tracing::debug;

use crate::game::{GameEngine, Outcome, Statistics};
use crate::output::{print_board, print_outcome, print_statistics};
use crate::wordlists::Dictionary;

/// Options for a plain-text session
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Secret word for the first game; later games draw at random
    pub secret: Option<String>,
}

/// Run games until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure, or if the configured secret word is not
/// a possible secret.
pub fn run_play<R, W, G>(
    dictionary: &Dictionary,
    config: PlayConfig,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n{}", "WOLFLE".bright_green().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word. Type 'quit' to stop.",
        dictionary.word_len()
    )?;

    let mut stats = Statistics::new();
    let mut secret = config.secret;

    loop {
        let mut game = match secret.take() {
            Some(word) => GameEngine::new(dictionary, &word)?,
            None => GameEngine::with_random_secret(dictionary, rng)?,
        };

        let Some(outcome) = play_game(&mut game, input, out)? else {
            break;
        };
        stats.record(outcome);
        print_outcome(out, &game, outcome)?;
        print_statistics(out, &stats)?;

        let again = read_line(input, out, "Play again? (yes/no)")?;
        if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            break;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Play one game to the end
///
/// Returns `None` if the player quit or input ended first.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    game: &mut GameEngine<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Outcome>> {
    let mut row = 0;

    while !game.is_over() {
        let prompt = format!("Guess {}/{}", row + 1, game.rows());
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(None);
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            writeln!(out, "The word was {}", game.secret_word().bright_yellow())?;
            return Ok(None);
        }
        if line.is_empty() {
            writeln!(out, "Type a {}-letter word", game.cols())?;
            continue;
        }

        // Dictionary words are uppercase
        let guess = line.to_ascii_uppercase();

        match game.process_guess(&guess, row) {
            Ok(true) => {
                row += 1;
                print_board(out, game)?;
            }
            Ok(false) => {
                writeln!(out, "{}", "❌ Not in word list, try again".red())?;
            }
            Err(err) if err.is_invalid_argument() => {
                debug!(%err, "guess refused");
                writeln!(out, "{}", format!("❌ {err}").red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Outcome::of(game, row))
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["crane", "slate", "react", "moist", "plumb", "ghost", "towel"],
            ["crane", "slate"],
        )
        .unwrap()
    }

    fn play(script: &str, secret: &str) -> (Option<Outcome>, String) {
        colored::control::set_override(false);
        let dictionary = dictionary();
        let mut game = GameEngine::new(&dictionary, secret).unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = play_game(&mut game, &mut input, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_rejected_guess() {
        let (outcome, text) = play("zzzzz\nslate\ncrane\n", "CRANE");
        assert_eq!(outcome, Some(Outcome::Won(2)));
        assert!(text.contains("Not in word list"));
        // The rejected guess does not use up a row
        assert!(text.contains("Guess 2/6"));
        assert!(!text.contains("Guess 3/6"));
    }

    #[test]
    fn blank_line_asks_again() {
        let (outcome, text) = play("\n  \ncrane\n", "CRANE");
        assert_eq!(outcome, Some(Outcome::Won(1)));
        assert!(text.contains("Type a 5-letter word"));
        assert!(!text.contains("Guess 2/6"));
    }

    #[test]
    fn lowercase_and_padded_input_is_accepted() {
        let (outcome, _) = play("  Slate \n cRaNe\n", "CRANE");
        assert_eq!(outcome, Some(Outcome::Won(2)));
    }

    #[test]
    fn six_misses_lose() {
        let (outcome, _) = play("slate\nmoist\nplumb\nghost\ntowel\nreact\n", "CRANE");
        assert_eq!(outcome, Some(Outcome::Lost));
    }

    #[test]
    fn quit_and_end_of_input() {
        let (outcome, text) = play("slate\nquit\n", "CRANE");
        assert_eq!(outcome, None);
        assert!(text.contains("The word was CRANE"));

        let (outcome, _) = play("slate\n", "CRANE");
        assert_eq!(outcome, None);
    }

    #[test]
    fn run_play_records_statistics() {
        colored::control::set_override(false);
        let dictionary = dictionary();
        let config = PlayConfig {
            secret: Some("CRANE".to_string()),
        };
        let mut input = Cursor::new(b"crane\nno\n".to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        let stats = run_play(&dictionary, config, &mut rng, &mut input, &mut out).unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(String::from_utf8(out).unwrap().contains("Thanks for playing"));
    }

    #[test]
    fn run_play_rejects_bad_secret() {
        let dictionary = dictionary();
        let config = PlayConfig {
            secret: Some("REACT".to_string()),
        };
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(run_play(&dictionary, config, &mut rng, &mut input, &mut out).is_err());
    }
}
