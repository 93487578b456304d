//! Board and result printing for the plain-text mode

use std::io::{self, Write};

use colored::Colorize;

use super::formatters::{grid_lines, keyboard_lines, share_text};
use crate::game::{GameEngine, Outcome, Statistics};

/// Print the grid followed by the keyboard
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, game: &GameEngine<'_>) -> io::Result<()> {
    writeln!(out)?;
    for line in grid_lines(game.grid()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;
    for line in keyboard_lines(game.alphabet()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Print the end-of-game banner and shareable summary
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(
    out: &mut W,
    game: &GameEngine<'_>,
    outcome: Outcome,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    match outcome {
        Outcome::Won(guesses) => {
            let praise = match guesses {
                1 => "🏆 Perfect!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                5 => "👍 Solved!",
                _ => "😅 Phew!",
            };
            writeln!(out, "  {}", praise.bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Lost => {
            writeln!(out, "  {}", "Out of guesses!".red().bold())?;
            writeln!(
                out,
                "  The word was {}",
                game.secret_word().bright_yellow().bold()
            )?;
        }
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "\n{}\n", share_text(game))
}

/// Print the running tally of games
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "📊 Played: {}  Won: {}  Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if max == 0 { 0 } else { count * 20 / max };
        writeln!(
            out,
            "   {guesses}: {}{} {count}",
            "█".repeat(width).green(),
            "░".repeat(20 - width).bright_black()
        )?;
    }
    Ok(())
}
