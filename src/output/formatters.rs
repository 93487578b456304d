//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Alphabet, Grid, Letter, Status};
use crate::game::GameEngine;

/// Keyboard rows used to lay out the alphabet
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter as a colored tile, e.g. ` A ` on green
#[must_use]
pub fn colored_tile(letter: &Letter) -> ColoredString {
    let tile = format!(" {} ", letter.character());
    match letter.status() {
        Status::InPosition => tile.black().on_green().bold(),
        Status::InWord => tile.black().on_yellow().bold(),
        Status::NotInWord => tile.white().on_bright_black(),
        Status::NotGuessed => tile.normal(),
    }
}

/// The grid, one line per row
#[must_use]
pub fn grid_lines(grid: &Grid) -> Vec<String> {
    grid.iter_rows()
        .map(|row| row.iter().map(|letter| colored_tile(letter).to_string()).collect())
        .collect()
}

/// The alphabet laid out as a keyboard, one line per keyboard row
#[must_use]
pub fn keyboard_lines(alphabet: &Alphabet) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .filter_map(|c| Alphabet::index_of(c).ok())
                .map(|i| colored_tile(&alphabet.letters()[i]).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Spoiler-free summary of a game, e.g. "Wolfle 3/6" followed by emoji rows
///
/// Only rows that hold a guess are included. A lost game shows `X/6`.
#[must_use]
pub fn share_text(game: &GameEngine<'_>) -> String {
    let used: Vec<&[Letter]> = game
        .grid()
        .iter_rows()
        .filter(|row| !row.iter().all(Letter::is_placeholder))
        .collect();

    let score = if game.is_won() {
        used.len().to_string()
    } else {
        "X".to_string()
    };

    let mut text = format!("Wolfle {score}/{}", game.rows());
    for row in used {
        text.push('\n');
        text.extend(row.iter().map(|letter| letter.status().emoji()));
    }
    text
}
