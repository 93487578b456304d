//! Core domain types for the game board
//!
//! Letter cells, the alphabet tracker and the guess grid. These types are
//! pure in-memory state with bounds-checked accessors.

mod alphabet;
mod grid;
mod letter;

pub use alphabet::Alphabet;
pub use grid::Grid;
pub use letter::{Letter, PLACEHOLDER, Status, is_valid_character};
