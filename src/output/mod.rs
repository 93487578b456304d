//! Terminal output formatting
//!
//! Display utilities for the plain-text game mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_statistics};
