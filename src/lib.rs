//! Wolfle
//!
//! A word-guessing game engine: guess a hidden five-letter word in six tries,
//! with per-letter feedback on the board and a running keyboard summary.
//!
//! # Quick Start
//!
//! ```rust
//! use wolfle::core::Status;
//! use wolfle::game::GameEngine;
//! use wolfle::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::new(["crane", "slate", "react"], ["crane"]).unwrap();
//! let mut game = GameEngine::new(&dictionary, "CRANE").unwrap();
//!
//! assert!(game.process_guess("REACT", 0).unwrap());
//! assert_eq!(game.grid_letter_status(0, 2).unwrap(), Status::InPosition);
//! assert!(!game.is_over());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game rules and state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod telemetry;

pub use error::{GameError, Result};
