//! Guess the Number
//!
//! A 5-digit Mastermind-style deduction game: every guess is scored with exact and
//! partial match counts, and a digit-grouping tutorial narrows down how many secret
//! digits each group of digits holds over the first three turns.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_the_number::core::{Clue, Number};
//!
//! let guess = Number::parse("12345").unwrap();
//! let secret = Number::parse("70962").unwrap();
//!
//! let clue = Clue::calculate(&guess, &secret);
//! assert_eq!((clue.exact_matches(), clue.partial_matches()), (0, 1));
//! ```

// Core domain types
pub mod core;

// Digit-grouping tutorial
pub mod tutorial;

// Game sessions
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
