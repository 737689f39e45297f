//! Game session driver
//!
//! Explicit session objects replace a process-wide game record: callers own a
//! `Session` and pass it wherever a guess is submitted.

mod driver;
mod game;

pub use driver::Session;
pub use game::{Game, GameConfig, GameError, GameStatus, GuessOutcome, GuessRecord};
