//! Core domain types for Guess the Number
//!
//! Pure scoring and validation logic. Nothing here holds state between calls.

mod clue;
mod number;
mod secret;

pub use clue::Clue;
pub use number::{DIGIT_COUNT, Number, ValidationError, validate};
pub use secret::generate_secret;
