//! Guesses for the three-step grouping strategy
//!
//! The tutorial only narrows correctly when turns 2 and 3 are built from the digit
//! groups of turn 1:
//! - turn 2: the group 0 digits in a new order, plus both group 2 digits
//! - turn 3: the group 1 and group 2 digits, plus one digit drawn from group 3

use super::state::TutorialState;
use crate::core::{DIGIT_COUNT, Number};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;

/// Suggest the strategy guess for a 1-based turn
///
/// Returns `None` for turn 1 (any guess works) and after turn 3, or if the digits
/// table has not been built yet.
pub fn next_guess<R: Rng + ?Sized>(
    turn: usize,
    state: &TutorialState,
    rng: &mut R,
) -> Option<Number> {
    let mut digits = match turn {
        2 => {
            let mut group_zero = state.group_digits(0);
            scramble(&mut group_zero, rng);
            group_zero.extend(state.group_digits(2));
            group_zero
        }
        3 => {
            let mut digits = state.group_digits(1);
            digits.extend(state.group_digits(2));
            digits.push(*state.group_digits(3).choose(rng)?);
            digits
        }
        _ => return None,
    };

    if digits.len() != DIGIT_COUNT {
        return None;
    }

    // Any order keeps the clue sum; only a leading 0 needs avoiding
    while digits[0] == 0 {
        digits.shuffle(rng);
    }

    Number::new(&digits).ok()
}

/// Shuffle into a different order when one exists
fn scramble<R: Rng + ?Sized>(digits: &mut [u8], rng: &mut R) {
    if digits.len() < 2 {
        return;
    }
    let original = digits.to_vec();
    while digits[..] == original[..] {
        digits.shuffle(rng);
    }
}
