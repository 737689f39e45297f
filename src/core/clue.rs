//! Guess scoring
//!
//! A clue holds the two counts returned for every guess:
//! - exact matches (🎯): right digit in the right position
//! - partial matches (🤏): right digit in a different position

use super::{DIGIT_COUNT, Number};

/// Feedback for a single guess
///
/// Invariant: `exact_matches + partial_matches <= 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clue {
    exact_matches: u8,
    partial_matches: u8,
}

impl Clue {
    /// All five digits in place
    pub const SOLVED: Self = Self {
        exact_matches: 5,
        partial_matches: 0,
    };

    /// Create a clue from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts add up to more than 5
    #[inline]
    #[must_use]
    pub const fn new(exact_matches: u8, partial_matches: u8) -> Self {
        debug_assert!(
            exact_matches as usize + partial_matches as usize <= DIGIT_COUNT,
            "a digit cannot be both exact and partial"
        );
        Self {
            exact_matches,
            partial_matches,
        }
    }

    /// Score `guess` against `secret`
    ///
    /// Partial matches use a plain membership check. This is only correct because
    /// both numbers have unique digits, which `Number` guarantees; relaxing that would
    /// need a consume-on-match count instead.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::{Clue, Number};
    ///
    /// let guess = Number::parse("12345").unwrap();
    /// let secret = Number::parse("13579").unwrap();
    /// let clue = Clue::calculate(&guess, &secret);
    ///
    /// // 1 in place; 3 and 5 elsewhere
    /// assert_eq!(clue.exact_matches(), 1);
    /// assert_eq!(clue.partial_matches(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Number, secret: &Number) -> Self {
        let mut exact_matches = 0;
        let mut partial_matches = 0;

        for (position, &digit) in guess.digits().iter().enumerate() {
            match secret.position_of(digit) {
                Some(found) if found == position => exact_matches += 1,
                Some(_) => partial_matches += 1,
                None => {}
            }
        }

        Self {
            exact_matches,
            partial_matches,
        }
    }

    #[inline]
    #[must_use]
    pub const fn exact_matches(self) -> u8 {
        self.exact_matches
    }

    #[inline]
    #[must_use]
    pub const fn partial_matches(self) -> u8 {
        self.partial_matches
    }

    /// Number of guessed digits present in the secret at any position
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact_matches + self.partial_matches
    }

    /// Check if the guess was the secret
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact_matches as usize == DIGIT_COUNT
    }
}
