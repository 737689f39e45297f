//! Five-digit number representation
//!
//! A Number stores the 5 digits of a guess or secret along with a digit position index
//! used for partial-match lookups.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of digits in every guess and secret
pub const DIGIT_COUNT: usize = 5;

/// A 5-digit number with unique digits and a non-zero leading digit
///
/// Only constructed through validation, so every `Number` upholds the game invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    digits: [u8; DIGIT_COUNT],
    digit_positions: FxHashMap<u8, usize>,
}

/// Error type for malformed guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidLength(usize),
    LeadingZero,
    DuplicateDigit(u8),
    NotADigit(char),
    InvalidDigit(u8),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be a 5-digit number, got {len} digits")
            }
            Self::LeadingZero => write!(f, "First digit cannot be 0"),
            Self::DuplicateDigit(digit) => {
                write!(f, "All digits must be unique, {digit} is repeated")
            }
            Self::NotADigit(c) => write!(f, "Please enter only digits (0-9), got '{c}'"),
            Self::InvalidDigit(d) => write!(f, "{d} is not a single digit"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that `digits` form a well-formed guess
///
/// Checks run in a fixed order: length, leading zero, then duplicates.
///
/// # Errors
/// Returns the first `ValidationError` found.
///
/// # Examples
/// ```
/// use guess_the_number::core::{ValidationError, validate};
///
/// assert!(validate(&[1, 2, 3, 4, 5]).is_ok());
/// assert_eq!(validate(&[0, 1, 2, 3, 4]), Err(ValidationError::LeadingZero));
/// assert_eq!(validate(&[1, 2]), Err(ValidationError::InvalidLength(2)));
/// ```
pub fn validate(digits: &[u8]) -> Result<(), ValidationError> {
    if digits.len() != DIGIT_COUNT {
        return Err(ValidationError::InvalidLength(digits.len()));
    }

    if let Some(&digit) = digits.iter().find(|&&d| d > 9) {
        return Err(ValidationError::InvalidDigit(digit));
    }

    if digits[0] == 0 {
        return Err(ValidationError::LeadingZero);
    }

    let mut seen = [false; 10];
    for &digit in digits {
        if seen[usize::from(digit)] {
            return Err(ValidationError::DuplicateDigit(digit));
        }
        seen[usize::from(digit)] = true;
    }

    Ok(())
}

impl Number {
    /// Create a Number from a slice of digits
    ///
    /// # Errors
    /// Returns `ValidationError` if the digits break any of the game rules.
    pub fn new(digits: &[u8]) -> Result<Self, ValidationError> {
        validate(digits)?;

        let mut array = [0u8; DIGIT_COUNT];
        array.copy_from_slice(digits);
        Ok(Self::from_validated(array))
    }

    /// Parse a Number from text such as `"12345"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `ValidationError` if the text is not 5 unique digits with a non-zero lead.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::core::Number;
    ///
    /// let number = Number::parse("12345").unwrap();
    /// assert_eq!(number.digits(), &[1, 2, 3, 4, 5]);
    ///
    /// assert!(Number::parse("1234").is_err());
    /// assert!(Number::parse("11234").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();

        let len = text.chars().count();
        if len != DIGIT_COUNT {
            return Err(ValidationError::InvalidLength(len));
        }

        let digits = text
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(ValidationError::NotADigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::new(&digits)
    }

    /// Build a Number from digits already known to be valid
    pub(crate) fn from_validated(digits: [u8; DIGIT_COUNT]) -> Self {
        debug_assert!(validate(&digits).is_ok(), "digits must be pre-validated");

        let digit_positions = digits
            .iter()
            .enumerate()
            .map(|(i, &digit)| (digit, i))
            .collect();

        Self {
            digits,
            digit_positions,
        }
    }

    /// Get the digits in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    /// Get the digit at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the number contains a specific digit
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.digit_positions.contains_key(&digit)
    }

    /// Get the position of a digit, if present
    #[inline]
    #[must_use]
    pub fn position_of(&self, digit: u8) -> Option<usize> {
        self.digit_positions.get(&digit).copied()
    }

    /// Numeric value, e.g. `[1, 2, 3, 4, 5]` is `12345`
    #[must_use]
    pub fn value(&self) -> u32 {
        self.digits
            .iter()
            .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Number {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_creation_valid() {
        let number = Number::new(&[9, 8, 7, 0, 1]).unwrap();
        assert_eq!(number.digits(), &[9, 8, 7, 0, 1]);
        assert_eq!(number.value(), 98701);
    }

    #[test]
    fn number_parse_trims_whitespace() {
        let number = Number::parse("  40213\n").unwrap();
        assert_eq!(number.digits(), &[4, 0, 2, 1, 3]);
    }

    #[test]
    fn number_invalid_length() {
        assert_eq!(Number::parse("1234"), Err(ValidationError::InvalidLength(4)));
        assert_eq!(
            Number::parse("123456"),
            Err(ValidationError::InvalidLength(6))
        );
        assert_eq!(Number::parse(""), Err(ValidationError::InvalidLength(0)));
        assert_eq!(
            Number::new(&[1, 2, 3, 4, 5, 6]),
            Err(ValidationError::InvalidLength(6))
        );
    }

    #[test]
    fn number_leading_zero_rejected() {
        assert_eq!(Number::parse("01234"), Err(ValidationError::LeadingZero));
        assert_eq!(
            Number::new(&[0, 9, 8, 7, 6]),
            Err(ValidationError::LeadingZero)
        );
    }

    #[test]
    fn number_duplicate_digit_rejected() {
        assert_eq!(
            Number::parse("12324"),
            Err(ValidationError::DuplicateDigit(2))
        );
        assert_eq!(
            Number::parse("55555"),
            Err(ValidationError::DuplicateDigit(5))
        );
    }

    #[test]
    fn leading_zero_reported_before_duplicates() {
        // Matches the server's check order
        assert_eq!(Number::parse("00123"), Err(ValidationError::LeadingZero));
    }

    #[test]
    fn number_non_digit_rejected() {
        assert_eq!(Number::parse("12a45"), Err(ValidationError::NotADigit('a')));
        assert_eq!(Number::parse("12 45"), Err(ValidationError::NotADigit(' ')));
        assert_eq!(
            Number::new(&[1, 2, 3, 4, 12]),
            Err(ValidationError::InvalidDigit(12))
        );
    }

    #[test]
    fn validate_accepts_all_unique_non_zero_leading() {
        for first in 1..=9u8 {
            let rest: Vec<u8> = (0..=9).filter(|&d| d != first).take(4).collect();
            let digits = [first, rest[0], rest[1], rest[2], rest[3]];
            assert!(validate(&digits).is_ok(), "{digits:?} should be valid");
        }
    }

    #[test]
    fn number_contains_and_positions() {
        let number = Number::parse("52980").unwrap();
        assert!(number.contains(0));
        assert!(number.contains(9));
        assert!(!number.contains(1));
        assert_eq!(number.position_of(5), Some(0));
        assert_eq!(number.position_of(0), Some(4));
        assert_eq!(number.position_of(7), None);
        assert_eq!(number.digit_at(2), 9);
    }

    #[test]
    fn number_display() {
        let number = Number::parse("10293").unwrap();
        assert_eq!(format!("{number}"), "10293");
    }

    #[test]
    fn number_from_str_trait() {
        let number: Number = "76543".parse().unwrap();
        assert_eq!(number.value(), 76543);
    }

    #[test]
    fn validation_error_messages() {
        assert_eq!(
            ValidationError::LeadingZero.to_string(),
            "First digit cannot be 0"
        );
        assert!(
            ValidationError::InvalidLength(3)
                .to_string()
                .contains("5-digit")
        );
        assert!(
            ValidationError::DuplicateDigit(4)
                .to_string()
                .contains("unique")
        );
    }
}
