//! Score command
//!
//! Scores a single guess against a known secret.

use crate::core::{Clue, Number, ValidationError};
use crate::tutorial::{GROUPS, TutorialState};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Number,
    pub secret: Number,
    pub clue: Clue,
    /// Secret digits per tutorial group, as if `guess` were the first guess
    pub group_counts: [usize; GROUPS],
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error naming which input is invalid.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let guess = Number::parse(guess).map_err(|e| describe("guess", e))?;
    let secret = Number::parse(secret).map_err(|e| describe("secret", e))?;

    let clue = Clue::calculate(&guess, &secret);
    let groups = TutorialState::with_digits(&guess);

    let mut group_counts = [0; GROUPS];
    for &digit in secret.digits() {
        if let Some(group) = groups.group_of(digit) {
            group_counts[group] += 1;
        }
    }

    Ok(ScoreResult {
        guess,
        secret,
        clue,
        group_counts,
    })
}

fn describe(what: &str, err: ValidationError) -> String {
    format!("Invalid {what}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reports_clue_and_groups() {
        let result = score_guess("12345", "70962").unwrap();
        assert_eq!(result.clue, Clue::new(0, 1));
        assert_eq!(result.group_counts, [1, 0, 2, 2]);
        assert_eq!(result.group_counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn score_exact_guess() {
        let result = score_guess("70962", "70962").unwrap();
        assert!(result.clue.is_solved());
    }

    #[test]
    fn score_rejects_invalid_inputs() {
        let err = score_guess("1234", "70962").err().unwrap();
        assert!(err.starts_with("Invalid guess"));

        let err = score_guess("12345", "07962").err().unwrap();
        assert!(err.starts_with("Invalid secret"));
    }
}
