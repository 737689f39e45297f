//! Secret number generation

use super::{DIGIT_COUNT, Number};
use rand::Rng;
use tracing::debug;

/// Draw a random secret
///
/// Uses rejection sampling: uniform digits are drawn one at a time, rejecting a
/// leading 0 and any digit already taken, until 5 digits are collected.
///
/// # Examples
/// ```
/// use guess_the_number::core::generate_secret;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let secret = generate_secret(&mut rng);
/// assert_ne!(secret.digit_at(0), 0);
/// ```
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Number {
    let mut digits = [0u8; DIGIT_COUNT];
    let mut len = 0;

    while len < DIGIT_COUNT {
        let digit: u8 = rng.random_range(0..10);
        if len == 0 && digit == 0 {
            continue;
        }
        if digits[..len].contains(&digit) {
            continue;
        }
        digits[len] = digit;
        len += 1;
    }

    let secret = Number::from_validated(digits);
    debug!(%secret, "generated secret number");
    secret
}
