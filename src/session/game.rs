//! Single game record
//!
//! Holds the secret, the remaining turns and the guess history of one game.

use crate::core::{Clue, Number, ValidationError, generate_secret};
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed per game
    pub max_turns: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_turns: 10 }
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Number,
    pub exact_matches: u8,
    pub partial_matches: u8,
}

/// Result of submitting a guess
///
/// `turns_remaining` is set while the game continues, `turns_taken` only on a win,
/// and `target` once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub exact_matches: u8,
    pub partial_matches: u8,
    pub game_over: bool,
    pub won: bool,
    pub turns_remaining: Option<u8>,
    pub turns_taken: Option<usize>,
    pub target: Option<Number>,
}

impl GuessOutcome {
    #[must_use]
    pub const fn clue(&self) -> Clue {
        Clue::new(self.exact_matches, self.partial_matches)
    }
}

/// Snapshot of the game for status queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatus {
    pub is_active: bool,
    pub turns_remaining: u8,
    pub history: Vec<GuessRecord>,
}

/// Error type for guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    NoActiveGame,
    Invalid(ValidationError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No active game. Start a new game first."),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoActiveGame => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// A game of Guess the Number
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    target: Option<Number>,
    is_active: bool,
    turns_remaining: u8,
    history: Vec<GuessRecord>,
}

impl Game {
    /// Create an inactive game; call `start` to draw a secret
    #[must_use]
    pub const fn new(config: GameConfig) -> Self {
        Self {
            config,
            target: None,
            is_active: false,
            turns_remaining: config.max_turns,
            history: Vec::new(),
        }
    }

    /// Start a new game with a random secret
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.start_with_secret(generate_secret(rng));
    }

    /// Start a new game with a known secret
    pub fn start_with_secret(&mut self, secret: Number) {
        self.target = Some(secret);
        self.is_active = true;
        self.turns_remaining = self.config.max_turns;
        self.history.clear();
        info!(turns = self.turns_remaining, "new game started");
    }

    /// Parse and submit a guess
    ///
    /// # Errors
    /// Returns `GameError::NoActiveGame` if no game is running, or
    /// `GameError::Invalid` if the text is not a valid guess. Neither uses a turn.
    pub fn submit(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        if !self.is_active {
            return Err(GameError::NoActiveGame);
        }
        let guess = Number::parse(guess)?;
        self.submit_number(guess)
    }

    /// Submit an already validated guess
    ///
    /// # Errors
    /// Returns `GameError::NoActiveGame` if no game is running.
    pub fn submit_number(&mut self, guess: Number) -> Result<GuessOutcome, GameError> {
        let target = match (&self.target, self.is_active) {
            (Some(target), true) => target.clone(),
            _ => return Err(GameError::NoActiveGame),
        };

        let clue = Clue::calculate(&guess, &target);
        self.turns_remaining = self.turns_remaining.saturating_sub(1);
        debug!(
            %guess,
            exact = clue.exact_matches(),
            partial = clue.partial_matches(),
            turns_remaining = self.turns_remaining,
            "guess scored"
        );
        self.history.push(GuessRecord {
            guess,
            exact_matches: clue.exact_matches(),
            partial_matches: clue.partial_matches(),
        });

        let mut outcome = GuessOutcome {
            exact_matches: clue.exact_matches(),
            partial_matches: clue.partial_matches(),
            game_over: false,
            won: false,
            turns_remaining: None,
            turns_taken: None,
            target: None,
        };

        if clue.is_solved() {
            self.is_active = false;
            outcome.game_over = true;
            outcome.won = true;
            outcome.turns_taken = Some(self.history.len());
            outcome.target = Some(target);
            info!(turns_taken = self.history.len(), "game won");
        } else if self.turns_remaining == 0 {
            self.is_active = false;
            outcome.game_over = true;
            outcome.target = Some(target);
            info!(secret = %self.target_text(), "game lost");
        } else {
            outcome.turns_remaining = Some(self.turns_remaining);
        }

        Ok(outcome)
    }

    /// Current state for display
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus {
            is_active: self.is_active,
            turns_remaining: self.turns_remaining,
            history: self.history.clone(),
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub const fn turns_remaining(&self) -> u8 {
        self.turns_remaining
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The secret, but only once the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Number> {
        if self.is_active {
            None
        } else {
            self.target.as_ref()
        }
    }

    fn target_text(&self) -> String {
        self.target
            .as_ref()
            .map_or_else(String::new, ToString::to_string)
    }
}
