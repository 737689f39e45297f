//! Session: a game plus its tutorial and annotations
//!
//! The session is the explicit owner of everything a player sees for one game, so a
//! reset clears guesses, tutorial tables and marks together.

use super::game::{Game, GameConfig, GameError, GuessOutcome, GuessRecord};
use crate::core::Number;
use crate::tutorial::{
    BOARD_ROWS, BoardMark, BoardMarks, MarkAction, MarkCommand, MarkError, TutorialData,
    TutorialMark, TutorialMarks, TutorialState, apply_turn,
};
use rand::Rng;
use tracing::debug;

/// A player's session
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    tutorial: TutorialState,
    tutorial_data: TutorialData,
    tutorial_marks: TutorialMarks,
    board_marks: BoardMarks,
}

impl Session {
    /// Create a session with no game running
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
            tutorial: TutorialState::default(),
            tutorial_data: TutorialData::default(),
            tutorial_marks: TutorialMarks::default(),
            board_marks: BoardMarks::default(),
        }
    }

    /// Start a new game with a random secret, clearing everything from the last one
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset_tutorial();
        self.game.start(rng);
    }

    /// Start a new game with a known secret
    pub fn new_game_with_secret(&mut self, secret: Number) {
        self.reset_tutorial();
        self.game.start_with_secret(secret);
    }

    /// Submit a guess and feed its clue to the tutorial
    ///
    /// # Errors
    /// Returns `GameError` if no game is running or the guess is invalid; the
    /// tutorial is left untouched in that case.
    pub fn submit(&mut self, guess: &str) -> Result<GuessOutcome, GameError> {
        let outcome = self.game.submit(guess)?;

        let turn = self.game.history().len();
        if let Some(record) = self.game.history().last() {
            let record = record.clone();
            self.update_tutorial(&record, turn);
        }

        Ok(outcome)
    }

    fn update_tutorial(&mut self, record: &GuessRecord, turn: usize) {
        let state = if turn == 1 {
            TutorialState::with_digits(&record.guess)
        } else {
            self.tutorial.clone()
        };

        let (state, data) = apply_turn(
            turn,
            record.exact_matches,
            record.partial_matches,
            &state,
            &self.tutorial_data,
        );
        self.tutorial = state;
        self.tutorial_data = data;
        debug!(
            turn,
            cross_outs = self.tutorial_data.cross_outs,
            "tutorial updated"
        );
    }

    /// Apply a manual mark
    ///
    /// Marking a tutorial digit as out also marks every occurrence of that digit on the
    /// guess board as not in the number.
    ///
    /// # Errors
    /// Returns `MarkError::OutOfRange` for cells outside the grids.
    pub fn apply_mark(&mut self, command: MarkCommand) -> Result<(), MarkError> {
        match command {
            MarkCommand::Tutorial {
                row,
                column,
                action,
            } => {
                self.tutorial_marks.apply(row, column, action)?;
                if action == MarkAction::Set(TutorialMark::Out) {
                    let digit = self.tutorial.digits_table[row][column];
                    if let Some(digit) = digit {
                        self.mark_digit_not_in(digit)?;
                    }
                }
                Ok(())
            }
            MarkCommand::Board {
                row,
                column,
                action,
            } => self.board_marks.apply(row, column, action),
        }
    }

    fn mark_digit_not_in(&mut self, digit: u8) -> Result<(), MarkError> {
        // The board only has room for the first BOARD_ROWS guesses
        for (row, record) in self.game.history().iter().take(BOARD_ROWS).enumerate() {
            if let Some(column) = record.guess.position_of(digit) {
                self.board_marks
                    .apply(row, column, MarkAction::Set(BoardMark::NotIn))?;
            }
        }
        Ok(())
    }

    fn reset_tutorial(&mut self) {
        self.tutorial = TutorialState::default();
        self.tutorial_data = TutorialData::default();
        self.tutorial_marks.clear();
        self.board_marks.clear();
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn tutorial(&self) -> &TutorialState {
        &self.tutorial
    }

    #[must_use]
    pub const fn tutorial_data(&self) -> &TutorialData {
        &self.tutorial_data
    }

    #[must_use]
    pub const fn tutorial_marks(&self) -> &TutorialMarks {
        &self.tutorial_marks
    }

    #[must_use]
    pub const fn board_marks(&self) -> &BoardMarks {
        &self.board_marks
    }

    /// 1-based number of the next guess
    #[must_use]
    pub fn next_turn(&self) -> usize {
        self.game.history().len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: &str) -> Session {
        let mut session = Session::new(GameConfig::default());
        session.new_game_with_secret(Number::parse(secret).unwrap());
        session
    }

    #[test]
    fn first_guess_builds_digits_table() {
        let mut session = session("70962");
        session.submit("12345").unwrap();

        assert_eq!(
            session.tutorial().digits_table[3],
            [Some(7), Some(8), Some(9)]
        );
        assert_eq!(session.tutorial_data().sum_for(1), Some(1));
        assert_eq!(session.next_turn(), 2);
    }

    #[test]
    fn tutorial_follows_three_strategy_turns() {
        let mut session = session("70962");
        for guess in ["12345", "31206", "45068"] {
            session.submit(guess).unwrap();
        }
        let column = session.tutorial().resolved_column().unwrap();
        assert_eq!(session.tutorial().group_counts(column), Some([1, 0, 2, 2]));

        // Later turns leave the tables alone
        let before = session.tutorial().clone();
        session.submit("79062").unwrap();
        assert_eq!(session.tutorial(), &before);
    }

    #[test]
    fn invalid_guess_leaves_tutorial_alone() {
        let mut session = session("70962");
        assert!(session.submit("1234").is_err());
        assert_eq!(session.tutorial(), &TutorialState::default());
        assert_eq!(session.next_turn(), 1);
    }

    #[test]
    fn marking_tutorial_digit_out_marks_board() {
        let mut session = session("70962");
        session.submit("12345").unwrap();
        session.submit("31206").unwrap();

        // Row 0, column 1 of the digits table holds 2
        session
            .apply_mark(MarkCommand::parse("t 1 2 out").unwrap())
            .unwrap();

        assert_eq!(session.tutorial_marks().get(0, 1), Some(TutorialMark::Out));
        assert_eq!(session.board_marks().get(0, 1), Some(BoardMark::NotIn));
        assert_eq!(session.board_marks().get(1, 2), Some(BoardMark::NotIn));
        assert_eq!(session.board_marks().count(), 2);
    }

    #[test]
    fn marking_out_covers_every_board_row() {
        let mut session = session("98765");
        let guesses = [
            "12345", "21345", "31245", "41235", "51234", "13245", "14235", "15234", "12435",
            "12534",
        ];
        for guess in guesses {
            session.submit(guess).unwrap();
        }
        assert_eq!(session.game().history().len(), BOARD_ROWS);

        // Row 0, column 0 of the digits table holds 1
        session
            .apply_mark(MarkCommand::parse("t 1 1 out").unwrap())
            .unwrap();
        assert_eq!(session.board_marks().count(), BOARD_ROWS);
        assert_eq!(session.board_marks().get(9, 0), Some(BoardMark::NotIn));
    }

    #[test]
    fn marking_empty_tutorial_cell_skips_board() {
        let mut session = session("70962");
        session.submit("12345").unwrap();
        session
            .apply_mark(MarkCommand::parse("t 2 3 out").unwrap())
            .unwrap();
        assert_eq!(session.board_marks().count(), 0);
    }

    #[test]
    fn marking_in_does_not_touch_board() {
        let mut session = session("70962");
        session.submit("12345").unwrap();
        session
            .apply_mark(MarkCommand::parse("t 1 1 in").unwrap())
            .unwrap();
        assert_eq!(session.tutorial_marks().get(0, 0), Some(TutorialMark::In));
        assert_eq!(session.board_marks().count(), 0);
    }

    #[test]
    fn board_marks_out_of_range() {
        let mut session = session("70962");
        assert_eq!(
            session.apply_mark(MarkCommand::Board {
                row: 0,
                column: 5,
                action: MarkAction::Set(BoardMark::In),
            }),
            Err(MarkError::OutOfRange { row: 0, column: 5 })
        );
    }

    #[test]
    fn new_game_clears_everything() {
        let mut session = session("70962");
        session.submit("12345").unwrap();
        session
            .apply_mark(MarkCommand::parse("t 1 1 out").unwrap())
            .unwrap();
        session
            .apply_mark(MarkCommand::parse("g 1 5 pos").unwrap())
            .unwrap();

        session.new_game_with_secret(Number::parse("13579").unwrap());

        assert!(session.game().history().is_empty());
        assert_eq!(session.tutorial(), &TutorialState::default());
        assert_eq!(session.tutorial_data(), &TutorialData::default());
        assert_eq!(session.tutorial_marks().count(), 0);
        assert_eq!(session.board_marks().count(), 0);
        assert_eq!(session.game().turns_remaining(), 10);
    }
}
