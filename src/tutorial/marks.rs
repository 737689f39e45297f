//! Manual cell annotations
//!
//! Players can tag tutorial digit cells ("in" / "out" of the secret) and the digits
//! of past guesses ("not in", "in", "position guessed"). Marks are plain fixed-size
//! grids addressed by `(row, column)`.

use super::state::{COLUMNS, GROUPS};
use crate::core::DIGIT_COUNT;
use std::fmt;

/// Rows on the guess board (one per turn)
pub const BOARD_ROWS: usize = 10;

/// Mark on a tutorial digit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialMark {
    In,
    Out,
}

/// Mark on a digit of a past guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMark {
    NotIn,
    In,
    Position,
}

/// Set a mark, or clear it with `Undo`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction<M> {
    Set(M),
    Undo,
}

/// Error type for mark commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkError {
    OutOfRange { row: usize, column: usize },
    Parse(String),
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { row, column } => {
                write!(f, "No cell at row {}, column {}", row + 1, column + 1)
            }
            Self::Parse(reason) => write!(f, "Invalid mark command: {reason}"),
        }
    }
}

impl std::error::Error for MarkError {}

/// Fixed `R` x `C` grid of optional marks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkGrid<M, const R: usize, const C: usize> {
    cells: [[Option<M>; C]; R],
}

impl<M: Copy, const R: usize, const C: usize> Default for MarkGrid<M, R, C> {
    fn default() -> Self {
        Self {
            cells: [[None; C]; R],
        }
    }
}

impl<M: Copy, const R: usize, const C: usize> MarkGrid<M, R, C> {
    /// Mark at a cell, `None` if unmarked or out of range
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<M> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    /// Set or clear the mark at a cell
    ///
    /// # Errors
    /// Returns `MarkError::OutOfRange` if the cell does not exist.
    pub fn apply(
        &mut self,
        row: usize,
        column: usize,
        action: MarkAction<M>,
    ) -> Result<(), MarkError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(MarkError::OutOfRange { row, column })?;

        *cell = match action {
            MarkAction::Set(mark) => Some(mark),
            MarkAction::Undo => None,
        };
        Ok(())
    }

    /// Remove every mark
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of marked cells
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

pub type TutorialMarks = MarkGrid<TutorialMark, GROUPS, COLUMNS>;
pub type BoardMarks = MarkGrid<BoardMark, BOARD_ROWS, DIGIT_COUNT>;

/// A parsed mark command
///
/// Text form, with 1-based row and column:
/// - `t <row> <col> in|out|undo` for tutorial digit cells
/// - `g <row> <col> not-in|in|pos|undo` for guess board digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkCommand {
    Tutorial {
        row: usize,
        column: usize,
        action: MarkAction<TutorialMark>,
    },
    Board {
        row: usize,
        column: usize,
        action: MarkAction<BoardMark>,
    },
}

impl MarkCommand {
    /// Parse a command such as `t 1 3 out` or `g 2 5 pos`
    ///
    /// # Errors
    /// Returns `MarkError::Parse` describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use guess_the_number::tutorial::{MarkAction, MarkCommand, TutorialMark};
    ///
    /// let command = MarkCommand::parse("t 1 3 out").unwrap();
    /// assert_eq!(
    ///     command,
    ///     MarkCommand::Tutorial { row: 0, column: 2, action: MarkAction::Set(TutorialMark::Out) }
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self, MarkError> {
        let parts: Vec<&str> = text.split_whitespace().collect();
        let [target, row, column, action] = parts.as_slice() else {
            return Err(MarkError::Parse(format!(
                "expected '<t|g> <row> <col> <mark>', got '{}'",
                text.trim()
            )));
        };

        let row = parse_coordinate(row)?;
        let column = parse_coordinate(column)?;
        let action = action.to_lowercase();

        match target.to_lowercase().as_str() {
            "t" | "tutorial" => {
                let action = match action.as_str() {
                    "in" => MarkAction::Set(TutorialMark::In),
                    "out" => MarkAction::Set(TutorialMark::Out),
                    "undo" => MarkAction::Undo,
                    other => {
                        return Err(MarkError::Parse(format!(
                            "unknown tutorial mark '{other}' (use in, out or undo)"
                        )));
                    }
                };
                Ok(Self::Tutorial {
                    row,
                    column,
                    action,
                })
            }
            "g" | "guess" => {
                let action = match action.as_str() {
                    "not-in" | "notin" | "x" => MarkAction::Set(BoardMark::NotIn),
                    "in" => MarkAction::Set(BoardMark::In),
                    "pos" | "position" => MarkAction::Set(BoardMark::Position),
                    "undo" => MarkAction::Undo,
                    other => {
                        return Err(MarkError::Parse(format!(
                            "unknown guess mark '{other}' (use not-in, in, pos or undo)"
                        )));
                    }
                };
                Ok(Self::Board {
                    row,
                    column,
                    action,
                })
            }
            other => Err(MarkError::Parse(format!(
                "unknown target '{other}' (use t or g)"
            ))),
        }
    }
}

fn parse_coordinate(text: &str) -> Result<usize, MarkError> {
    match text.parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value - 1),
        _ => Err(MarkError::Parse(format!(
            "'{text}' is not a 1-based position"
        ))),
    }
}
