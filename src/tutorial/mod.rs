//! Digit-grouping tutorial
//!
//! Tracks which per-group digit counts remain possible over the first three turns,
//! plus the player's own cell annotations.

mod engine;
pub mod marks;
mod state;
pub mod strategy;

pub use engine::{TutorialTurn, apply_turn};
pub use marks::{
    BOARD_ROWS, BoardMark, BoardMarks, MarkAction, MarkCommand, MarkError, MarkGrid, TutorialMark,
    TutorialMarks,
};
pub use state::{COLUMNS, GROUPS, Grid, TutorialData, TutorialState, initialize};
