//! Formatting utilities for terminal output

use crate::core::Clue;
use crate::tutorial::{BoardMark, TutorialMark};

/// Format a clue as target/hand symbols, e.g. `🎯 1  🤏 2`
#[must_use]
pub fn clue_symbols(clue: Clue) -> String {
    format!("🎯 {}  🤏 {}", clue.exact_matches(), clue.partial_matches())
}

/// Text for a tutorial digit cell
#[must_use]
pub fn digit_cell(digit: Option<u8>) -> String {
    digit.map_or_else(|| " ".to_string(), |d| d.to_string())
}

/// Text for a tutorial clue cell
#[must_use]
pub fn clue_cell(count: Option<i16>) -> String {
    count.map_or_else(|| " ".to_string(), |c| c.to_string())
}

/// Short tag shown next to a marked tutorial cell
#[must_use]
pub const fn tutorial_mark_tag(mark: Option<TutorialMark>) -> &'static str {
    match mark {
        Some(TutorialMark::In) => "+",
        Some(TutorialMark::Out) => "-",
        None => " ",
    }
}

/// Short tag shown next to a marked guess digit
#[must_use]
pub const fn board_mark_tag(mark: Option<BoardMark>) -> &'static str {
    match mark {
        Some(BoardMark::NotIn) => "x",
        Some(BoardMark::In) => "+",
        Some(BoardMark::Position) => "*",
        None => " ",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
