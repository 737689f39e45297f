//! Tutorial tables
//!
//! The tutorial splits the digits 0-9 into 4 groups and keeps, per group, the number
//! of secret digits it holds under each of 3 hypotheses (columns).

use crate::core::Number;

/// Number of digit groups (rows)
pub const GROUPS: usize = 4;

/// Number of count hypotheses (columns)
pub const COLUMNS: usize = 3;

/// Fixed 4x3 tutorial grid
pub type Grid<T> = [[T; COLUMNS]; GROUPS];

/// The four tutorial grids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialState {
    /// Group assignment of the 10 digits, built from the first guess
    pub digits_table: Grid<Option<u8>>,
    /// Row `r`, column `j`: secret digits from group `r` under hypothesis `j`
    pub clues_table: Grid<Option<i16>>,
    pub crossed_out: Grid<bool>,
    pub highlighted: Grid<bool>,
}

/// Per-game bookkeeping carried between turns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialData {
    /// `exact + partial` for turns 1, 2 and 3
    pub sum_of_centered_displaced: [Option<u8>; 3],
    /// Number of hypothesis columns eliminated on turns 1 and 2
    pub cross_outs: u8,
}

impl TutorialData {
    /// Recorded sum for a 1-based turn
    #[must_use]
    pub fn sum_for(&self, turn: usize) -> Option<u8> {
        turn.checked_sub(1)
            .and_then(|index| self.sum_of_centered_displaced.get(index))
            .copied()
            .flatten()
    }
}

/// Build the digit groups from the first guess
///
/// - group 0: guess positions 0-2
/// - group 1: guess positions 3-4
/// - group 2: the two smallest digits not guessed
/// - group 3: the remaining three digits not guessed
///
/// # Examples
/// ```
/// use guess_the_number::core::Number;
/// use guess_the_number::tutorial::initialize;
///
/// let table = initialize(&Number::parse("12345").unwrap());
/// assert_eq!(table[2], [Some(0), Some(6), None]);
/// assert_eq!(table[3], [Some(7), Some(8), Some(9)]);
/// ```
#[must_use]
pub fn initialize(first_guess: &Number) -> Grid<Option<u8>> {
    let digit = |position| Some(first_guess.digit_at(position));
    let remaining: Vec<u8> = (0..=9).filter(|&d| !first_guess.contains(d)).collect();

    [
        [digit(0), digit(1), digit(2)],
        [digit(3), digit(4), None],
        [Some(remaining[0]), Some(remaining[1]), None],
        [Some(remaining[2]), Some(remaining[3]), Some(remaining[4])],
    ]
}

impl TutorialState {
    /// Empty tables with the digit groups taken from `first_guess`
    #[must_use]
    pub fn with_digits(first_guess: &Number) -> Self {
        Self {
            digits_table: initialize(first_guess),
            ..Self::default()
        }
    }

    /// Check if any hypothesis has been filled in for `column`
    #[must_use]
    pub fn is_column_blank(&self, column: usize) -> bool {
        self.clues_table[0][column].is_none() && self.clues_table[1][column].is_none()
    }

    #[must_use]
    pub fn is_column_crossed_out(&self, column: usize) -> bool {
        self.crossed_out.iter().all(|row| row[column])
    }

    #[must_use]
    pub fn is_column_highlighted(&self, column: usize) -> bool {
        self.highlighted.iter().all(|row| row[column])
    }

    /// The single column left standing, if the clues have narrowed it to one
    ///
    /// A column counts when it is highlighted and not crossed out.
    #[must_use]
    pub fn resolved_column(&self) -> Option<usize> {
        let mut survivors = (0..COLUMNS)
            .filter(|&column| self.is_column_highlighted(column))
            .filter(|&column| !self.is_column_crossed_out(column));

        match (survivors.next(), survivors.next()) {
            (Some(column), None) => Some(column),
            _ => None,
        }
    }

    /// Per-group digit counts for `column`, once all four rows are known
    #[must_use]
    pub fn group_counts(&self, column: usize) -> Option<[i16; GROUPS]> {
        let mut counts = [0; GROUPS];
        for (count, row) in counts.iter_mut().zip(&self.clues_table) {
            *count = row[column]?;
        }
        Some(counts)
    }

    /// The group (row) holding `digit`, once the digits table is built
    #[must_use]
    pub fn group_of(&self, digit: u8) -> Option<usize> {
        self.digits_table
            .iter()
            .position(|row| row.contains(&Some(digit)))
    }

    /// Digits belonging to a group, in table order
    #[must_use]
    pub fn group_digits(&self, group: usize) -> Vec<u8> {
        self.digits_table[group].iter().flatten().copied().collect()
    }
}
