//! Turn-by-turn narrowing of the tutorial hypotheses
//!
//! Each of the first three guesses follows a prescribed strategy, so its clue sum
//! constrains how many secret digits each group holds:
//! 1. first guess = groups 0 and 1, giving the split between them
//! 2. second guess = group 0 scrambled plus group 2, fixing group 2 and then group 3
//! 3. third guess = groups 1 and 2 plus one digit of group 3, sum within one of
//!    `group1 + group2`

use super::state::{COLUMNS, TutorialData, TutorialState};
use crate::core::DIGIT_COUNT;

/// The turns the tutorial reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialTurn {
    First,
    Second,
    Third,
}

impl TutorialTurn {
    /// Map a 1-based turn number; anything outside 1-3 has no tutorial step
    #[must_use]
    pub const fn from_turn(turn: usize) -> Option<Self> {
        match turn {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// Apply the clue of `turn` to the tutorial tables
///
/// Pure: the inputs are left untouched and the updated copies are returned.
/// Turns other than 1, 2 and 3 return the inputs unchanged.
///
/// # Examples
/// ```
/// use guess_the_number::core::Number;
/// use guess_the_number::tutorial::{TutorialData, TutorialState, apply_turn};
///
/// let state = TutorialState::with_digits(&Number::parse("12345").unwrap());
/// let (state, data) = apply_turn(1, 1, 2, &state, &TutorialData::default());
///
/// // Column 2 assumes no digit from group 1, so all three come from group 0
/// assert_eq!(state.clues_table[0][2], Some(3));
/// assert_eq!(state.clues_table[1][2], Some(0));
/// assert_eq!(data.cross_outs, 0);
/// ```
#[must_use]
pub fn apply_turn(
    turn: usize,
    exact_matches: u8,
    partial_matches: u8,
    state: &TutorialState,
    data: &TutorialData,
) -> (TutorialState, TutorialData) {
    let Some(step) = TutorialTurn::from_turn(turn) else {
        return (state.clone(), data.clone());
    };

    let total = exact_matches.saturating_add(partial_matches);
    let mut next = state.clone();
    let mut next_data = data.clone();
    next_data.sum_of_centered_displaced[step.index()] = Some(total);

    let sum = i16::from(total);
    match step {
        TutorialTurn::First => first_turn(sum, &mut next, &mut next_data),
        TutorialTurn::Second => second_turn(sum, &mut next, &mut next_data),
        TutorialTurn::Third => third_turn(sum, &mut next),
    }

    (next, next_data)
}

/// Split the first sum between group 0 (row 0) and group 1 (row 1)
fn first_turn(sum: i16, state: &mut TutorialState, data: &mut TutorialData) {
    state.clues_table = Default::default();
    state.crossed_out = Default::default();
    state.highlighted = Default::default();
    data.cross_outs = 0;

    // Group 1 has two digits, so it holds at most min(sum, 2) of them
    let max_in_group_one = sum.min(2);
    for in_group_one in (0..=max_in_group_one).rev() {
        let column = (2 - in_group_one) as usize;
        state.clues_table[1][column] = Some(in_group_one);
        state.clues_table[0][column] = Some(sum - in_group_one);
    }

    // Group 0 has three digits
    if state.clues_table[0][2].is_some_and(|count| count > 3) {
        cross_out(state, data, 2);
    }
}

/// Derive groups 2 and 3 from the second sum
fn second_turn(sum: i16, state: &mut TutorialState, data: &mut TutorialData) {
    for column in 0..COLUMNS {
        let (Some(group_zero), Some(group_one)) =
            (state.clues_table[0][column], state.clues_table[1][column])
        else {
            continue;
        };

        let group_two = sum - group_zero;
        let group_three = DIGIT_COUNT as i16 - (group_zero + group_one + group_two);
        state.clues_table[2][column] = Some(group_two);
        state.clues_table[3][column] = Some(group_three);

        if !(0..=2).contains(&group_two) || group_three < 0 {
            cross_out(state, data, column);
        }
    }

    if data.cross_outs == 2 {
        let survivor = (0..COLUMNS)
            .find(|&column| !state.is_column_blank(column) && !state.is_column_crossed_out(column));
        if let Some(column) = survivor {
            highlight(state, column);
        }
    }
}

/// Check each hypothesis against the third sum
fn third_turn(sum: i16, state: &mut TutorialState) {
    for column in 0..COLUMNS {
        if state.is_column_blank(column) {
            continue;
        }

        let group_one = state.clues_table[1][column].unwrap_or(0);
        let group_two = state.clues_table[2][column].unwrap_or(0);
        let expected = group_one + group_two;

        if sum == expected || sum == expected + 1 {
            highlight(state, column);
        } else {
            // Turn 3 eliminations are not counted
            mark_crossed(state, column);
        }
    }
}

/// Cross out a whole column, counting it the first time only
fn cross_out(state: &mut TutorialState, data: &mut TutorialData, column: usize) {
    if !state.is_column_crossed_out(column) {
        data.cross_outs += 1;
    }
    mark_crossed(state, column);
}

fn mark_crossed(state: &mut TutorialState, column: usize) {
    for row in &mut state.crossed_out {
        row[column] = true;
    }
}

fn highlight(state: &mut TutorialState, column: usize) {
    for row in &mut state.highlighted {
        row[column] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Clue, Number};
    use crate::tutorial::GROUPS;

    fn start(first_guess: &str) -> TutorialState {
        TutorialState::with_digits(&Number::parse(first_guess).unwrap())
    }

    fn column(state: &TutorialState, column: usize) -> [Option<i16>; GROUPS] {
        [
            state.clues_table[0][column],
            state.clues_table[1][column],
            state.clues_table[2][column],
            state.clues_table[3][column],
        ]
    }

    /// Play the tutorial through with real scoring
    fn play(secret: &str, guesses: &[&str]) -> (TutorialState, TutorialData) {
        let secret = Number::parse(secret).unwrap();
        let mut state = start(guesses[0]);
        let mut data = TutorialData::default();
        for (i, guess) in guesses.iter().enumerate() {
            let clue = Clue::calculate(&Number::parse(guess).unwrap(), &secret);
            (state, data) = apply_turn(
                i + 1,
                clue.exact_matches(),
                clue.partial_matches(),
                &state,
                &data,
            );
        }
        (state, data)
    }

    #[test]
    fn first_turn_sum_three_fills_all_columns() {
        let (state, data) = apply_turn(1, 2, 1, &start("12345"), &TutorialData::default());

        assert_eq!(state.clues_table[0], [Some(1), Some(2), Some(3)]);
        assert_eq!(state.clues_table[1], [Some(2), Some(1), Some(0)]);
        assert_eq!(state.clues_table[2], [None; 3]);
        assert!(!state.is_column_crossed_out(2));
        assert_eq!(data.cross_outs, 0);
        assert_eq!(data.sum_for(1), Some(3));
    }

    #[test]
    fn first_turn_small_sums_leave_leading_columns_blank() {
        let (state, _) = apply_turn(1, 0, 1, &start("12345"), &TutorialData::default());
        assert!(state.is_column_blank(0));
        assert_eq!(column(&state, 1)[..2], [Some(0), Some(1)]);
        assert_eq!(column(&state, 2)[..2], [Some(1), Some(0)]);

        let (state, _) = apply_turn(1, 0, 0, &start("12345"), &TutorialData::default());
        assert!(state.is_column_blank(0));
        assert!(state.is_column_blank(1));
        assert_eq!(column(&state, 2)[..2], [Some(0), Some(0)]);

        let (state, _) = apply_turn(1, 1, 1, &start("12345"), &TutorialData::default());
        assert_eq!(state.clues_table[0], [Some(0), Some(1), Some(2)]);
        assert_eq!(state.clues_table[1], [Some(2), Some(1), Some(0)]);
    }

    #[test]
    fn first_turn_crosses_out_group_zero_overflow() {
        let (state, data) = apply_turn(1, 1, 3, &start("12345"), &TutorialData::default());
        assert_eq!(state.clues_table[0], [Some(2), Some(3), Some(4)]);
        assert!(state.is_column_crossed_out(2));
        assert!(!state.is_column_crossed_out(0));
        assert_eq!(data.cross_outs, 1);
    }

    #[test]
    fn first_turn_resets_previous_game_counters() {
        let stale = TutorialData {
            sum_of_centered_displaced: [Some(5), Some(5), Some(5)],
            cross_outs: 2,
        };
        let (_, data) = apply_turn(1, 0, 3, &start("12345"), &stale);
        assert_eq!(data.cross_outs, 0);
        assert_eq!(data.sum_for(1), Some(3));
    }

    #[test]
    fn second_turn_derives_groups_two_and_three() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 1, 1, &state, &data);

        // S2 = 2: group 2 = 2 - group 0
        assert_eq!(column(&state, 0), [Some(1), Some(2), Some(1), Some(1)]);
        assert_eq!(column(&state, 1), [Some(2), Some(1), Some(0), Some(2)]);
        assert_eq!(column(&state, 2), [Some(3), Some(0), Some(-1), Some(3)]);
        assert!(state.is_column_crossed_out(2));
        assert_eq!(data.cross_outs, 1);
        assert_eq!(state.resolved_column(), None);
    }

    #[test]
    fn second_turn_highlights_sole_survivor() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        // S2 = 4: group 2 would need 3, 2, 1 digits
        let (state, data) = apply_turn(2, 2, 2, &state, &data);

        assert!(state.is_column_crossed_out(0));
        assert!(!state.is_column_crossed_out(1));
        assert!(!state.is_column_crossed_out(2));
        assert_eq!(data.cross_outs, 1);

        let (state, data) = apply_turn(1, 0, 4, &start("12345"), &TutorialData::default());
        // Column 2 (4 in group 0) already gone; S2 = 4 rules out column 0 too
        let (state, data) = apply_turn(2, 0, 4, &state, &data);
        assert_eq!(data.cross_outs, 2);
        assert!(state.is_column_highlighted(1));
        assert_eq!(state.resolved_column(), Some(1));
        assert_eq!(state.group_counts(1), Some([3, 1, 1, 0]));
    }

    #[test]
    fn second_turn_counts_each_column_once() {
        // Column 2 is crossed on turn 1, and its group 2 goes negative on turn 2
        let (state, data) = apply_turn(1, 0, 4, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 1, 1, &state, &data);

        assert_eq!(column(&state, 2)[2], Some(-2));
        assert!(state.is_column_crossed_out(2));
        // Columns 0 (2,2,0,1) and 1 (3,1,-1,..) -> column 1 crossed
        assert!(state.is_column_crossed_out(1));
        assert!(!state.is_column_crossed_out(0));
        assert_eq!(data.cross_outs, 2);
        assert_eq!(state.resolved_column(), Some(0));
    }

    #[test]
    fn second_turn_highlights_nothing_when_only_blank_column_is_left() {
        // S1 = 1 leaves column 0 blank; S2 = 4 rules out columns 1 and 2
        let (state, data) = apply_turn(1, 0, 1, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 2, 2, &state, &data);

        assert!(state.is_column_blank(0));
        assert!(state.is_column_crossed_out(1));
        assert!(state.is_column_crossed_out(2));
        assert_eq!(data.cross_outs, 2);
        assert!((0..COLUMNS).all(|c| !state.is_column_highlighted(c)));
        assert_eq!(state.resolved_column(), None);
    }

    #[test]
    fn second_turn_skips_blank_columns() {
        let (state, data) = apply_turn(1, 0, 1, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 0, 0, &state, &data);

        assert!(state.is_column_blank(0));
        assert_eq!(state.clues_table[2][0], None);
        assert!(!state.is_column_crossed_out(0));
        // Column 1: group 0 has 0 -> group 2 = 0, group 3 = 4 fine
        assert_eq!(column(&state, 1), [Some(0), Some(1), Some(0), Some(4)]);
        // Column 2: group 0 has 1 -> group 2 = -1
        assert!(state.is_column_crossed_out(2));
        assert_eq!(data.cross_outs, 1);
    }

    #[test]
    fn third_turn_highlights_consistent_columns() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 1, 1, &state, &data);
        // group1 + group2 per column: 3, 1, -1
        let (state, data) = apply_turn(3, 1, 0, &state, &data);

        assert!(state.is_column_crossed_out(0));
        assert!(state.is_column_highlighted(1));
        assert!(state.is_column_crossed_out(2));
        assert_eq!(state.resolved_column(), Some(1));
        assert_eq!(data.sum_for(3), Some(1));
    }

    #[test]
    fn third_turn_cross_outs_leave_counter_alone() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 1, 1, &state, &data);
        assert_eq!(data.cross_outs, 1);

        // Column 0 fails the turn 3 check and is crossed without being counted
        let (state, data) = apply_turn(3, 1, 0, &state, &data);
        assert!(state.is_column_crossed_out(0));
        assert_eq!(data.cross_outs, 1);
    }

    #[test]
    fn third_turn_accepts_one_extra_digit() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        let (state, data) = apply_turn(2, 1, 1, &state, &data);
        let (state, _) = apply_turn(3, 2, 0, &state, &data);

        // 2 == 1 + 1 for column 1
        assert!(state.is_column_highlighted(1));
        assert!(state.is_column_crossed_out(0));
    }

    #[test]
    fn turns_outside_the_tutorial_change_nothing() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        for turn in [0, 4, 7, 10] {
            let (after, after_data) = apply_turn(turn, 2, 2, &state, &data);
            assert_eq!(after, state);
            assert_eq!(after_data, data);
        }
    }

    #[test]
    fn apply_turn_is_idempotent_on_same_input() {
        let (state, data) = apply_turn(1, 0, 3, &start("12345"), &TutorialData::default());
        let first = apply_turn(2, 2, 1, &state, &data);
        let second = apply_turn(2, 2, 1, &state, &data);
        assert_eq!(first, second);
    }

    #[test]
    fn apply_turn_does_not_change_inputs() {
        let initial = start("12345");
        let data = TutorialData::default();
        let _ = apply_turn(1, 2, 2, &initial, &data);
        assert_eq!(initial, start("12345"));
        assert_eq!(data, TutorialData::default());
    }

    #[test]
    fn digits_table_survives_all_turns() {
        let (state, _) = play("70962", &["12345", "31206", "45068"]);
        assert_eq!(state.digits_table, start("12345").digits_table);
    }

    #[test]
    fn strategy_game_resolves_to_true_counts() {
        // Secret 70962: groups {1,2,3}=1, {4,5}=0, {0,6}=2, {7,8,9}=2
        let (state, data) = play("70962", &["12345", "31206", "45068"]);

        let column = state.resolved_column().expect("a single column survives");
        assert_eq!(state.group_counts(column), Some([1, 0, 2, 2]));
        // Only the turn 2 elimination of column 1 is counted
        assert_eq!(data.cross_outs, 1);
        assert!(state.is_column_crossed_out(1));
    }
}
