//! Display functions for command results

use super::formatters::{
    board_mark_tag, clue_cell, clue_symbols, create_progress_bar, digit_cell, tutorial_mark_tag,
};
use crate::commands::{AuditStatistics, ScoreResult};
use crate::core::Clue;
use crate::session::Session;
use crate::tutorial::{COLUMNS, GROUPS};
use colored::{ColoredString, Colorize};

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "SCORE:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        result.secret.to_string().bright_white()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Clue:         {}", clue_symbols(result.clue));
    println!("   Sum:          {}", result.clue.total());
    if result.clue.is_solved() {
        println!("   {}", "✅ Exact match".green().bold());
    }

    println!("\n📊 {}", "Secret digits per group:".bright_cyan().bold());
    for (group, count) in result.group_counts.iter().enumerate() {
        println!(
            "   Group {group}: [{}] {count}",
            create_progress_bar(*count as f64, 3.0, 12).green()
        );
    }
}

/// Print the result of an audit run
pub fn print_audit_result(result: &AuditStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TUTORIAL AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_games.max(1) as f64;

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Resolved:         {} ({:.1}%)",
        result.resolved.to_string().bright_yellow().bold(),
        result.resolved as f64 / total * 100.0
    );
    println!(
        "   Resolved right:   {}",
        result.resolved_correctly.to_string().green()
    );
    let unsound = if result.unsound == 0 {
        result.unsound.to_string().green()
    } else {
        result.unsound.to_string().red().bold()
    };
    println!("   True column lost: {unsound}");
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Surviving columns:".bright_cyan().bold());
    for survivors in 0..=COLUMNS {
        if let Some(&count) = result.surviving_distribution.get(&survivors) {
            let pct = count as f64 / total * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {survivors}: {bar} {count:6} ({pct:5.1}%)");
        }
    }
}

/// Print the guess history with board marks
pub fn print_history(session: &Session) {
    let history = session.game().history();
    if history.is_empty() {
        println!("\n  No guesses yet.\n");
        return;
    }

    println!("\n  Guess history:");
    for (row, record) in history.iter().enumerate() {
        let digits: String = record
            .guess
            .digits()
            .iter()
            .enumerate()
            .map(|(column, digit)| {
                format!(
                    "{digit}{}",
                    board_mark_tag(session.board_marks().get(row, column))
                )
            })
            .collect();
        println!(
            "    {}. {} {}",
            (row + 1).to_string().bright_black(),
            digits.bright_white().bold(),
            clue_symbols(Clue::new(record.exact_matches, record.partial_matches))
        );
    }
    println!();
}

/// Print the tutorial digits and clue tables
pub fn print_tutorial(session: &Session) {
    let state = session.tutorial();
    let data = session.tutorial_data();

    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "TUTORIAL".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n   {:<16}{}", "Digits", "Clues");
    for group in 0..GROUPS {
        let digits: Vec<String> = (0..COLUMNS)
            .map(|column| {
                format!(
                    "{}{}",
                    digit_cell(state.digits_table[group][column]),
                    tutorial_mark_tag(session.tutorial_marks().get(group, column))
                )
            })
            .collect();

        let clues: Vec<String> = (0..COLUMNS)
            .map(|column| {
                let text = format!("{:>3}", clue_cell(state.clues_table[group][column]));
                styled_clue(
                    &text,
                    state.crossed_out[group][column],
                    state.highlighted[group][column],
                )
                .to_string()
            })
            .collect();

        println!("   {:<16}{}", digits.join(" "), clues.join(" "));
    }

    let sums: Vec<String> = (1..=3)
        .map(|turn| data.sum_for(turn).map_or_else(|| "-".to_string(), |s| s.to_string()))
        .collect();
    println!("\n   Sums:       {}", sums.join(" / "));
    println!("   Cross-outs: {}", data.cross_outs);

    if let Some(counts) = state
        .resolved_column()
        .and_then(|column| state.group_counts(column))
    {
        println!(
            "   {} {:?}",
            "Resolved group counts:".green().bold(),
            counts
        );
    }
    println!();
}

fn styled_clue(text: &str, crossed_out: bool, highlighted: bool) -> ColoredString {
    if crossed_out {
        text.bright_black().strikethrough()
    } else if highlighted {
        text.red().bold()
    } else {
        text.normal()
    }
}
