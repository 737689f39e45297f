//! Simple interactive CLI mode
//!
//! Text-based game without TUI

use crate::core::Number;
use crate::output::display::{print_history, print_tutorial};
use crate::output::formatters::clue_symbols;
use crate::session::{GameConfig, Session};
use crate::tutorial::{MarkCommand, strategy};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Guess the Number - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-digit secret: all digits differ and it never starts with 0.");
    println!("After each guess you get:\n");
    println!("  - 🎯 digits in the right position");
    println!("  - 🤏 digits in the number but elsewhere\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'hint' for a strategy guess,");
    println!("          'tutorial' to show the tutorial, 'status' for the board,");
    println!("          't <row> <col> in|out|undo' and 'g <row> <col> not-in|in|pos|undo' to mark\n");

    let mut session = Session::new(config);
    session.new_game(rng);

    loop {
        let status = session.game().status();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} turns remaining",
            session.next_turn(),
            status.turns_remaining
        );
        println!("────────────────────────────────────────────────────────────");

        let input = get_user_input("Enter guess or command")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_game(rng);
                println!("\n🔄 New game started!\n");
                continue;
            }
            "hint" | "h" => {
                print_hint(&session, rng);
                continue;
            }
            "tutorial" | "tut" => {
                print_tutorial(&session);
                continue;
            }
            "status" | "s" => {
                print_history(&session);
                continue;
            }
            _ => {}
        }

        if input.starts_with(['t', 'g', 'T', 'G']) {
            match MarkCommand::parse(&input).and_then(|command| session.apply_mark(command)) {
                Ok(()) => println!("✓ Marked\n"),
                Err(err) => println!("❌ {err}\n"),
            }
            continue;
        }

        let outcome = match session.submit(&input) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("❌ {err}\n");
                continue;
            }
        };

        println!("\n  {}\n", clue_symbols(outcome.clue()));

        if !outcome.game_over {
            continue;
        }

        let target = session
            .game()
            .revealed_target()
            .map_or_else(String::new, ToString::to_string);

        if outcome.won {
            let turns = outcome.turns_taken.unwrap_or_default();

            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "        🎉 🎊 ✨  N U M B E R   F O U N D !  ✨ 🎊 🎉        "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            let performance = match turns {
                1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
                2..=4 => ("⭐ Excellent!", "Outstanding performance!"),
                5..=6 => ("💫 Great!", "Very well played!"),
                7..=8 => ("✨ Good!", "Nice work!"),
                _ => ("👍 Solved!", "Got it!"),
            };

            println!("\n  {}", performance.0.bright_yellow().bold());
            println!("  {}", performance.1.bright_white());
            println!(
                "\n  {} found in {} {}",
                target.bright_white().bold(),
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        } else {
            println!("\n{}", "═".repeat(70).bright_red());
            println!(
                "  {} The number was {}",
                "💀 Out of turns!".bright_red().bold(),
                target.bright_white().bold()
            );
            println!("{}", "═".repeat(70).bright_red());
        }

        print_history(&session);

        match get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => {
                session.new_game(rng);
                println!("\n🔄 New game started!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn print_hint<R: Rng + ?Sized>(session: &Session, rng: &mut R) {
    let turn = session.next_turn();
    let suggestion: Option<Number> = if turn == 1 {
        None
    } else {
        strategy::next_guess(turn, session.tutorial(), rng)
    };

    match suggestion {
        Some(guess) => println!(
            "\n📊 Strategy guess for turn {turn}: {}\n",
            guess.to_string().bright_white().bold()
        ),
        None if turn == 1 => {
            println!("\n📊 Any valid number works as a first guess; it fixes the digit groups.\n");
        }
        None => println!("\n📊 The strategy only covers turns 2 and 3.\n"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
