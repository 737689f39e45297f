//! TUI application state and logic

use crate::core::DIGIT_COUNT;
use crate::session::{GameConfig, Session};
use crate::tutorial::{MarkCommand, strategy};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub input_buffer: String,
    pub mark_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub show_tutorial: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Marking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses, index 1-10
    pub guess_distribution: [usize; 11],
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let mut session = Session::new(config);
        session.new_game(&mut rng);

        Self {
            session,
            rng,
            input_buffer: String::new(),
            mark_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the 5-digit number: unique digits, no leading 0."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "🎯 = right place, 🤏 = elsewhere. 'h' for a strategy guess."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            show_tutorial: true,
        }
    }

    pub fn submit_guess(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                let clue = outcome.clue();

                if outcome.won {
                    let turns = outcome.turns_taken.unwrap_or_default();
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    if let Some(slot) = self.stats.guess_distribution.get_mut(turns) {
                        *slot += 1;
                    }
                    self.input_mode = InputMode::GameOver;

                    let celebration = match turns {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2..=4 => "🔥 MAGNIFICENT! 🔥",
                        5..=6 => "✨ SPLENDID! ✨",
                        7..=8 => "👏 GREAT JOB! 👏",
                        _ => "😅 PHEW! Just made it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("Found in {turns} guesses. Press 'n' for new game or 'q' to quit."),
                        MessageStyle::Info,
                    );
                } else if outcome.game_over {
                    self.stats.total_games += 1;
                    self.input_mode = InputMode::GameOver;
                    let target = self
                        .session
                        .game()
                        .revealed_target()
                        .map_or_else(String::new, ToString::to_string);
                    self.add_message(
                        &format!("Out of turns! The number was {target}."),
                        MessageStyle::Error,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!(
                            "{input}: 🎯 {} 🤏 {} | {} turns left",
                            clue.exact_matches(),
                            clue.partial_matches(),
                            outcome.turns_remaining.unwrap_or_default()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Fill the input with the strategy guess for the next turn
    pub fn hint(&mut self) {
        let turn = self.session.next_turn();
        match strategy::next_guess(turn, self.session.tutorial(), &mut self.rng) {
            Some(guess) => {
                self.input_buffer = guess.to_string();
                self.add_message(
                    &format!("Strategy guess for turn {turn}: {guess}"),
                    MessageStyle::Success,
                );
            }
            None if turn == 1 => self.add_message(
                "Any valid number works as a first guess.",
                MessageStyle::Info,
            ),
            None => self.add_message(
                "The strategy only covers turns 2 and 3.",
                MessageStyle::Info,
            ),
        }
    }

    pub fn apply_mark(&mut self) {
        let text = std::mem::take(&mut self.mark_buffer);
        let result = MarkCommand::parse(&text).and_then(|command| self.session.apply_mark(command));
        match result {
            Ok(()) => self.add_message(&format!("Marked: {text}"), MessageStyle::Success),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.input_mode = self.resting_mode();
    }

    /// Mode to return to once a mark is entered or cancelled
    fn resting_mode(&self) -> InputMode {
        if self.session.game().is_active() {
            InputMode::Guessing
        } else {
            InputMode::GameOver
        }
    }

    fn start_marking(&mut self) {
        self.input_mode = InputMode::Marking;
        self.add_message(
            "Mark: 't row col in|out|undo' or 'g row col not-in|in|pos|undo'",
            MessageStyle::Info,
        );
    }

    pub fn new_game(&mut self) {
        if self.session.game().is_active() && !self.session.game().history().is_empty() {
            // Abandoned games count as played
            self.stats.total_games += 1;
        }
        self.session.new_game(&mut self.rng);
        self.input_buffer.clear();
        self.mark_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Enter your first guess.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('t') => self.show_tutorial = !self.show_tutorial,
                KeyCode::Char(':') => self.start_marking(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('h') => self.hint(),
                KeyCode::Char('t') => self.show_tutorial = !self.show_tutorial,
                KeyCode::Char(':') => self.start_marking(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < DIGIT_COUNT {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Marking => match key.code {
                KeyCode::Esc => {
                    self.input_mode = self.resting_mode();
                    self.mark_buffer.clear();
                    self.add_message("Cancelled mark entry", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.mark_buffer.push(c),
                KeyCode::Backspace => {
                    self.mark_buffer.pop();
                }
                KeyCode::Enter => self.apply_mark(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
