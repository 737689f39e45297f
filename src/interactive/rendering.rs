//! TUI rendering with ratatui
//!
//! Board, tutorial tables and status for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{clue_cell, digit_cell, tutorial_mark_tag};
use crate::tutorial::{BoardMark, COLUMNS, GROUPS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Guess board
            Constraint::Percentage(50), // Tutorial and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 GUESS THE NUMBER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board_marks = app.session.board_marks();
    let items: Vec<ListItem> = app
        .session
        .game()
        .history()
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}: ", row + 1),
                Style::default().fg(Color::DarkGray),
            )];

            for (column, digit) in record.guess.digits().iter().enumerate() {
                let style = match board_marks.get(row, column) {
                    Some(BoardMark::NotIn) => Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                    Some(BoardMark::Position) => Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    Some(BoardMark::In) => Style::default().fg(Color::Yellow),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(format!("{digit} "), style));
            }

            spans.push(Span::raw(format!(
                "  🎯 {}  🤏 {}",
                record.exact_matches, record.partial_matches
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let board = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.show_tutorial {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(GROUPS as u16 + 5), // Tutorial tables
                Constraint::Length(3),                 // Turns gauge
                Constraint::Min(3),                    // Messages
            ])
            .split(area);

        render_tutorial(f, app, chunks[0]);
        render_turns(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        render_turns(f, app, chunks[0]);
        render_messages(f, app, chunks[1]);
    }
}

fn render_tutorial(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.tutorial();
    let data = app.session.tutorial_data();
    let marks = app.session.tutorial_marks();

    let mut lines = vec![Line::from(Span::styled(
        "Digits        Clues",
        Style::default().fg(Color::DarkGray),
    ))];

    for group in 0..GROUPS {
        let mut spans = Vec::new();
        for column in 0..COLUMNS {
            spans.push(Span::raw(format!(
                "{}{} ",
                digit_cell(state.digits_table[group][column]),
                tutorial_mark_tag(marks.get(group, column))
            )));
        }
        spans.push(Span::raw("    "));

        for column in 0..COLUMNS {
            let style = if state.crossed_out[group][column] {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if state.highlighted[group][column] {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(
                format!("{:>3}", clue_cell(state.clues_table[group][column])),
                style,
            ));
        }
        lines.push(Line::from(spans));
    }

    let sums: Vec<String> = (1..=3)
        .map(|turn| {
            data.sum_for(turn)
                .map_or_else(|| "-".to_string(), |s| s.to_string())
        })
        .collect();
    lines.push(Line::from(format!(
        "Sums: {} | Cross-outs: {}",
        sums.join("/"),
        data.cross_outs
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Tutorial ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let max_turns = game.config().max_turns.max(1);
    let used = max_turns.saturating_sub(game.turns_remaining());
    let percent = (u16::from(used) * 100 / u16::from(max_turns)).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max_turns}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess (5 unique digits) | ':' to mark ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Marking => (
            " Mark Command | Enter to apply, ESC to cancel ",
            app.mark_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Guessing",
        InputMode::Marking => "Mode: Marking",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let turns_text = format!(
        "Turns left: {}",
        app.session.game().turns_remaining()
    );
    let turns = Paragraph::new(turns_text).alignment(Alignment::Center);
    f.render_widget(turns, chunks[2]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | n: New | h: Hint | t: Tutorial"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
