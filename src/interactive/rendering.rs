//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterScore, MAX_ATTEMPTS, WORD_LENGTH};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                    // Keyboard
            Constraint::Min(4),                       // Messages
            Constraint::Length(3),                    // Input
            Constraint::Length(3),                    // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_input(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn score_style(score: LetterScore) -> Style {
    match score {
        LetterScore::Exact => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterScore::Partial => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterScore::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🔗 WORDLE LINK — game {}", app.session.id()))
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
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_ATTEMPTS);

    for attempt in app.session.attempts() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, &score) in attempt.guess.chars().zip(attempt.feedback.scores()) {
            spans.push(Span::styled(format!(" {letter} "), score_style(score)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    // The row being typed, then the remaining blanks
    let typed = !app.session.is_over();
    if typed {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let cell = app
                .input_buffer
                .chars()
                .nth(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(
                cell,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let filled = lines.len();
    for _ in filled..MAX_ATTEMPTS {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| match keyboard.get(letter) {
                    Some(score) => Span::styled(format!(" {letter} "), score_style(score)),
                    None => Span::raw(format!(" {letter} ")),
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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
        InputMode::Finished => (
            " Game over | Press 'q' to leave ",
            String::new(),
            Color::Green,
        ),
        InputMode::Checking => (
            " Checking word... ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
        InputMode::Typing => (
            " Type your guess | Enter to submit ",
            app.input_buffer.clone(),
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
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let attempts = Paragraph::new(format!("Attempts: {}", app.attempts_used()))
        .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let phase_text = match app.input_mode {
        InputMode::Finished => "Finished",
        InputMode::Checking => "Checking...",
        InputMode::Typing => "Your turn",
    };
    let phase = Paragraph::new(phase_text).alignment(Alignment::Center);
    f.render_widget(phase, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Backspace: Erase | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
