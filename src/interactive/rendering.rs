//! TUI rendering with ratatui
//!
//! Draws the board, palette, and session panels. Everything is derived from
//! the engine's queries; the goal panel only reads `goal()` once the game is
//! over.

use super::app::{App, MessageStyle};
use crate::core::Color as Peg;
use crate::engine::GameStatus;
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
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panels
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Messages
    render_messages(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 MASTERMIND - Break the Code")
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
    let game = &app.game;
    let active_row = game.attempts_committed();
    let in_progress = game.status() == GameStatus::InProgress;

    let mut lines = Vec::with_capacity(game.max_attempts());
    for row in 0..game.max_attempts() {
        let marker = if in_progress && row == active_row {
            Span::styled("▶ ", Style::default().fg(Color::Cyan))
        } else {
            Span::raw("  ")
        };

        let mut spans = vec![
            marker,
            Span::styled(
                format!("{:>2}  ", row + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        for slot in game.attempt(row) {
            spans.push(peg_span(slot));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::raw("  "));
        spans.extend(score_spans(app, row));

        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4 + u16::try_from(app.game.palette().len()).unwrap_or(5)),
            Constraint::Length(4), // Secret code
            Constraint::Min(5),    // Statistics
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_goal(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("Press a key to place a peg:"), Line::from("")];
    for (i, &peg) in app.game.palette().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(peg_color(peg))),
            Span::raw(format!("{:<8}", peg.name())),
            Span::styled(
                format!("[{} / {}]", peg.key(), i + 1),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Palette ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(palette, area);
}

fn render_goal(f: &mut Frame, app: &App, area: Rect) {
    // The goal stays hidden until the game is over; this is the only place
    // the UI reads it, and only behind the is_over gate.
    let game = &app.game;
    let line = if game.status().is_over() {
        let mut spans = Vec::new();
        for &peg in game.goal() {
            spans.push(peg_span(Some(peg)));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    } else {
        Line::from(Span::styled(
            "? ".repeat(game.code_length()),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let goal = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Secret Code ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(goal, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let mut lines = vec![
        Line::from(format!(
            "Games:  {} played, {} won",
            stats.total_games, stats.games_won
        )),
        Line::from(""),
    ];

    for (attempts, &count) in stats.attempt_distribution.iter().enumerate().skip(1) {
        if count > 0 {
            lines.push(Line::from(format!("  in {attempts}: {count}")));
        }
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Span::styled(&msg.text, style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let state = match game.status() {
        GameStatus::Idle => "idle",
        GameStatus::InProgress => "playing",
        GameStatus::Won => "won!",
        GameStatus::Lost => "lost",
    };

    let status = Paragraph::new(format!(
        " {} | attempt {}/{} | Enter submit | Backspace remove | n new | q quit ",
        state,
        (game.attempts_committed() + 1).min(game.max_attempts()),
        game.max_attempts()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

fn peg_span(slot: Option<Peg>) -> Span<'static> {
    match slot {
        Some(peg) => Span::styled("●", Style::default().fg(peg_color(peg))),
        None => Span::styled("·", Style::default().fg(Color::DarkGray)),
    }
}

fn score_spans(app: &App, row: usize) -> Vec<Span<'static>> {
    let score = app.game.score(row);
    let mut spans = Vec::new();
    for _ in 0..score.exact() {
        spans.push(Span::styled(
            "●",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    for _ in 0..score.color() {
        spans.push(Span::styled("○", Style::default().fg(Color::Gray)));
    }
    spans
}

const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Blue => Color::Blue,
        Peg::Green => Color::Green,
        Peg::Red => Color::Red,
        Peg::Yellow => Color::Yellow,
        Peg::Orange => Color::Rgb(255, 140, 0),
    }
}
