//! TUI rendering with ratatui
//!
//! Board, keyboard, hint panel and the end-of-game summary.

use super::app::App;
use crate::core::{GameStatus, KeyCap, TileStatus};
use crate::output::{GAME_TITLE, share_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// Terminal cell count for a board dimension, clamped to the screen coordinate range
fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let rules = app.game.rules();
    let board_height = cells(rules.max_rows).saturating_mul(TILE_HEIGHT);
    let keyboard_height = cells(app.layout.len()).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(board_height),       // Board
            Constraint::Length(1),               // Message line
            Constraint::Length(3),               // Hint
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(1),               // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_hint(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_help(f, app, chunks[5]);

    if app.game.status().is_over() {
        render_game_over(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("♥ {GAME_TITLE} ♥"))
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

/// Border and fill styles for a tile
fn tile_styles(status: TileStatus) -> (Style, Style) {
    match status {
        TileStatus::Correct => (
            Style::default().fg(Color::Green),
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        TileStatus::Present => (
            Style::default().fg(Color::Yellow),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        TileStatus::Absent => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
        TileStatus::Tbd => (
            Style::default().fg(Color::White),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        TileStatus::Empty => (Style::default().fg(Color::DarkGray), Style::default()),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.game.rules();
    let width = cells(rules.word_length)
        .saturating_mul(TILE_WIDTH + TILE_GAP)
        .saturating_sub(TILE_GAP);
    let start_x = area.x.saturating_add(area.width.saturating_sub(width) / 2);

    for row in 0..rules.max_rows {
        for col in 0..rules.word_length {
            let cell = Rect::new(
                start_x.saturating_add(cells(col).saturating_mul(TILE_WIDTH + TILE_GAP)),
                area.y.saturating_add(cells(row).saturating_mul(TILE_HEIGHT)),
                TILE_WIDTH,
                TILE_HEIGHT,
            );
            // Clip tiles that don't fit a small terminal
            if cell.right() > area.right() || cell.bottom() > area.bottom() {
                continue;
            }

            let tile = app.game.display_tile(row, col);
            let (border, fill) = tile_styles(tile.status);
            let letter = tile.letter.map(String::from).unwrap_or_default();
            let paragraph = Paragraph::new(letter)
                .alignment(Alignment::Center)
                .style(fill)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border),
                );
            f.render_widget(paragraph, cell);
        }
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let message = Paragraph::new(app.game.state().message())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(message, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.requesting_hint {
        Line::from(Span::styled(
            "Thinking...",
            Style::default().fg(Color::DarkGray),
        ))
    } else if let Some(hint) = &app.hint {
        Line::from(Span::styled(
            format!("\"{hint}\""),
            Style::default().add_modifier(Modifier::ITALIC),
        ))
    } else if app.config.hints_enabled {
        Line::from(Span::styled(
            "Press TAB for a hint",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Hint ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(paragraph, area);
}

fn key_style(status: TileStatus) -> Style {
    match status {
        TileStatus::Correct => Style::default().fg(Color::White).bg(Color::Green),
        TileStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        TileStatus::Absent => Style::default().fg(Color::DarkGray),
        TileStatus::Empty | TileStatus::Tbd => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app.key_statuses();
    let lines: Vec<Line> = app
        .layout
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, &key) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let label = match key {
                    KeyCap::Letter(_) => format!(" {} ", key.label()),
                    KeyCap::Enter | KeyCap::Delete => format!("[{}]", key.label()),
                };
                spans.push(Span::styled(label, key_style(statuses.for_key(key))));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(keyboard, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.status().is_over() {
        "n: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | TAB: Hint | Ctrl+N: Restart | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let state = app.game.state();
    let area = centered_rect(70, 80, f.area());

    let (title, color) = if state.status() == GameStatus::Won {
        (" 🎉 Solved! ", Color::Green)
    } else {
        (" Next time! ", Color::Red)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            state.message().to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match &app.word_info {
        Some(info) => {
            lines.push(Line::from(vec![
                Span::styled(
                    info.word.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(": {}", info.definition)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("\"{}\"", info.example),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
            if let Some(etymology) = &info.etymology {
                lines.push(Line::from(Span::styled(
                    etymology.clone(),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            state.target().text().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))),
    }
    lines.push(Line::from(""));

    lines.extend(share_text(state).lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));

    let stats = &app.stats;
    lines.push(Line::from(format!(
        "Played: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "n: New Game | q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of the given percentage size centred in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
