//! Title menu and per-game instruction pages.

use crate::app::GameKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const BLACKJACK_INSTRUCTIONS: &[&str] = &[
    "1. The goal is to get as close to 21 without going over.",
    "2. Aces can be worth 1 or 11 points.",
    "3. Face cards (K, Q, J) are worth 10 points.",
    "4. Press [H] to Hit and take another card, or [S] to Stay.",
    "5. The dealer draws until reaching 17 or more.",
    "",
    "Fun Fact: The game of Blackjack originated in France in the 1700s.",
];

const FLAPPY_INSTRUCTIONS: &[&str] = &[
    "1. Press SPACE to make the bird jump.",
    "2. Avoid hitting the pipes to stay alive.",
    "3. The longer you survive, the higher your score!",
    "4. You get 1 point for every set of pipes passed.",
    "5. If you hit a pipe, it's GAME OVER!",
    "",
    "GOOD LUCK!",
];

pub fn instructions_for(kind: GameKind) -> &'static [&'static str] {
    match kind {
        GameKind::Blackjack => BLACKJACK_INSTRUCTIONS,
        GameKind::Flappy => FLAPPY_INSTRUCTIONS,
    }
}

pub fn render_menu(frame: &mut Frame, area: Rect, selected: GameKind) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A R C A D E",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for kind in GameKind::ALL {
        let (marker, style) = if kind == selected {
            (
                "> ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, kind.title()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Play  [I] Instructions  [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let y_offset = inner.height.saturating_sub(lines.len() as u16) / 2;
    let content = Rect {
        y: inner.y + y_offset,
        height: inner.height.saturating_sub(y_offset),
        ..inner
    };
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

pub fn render_instructions(frame: &mut Frame, area: Rect, kind: GameKind) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} - How to play ", kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    lines.extend(instructions_for(kind).iter().map(|text| {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(Color::White),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [Enter] Play  [Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
