//! Layout pieces shared by both game screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas of a game screen, all inside one titled border.
pub struct GameLayout {
    /// Playfield or table.
    pub content: Rect,
    /// Strip under the playfield: one line of status, one of key hints.
    pub status_bar: Rect,
    /// Bordered side column on the right.
    pub info_panel: Rect,
}

const STATUS_BAR_HEIGHT: u16 = 2;
const MIN_CONTENT_WIDTH: u16 = 20;
const MIN_CONTENT_HEIGHT: u16 = 5;

/// Clear `area`, draw the titled border, and carve out the playfield, the
/// status strip below it, and a side column `info_panel_width` wide.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);
    let border = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = border.inner(area);
    frame.render_widget(border, area);

    let [left, info_panel] = split2(
        inner,
        Direction::Horizontal,
        Constraint::Min(MIN_CONTENT_WIDTH),
        Constraint::Length(info_panel_width),
    );
    let [content, status_bar] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(MIN_CONTENT_HEIGHT),
        Constraint::Length(STATUS_BAR_HEIGHT),
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// One `[key] action` pair per hint, separated by two spaces.
fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span<'static>> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(key.to_string(), key_style),
                Span::styled(format!(" {}", action), action_style),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Centered status message, with the key hints on the line below when the
/// strip has room for them.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        status_text.to_string(),
        Style::default().fg(status_color),
    ))];
    if area.height >= STATUS_BAR_HEIGHT && !controls.is_empty() {
        lines.push(hint_line(controls));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
    Draw,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
            GameResultType::Draw => Color::Yellow,
        }
    }
}

/// Result banner along the bottom of `area`, leaving the board visible.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
) {
    let banner_height: u16 = 4;
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let title_color = result_type.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[R] Restart  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Bordered " Info " box. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Append a " Log:" section with `logs`, each clipped to `width`.
pub fn push_log_lines(lines: &mut Vec<Line<'static>>, logs: &[String], width: u16) {
    if logs.is_empty() {
        return;
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Log:",
        Style::default().fg(Color::DarkGray),
    )));
    let max = (width as usize).saturating_sub(2);
    for entry in logs {
        // Drop the HH:MM:SS prefix; the panel is narrow.
        let text = entry.get(9..).unwrap_or(entry.as_str());
        let clipped: String = text.chars().take(max).collect();
        lines.push(Line::from(Span::styled(
            format!(" {}", clipped),
            Style::default().fg(Color::Gray),
        )));
    }
}
