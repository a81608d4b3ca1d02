//! UI rendering for the Flappy Bird playfield.

use crate::app::App;
use crate::ui::game_common::{
    create_game_layout, push_log_lines, render_game_over_banner, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use arcade::games::flappy::{FlappyPhase, FlappyView, Rect as BoardRect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_flappy(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.flappy.view();
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, &view);
    render_status_bar_content(frame, layout.status_bar, &view);
    render_info_panel(frame, layout.info_panel, app, &view);

    if view.game_over {
        render_game_over_banner(
            frame,
            layout.content,
            GameResultType::Loss,
            "GAME OVER",
            &format!("SCORE: {}", view.display_score),
        );
    }
}

/// Board-pixel rectangle covered by one terminal cell.
fn cell_rect(view: &FlappyView, area: Rect, col: u16, row: u16) -> BoardRect {
    let x0 = col as i32 * view.board_width / area.width as i32;
    let x1 = (col as i32 + 1) * view.board_width / area.width as i32;
    let y0 = row as i32 * view.board_height / area.height as i32;
    let y1 = (row as i32 + 1) * view.board_height / area.height as i32;
    BoardRect::new(x0, y0, (x1 - x0).max(1), (y1 - y0).max(1))
}

fn render_play_area(frame: &mut Frame, area: Rect, view: &FlappyView) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird = view.bird.rect();
    let bird_char = if view.bird.velocity_y < -3 {
        "▲"
    } else if view.bird.velocity_y > 6 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let cell = cell_rect(view, area, col, row);

            if cell.overlaps(&bird) {
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if view.obstacles.iter().any(|pair| pair.collides_with(&cell)) {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, view: &FlappyView) {
    match view.phase {
        FlappyPhase::Idle => render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space]", "Jump"), ("[Esc]", "Menu")],
        ),
        FlappyPhase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", view.display_score),
            Color::Green,
            &[("[Space]", "Jump"), ("[Esc]", "Menu")],
        ),
        FlappyPhase::GameOver => render_status_bar(
            frame,
            area,
            "You crashed!",
            Color::Red,
            &[("[R]", "Retry"), ("[Esc]", "Menu")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App, view: &FlappyView) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                view.display_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Ticks: ", label),
            Span::styled(app.flappy.tick_count.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(view.obstacles.len().to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:+}", view.bird.velocity_y),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let room = (inner.height as usize).saturating_sub(lines.len() + 2);
    push_log_lines(&mut lines, &app.logs.recent(room), inner.width);
    frame.render_widget(Paragraph::new(lines), inner);
}
