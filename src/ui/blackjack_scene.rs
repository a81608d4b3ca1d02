//! UI rendering for the Blackjack table.

use crate::app::App;
use crate::ui::game_common::{
    create_game_layout, push_log_lines, render_game_over_banner, render_info_panel_frame,
    render_status_bar, GameResultType,
};
use arcade::games::blackjack::{BlackjackView, Card, RoundPhase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CARD_FACE_DOWN: &str = "[ ?? ]";

pub fn render_blackjack(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.blackjack.view();
    let layout = create_game_layout(frame, area, " Blackjack ", Color::Green, 26);

    render_table(frame, layout.content, &view);
    render_status_bar_content(frame, layout.status_bar, &view, app.notice.as_deref());
    render_info_panel(frame, layout.info_panel, app, &view);

    if let Some(outcome) = view.outcome {
        let result_type = match outcome.player_won() {
            Some(true) => GameResultType::Win,
            Some(false) => GameResultType::Loss,
            None => GameResultType::Draw,
        };
        let detail = format!(
            "{} vs {}",
            view.player_score,
            view.dealer_score.unwrap_or_default()
        );
        render_game_over_banner(frame, layout.content, result_type, outcome.message(), &detail);
    }
}

fn card_span(card: Option<Card>) -> Span<'static> {
    match card {
        Some(card) => {
            let color = if card.suit.is_red() {
                Color::Red
            } else {
                Color::White
            };
            Span::styled(
                format!("[{:^4}]", card.to_string()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(CARD_FACE_DOWN, Style::default().fg(Color::DarkGray)),
    }
}

fn hand_line(cards: impl IntoIterator<Item = Option<Card>>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for card in cards {
        spans.push(card_span(card));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_table(frame: &mut Frame, area: Rect, view: &BlackjackView) {
    let label = Style::default().fg(Color::DarkGray);
    let dealer_total = match view.dealer_score {
        Some(score) => format!(" Dealer ({})", score),
        None => " Dealer".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(dealer_total, label)),
        hand_line(view.dealer_cards.iter().copied()),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(format!(" You ({})", view.player_score), label)),
        hand_line(view.player_cards.iter().copied().map(Some)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    view: &BlackjackView,
    notice: Option<&str>,
) {
    if let Some(notice) = notice {
        render_status_bar(frame, area, notice, Color::Red, &[("[Esc]", "Menu")]);
        return;
    }

    match view.phase {
        RoundPhase::PlayerTurn if view.player_bust => render_status_bar(
            frame,
            area,
            "Bust! Stay to reveal the dealer's hand.",
            Color::Red,
            &[("[S]", "Stay"), ("[Esc]", "Menu")],
        ),
        RoundPhase::PlayerTurn => render_status_bar(
            frame,
            area,
            "Your move.",
            Color::Yellow,
            &[("[H]", "Hit"), ("[S]", "Stay"), ("[Esc]", "Menu")],
        ),
        _ => render_status_bar(
            frame,
            area,
            "Round over.",
            Color::Cyan,
            &[("[R]", "Restart"), ("[Esc]", "Menu")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App, view: &BlackjackView) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Round: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.blackjack.rounds_played.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Deck: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} cards", app.blackjack.deck.len()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Dealer stands on ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.blackjack.config.dealer_stands_on.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    if view.player_bust {
        lines.push(Line::from(Span::styled(
            " BUST",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let room = (inner.height as usize).saturating_sub(lines.len() + 2);
    push_log_lines(&mut lines, &app.logs.recent(room), inner.width);
    frame.render_widget(Paragraph::new(lines), inner);
}
