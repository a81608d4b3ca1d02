//! Key bindings: crossterm key events to screen-independent actions.

use crate::app::{Action, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press on `screen` to an action. Key releases and unbound keys
/// map to `None`.
pub fn map_key(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match (screen, key.code) {
        (_, KeyCode::Char('q')) => Action::Quit,
        (_, KeyCode::Esc) => Action::Back,

        (Screen::Menu, KeyCode::Up | KeyCode::Char('k')) => Action::Up,
        (Screen::Menu, KeyCode::Down | KeyCode::Char('j')) => Action::Down,
        (Screen::Menu, KeyCode::Enter | KeyCode::Char(' ')) => Action::Select,
        (Screen::Menu, KeyCode::Char('i')) => Action::Instructions,

        (Screen::Instructions(_), KeyCode::Enter | KeyCode::Char(' ')) => Action::Select,
        (Screen::Instructions(_), KeyCode::Backspace) => Action::Back,

        (Screen::Blackjack, KeyCode::Char('h')) => Action::Hit,
        (Screen::Blackjack, KeyCode::Char('s')) => Action::Stand,
        (Screen::Blackjack, KeyCode::Char('r')) => Action::Restart,

        (Screen::Flappy, KeyCode::Char(' ') | KeyCode::Up) => Action::Jump,
        (Screen::Flappy, KeyCode::Char('r')) => Action::Restart,
        (Screen::Flappy, KeyCode::Enter) => Action::Select,

        _ => return None,
    };
    Some(action)
}
