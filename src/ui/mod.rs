pub mod blackjack_scene;
pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw whichever screen is active.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, app.selected_game()),
        Screen::Instructions(kind) => menu_scene::render_instructions(frame, area, kind),
        Screen::Blackjack => blackjack_scene::render_blackjack(frame, area, app),
        Screen::Flappy => flappy_scene::render_flappy(frame, area, app),
    }
}
