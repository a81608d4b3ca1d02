//! Screen state for the terminal front end.
//!
//! Owns both engines and the active screen, turns key actions into engine
//! commands, and feeds frame time to the Flappy Bird timers. Nothing here
//! touches the terminal, so the flow can be tested headless.

use arcade::core::logger::LogHandle;
use arcade::games::blackjack::{self, BlackjackInput};
use arcade::games::flappy::{self, FlappyInput};
use arcade::{ArcadeConfig, BlackjackGame, FlappyGame};
use log::{debug, warn};
use rand::rngs::ThreadRng;

/// Which game a menu entry or instructions page refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Blackjack,
    Flappy,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::Blackjack, GameKind::Flappy];

    pub fn title(self) -> &'static str {
        match self {
            GameKind::Blackjack => "Blackjack",
            GameKind::Flappy => "Flappy Bird",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Instructions(GameKind),
    Blackjack,
    Flappy,
}

/// Key presses after mapping, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Select,
    Instructions,
    Back,
    Quit,
    Hit,
    Stand,
    Jump,
    Restart,
}

pub struct App {
    pub screen: Screen,
    pub selected: usize,
    pub blackjack: BlackjackGame,
    pub flappy: FlappyGame,
    /// Last refused command, shown in the status bar until the next action.
    pub notice: Option<String>,
    pub logs: LogHandle,
    pub should_quit: bool,
    rng: ThreadRng,
}

impl App {
    pub fn new(config: ArcadeConfig, logs: LogHandle) -> Self {
        Self {
            screen: Screen::Menu,
            selected: 0,
            blackjack: BlackjackGame::new(config.blackjack),
            flappy: FlappyGame::new(config.flappy),
            notice: None,
            logs,
            should_quit: false,
            rng: rand::thread_rng(),
        }
    }

    pub fn selected_game(&self) -> GameKind {
        GameKind::ALL[self.selected % GameKind::ALL.len()]
    }

    fn enter(&mut self, kind: GameKind) {
        match kind {
            GameKind::Blackjack => {
                self.blackjack.new_round(&mut self.rng);
                self.screen = Screen::Blackjack;
            }
            GameKind::Flappy => {
                // Flappy waits on its title card for the first jump.
                self.flappy = FlappyGame::new(self.flappy.config.clone());
                self.screen = Screen::Flappy;
            }
        }
        debug!("entered {}", kind.title());
    }

    pub fn handle_action(&mut self, action: Action) {
        self.notice = None;
        match (self.screen, action) {
            (_, Action::Quit) => self.should_quit = true,

            (Screen::Menu, Action::Up) => {
                self.selected = (self.selected + GameKind::ALL.len() - 1) % GameKind::ALL.len();
            }
            (Screen::Menu, Action::Down) => {
                self.selected = (self.selected + 1) % GameKind::ALL.len();
            }
            (Screen::Menu, Action::Select) => self.enter(self.selected_game()),
            (Screen::Menu, Action::Instructions) => {
                self.screen = Screen::Instructions(self.selected_game());
            }
            (Screen::Menu, Action::Back) => self.should_quit = true,

            (Screen::Instructions(kind), Action::Select) => self.enter(kind),
            (Screen::Instructions(_), Action::Back) => self.screen = Screen::Menu,

            (Screen::Blackjack, Action::Back) => self.screen = Screen::Menu,
            (Screen::Blackjack, action) => {
                let input = match action {
                    Action::Hit => BlackjackInput::Hit,
                    Action::Stand => BlackjackInput::Stand,
                    Action::Restart | Action::Select => BlackjackInput::Restart,
                    _ => return,
                };
                if let Err(err) =
                    blackjack::process_input(&mut self.blackjack, input, &mut self.rng)
                {
                    warn!("blackjack: {}", err);
                    self.notice = Some(err.to_string());
                }
            }

            (Screen::Flappy, Action::Back) => self.screen = Screen::Menu,
            (Screen::Flappy, action) => {
                let input = match action {
                    Action::Jump | Action::Up => FlappyInput::Jump,
                    Action::Restart => FlappyInput::Restart,
                    Action::Select if self.flappy.is_game_over() => FlappyInput::Restart,
                    _ => return,
                };
                if let Err(err) = flappy::process_input(&mut self.flappy, input) {
                    self.notice = Some(err.to_string());
                }
            }

            _ => {}
        }
    }

    /// Advance time-driven state by `dt_ms`. Returns true if a redraw is due.
    pub fn tick(&mut self, dt_ms: u64) -> bool {
        match self.screen {
            Screen::Flappy => self.flappy.advance(dt_ms, &mut self.rng),
            _ => false,
        }
    }
}
