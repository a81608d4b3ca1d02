mod app;
mod input;
mod ui;

use app::App;
use arcade::core::constants::FRAME_POLL_MS;
use arcade::core::logger::LogBuffer;
use arcade::ArcadeConfig;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn print_help() {
    println!("Arcade - Blackjack and Flappy Bird in the terminal\n");
    println!("Usage: arcade [options]\n");
    println!("Options:");
    println!("  --config <path>  Load settings from a JSON file");
    println!("  --print-config   Print the effective settings and exit");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
}

fn load_config(path: Option<&PathBuf>) -> ArcadeConfig {
    let loaded = match path {
        Some(path) => ArcadeConfig::load(path),
        None => ArcadeConfig::load_default(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load config: {}", e);
            eprintln!("Using default settings.");
            ArcadeConfig::default()
        }
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut print_config = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("--config needs a path");
                        std::process::exit(1);
                    }
                }
            }
            "--print-config" => print_config = true,
            "--version" | "-v" => {
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = load_config(config_path.as_ref());
    if print_config {
        let json = serde_json::to_string_pretty(&config)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        println!("{}", json);
        return Ok(());
    }

    let logs = LogBuffer::install(LevelFilter::Debug)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let mut app = App::new(config, logs);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut last_frame = Instant::now();
    terminal.draw(|f| ui::draw(f, app))?;

    while !app.should_quit {
        let mut dirty = false;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = input::map_key(app.screen, key) {
                    app.handle_action(action);
                    dirty = true;
                }
            }
        }

        // Carry the sub-millisecond remainder into the next frame.
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        if dt_ms > 0 {
            last_frame += Duration::from_millis(dt_ms);
            dirty |= app.tick(dt_ms);
        }

        if dirty {
            terminal.draw(|f| ui::draw(f, app))?;
        }
    }
    Ok(())
}
