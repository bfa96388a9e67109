mod build_info;
mod constants;
mod game;
mod input;
mod ui;

use constants::TICK_INTERVAL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::{GamePhase, GameSession};
use input::InputResult;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Flappy Bird\n");
                println!("Usage: skyward [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Controls: Space/Up/Enter to flap, R to restart, Q to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut session = GameSession::new(&mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Reference sample for delta-time computation; re-armed on start
    let mut last_step = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.size();
            ui::render_game(frame, area, &session);
        })?;

        // Poll for input (non-blocking, one tick interval)
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                let was_waiting = session.phase == GamePhase::Ready;
                match input::handle_key(key_event, &mut session, &mut rng) {
                    InputResult::Quit => break,
                    InputResult::Continue => {}
                }
                // Starting a run re-arms the clock so the first tick doesn't
                // integrate the time spent waiting on the Ready screen
                if was_waiting && session.phase == GamePhase::Active {
                    last_step = Instant::now();
                }
            }
        }

        // Physics tick at the nominal 100 Hz cadence, using measured dt
        if session.phase == GamePhase::Active
            && last_step.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS)
        {
            let dt = last_step.elapsed().as_secs_f64();
            game::logic::tick(&mut session, dt, &mut rng);
            last_step = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
