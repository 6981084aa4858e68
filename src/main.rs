//! Derby - Terminal Horse-Racing Tournament
//!
//! A frame-driven horse-racing game: generate a stable of 20 horses, draw a
//! six-race schedule over increasing distances, and watch each race animate
//! in the terminal. All game logic lives in the library; this binary is the
//! presentation layer - it reads tournament projections and issues commands
//! from key presses.

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use derby::core::constants::{DEFAULT_TIME_SCALE, IDLE_POLL_MS, RACE_FRAME_MS};
use derby::core::engine::{EngineConfig, RaceEvent};
use derby::core::tournament::Tournament;
use derby::ui::draw_ui;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut tournament = Tournament::new(EngineConfig {
        time_scale: DEFAULT_TIME_SCALE,
        ..EngineConfig::default()
    });
    let mut status_line = String::new();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &tournament, &status_line))?;

        // Animate at ~60 FPS while racing, relax while idle
        let poll_ms = if tournament.is_racing() {
            RACE_FRAME_MS
        } else {
            IDLE_POLL_MS
        };
        if event::poll(Duration::from_millis(poll_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(
                    key.code,
                    &mut tournament,
                    &mut rng,
                    &mut status_line,
                ) {
                    return Ok(());
                }
            }
        }

        // Advance the race by the measured frame delta
        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();
        let events = tournament.tick(dt, &mut rng);
        for event in events {
            if let RaceEvent::RaceFinished = event {
                status_line.clear();
            }
        }
    }
}

/// Map a key press to a tournament command. Returns true to quit.
///
/// Invalid commands are swallowed as no-ops; the footer hints already show
/// which commands are eligible.
fn handle_key(
    code: KeyCode,
    tournament: &mut Tournament,
    rng: &mut impl rand::Rng,
    status_line: &mut String,
) -> bool {
    status_line.clear();
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Char('h') | KeyCode::Char('H') => {
            if !tournament.is_racing() {
                tournament.generate_horses(rng);
            }
        }
        KeyCode::Char('g') | KeyCode::Char('G') => {
            if !tournament.is_racing() {
                if let Err(err) = tournament.generate_schedule(rng) {
                    *status_line = err.to_string();
                }
            }
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if let Err(err) = tournament.start_race(rng) {
                *status_line = err.to_string();
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            if tournament.can_advance_round() {
                let _ = tournament.advance_round();
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            tournament.reset_all();
        }
        _ => {}
    }
    false
}
