//! # stock-quiz
//!
//! A terminal quiz over a difficulty-tiered bank of stock market questions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stock_quiz::{Difficulty, Quiz};
//!
//! fn main() -> std::io::Result<()> {
//!     // Banks live in one directory, one JSON file per difficulty tier.
//!     let quiz = Quiz::new("questions", Difficulty::Beginner, 5);
//!
//!     // Run the quiz in the terminal.
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{FileQuestionSource, LoadError, QuestionSource};
pub use models::{AnsweredEntry, AppState, Difficulty, QuestionRecord};
pub use session::{QuizSession, SessionError, SessionState, StartOutcome, Summary};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Creates a quiz over the bank directory with the welcome-screen
    /// selectors preset to `difficulty` and `requested_count`.
    ///
    /// Nothing is read from disk yet; the bank for the selected tier is
    /// loaded when the user starts an attempt, and a missing or malformed
    /// bank shows up as a warning on the welcome screen rather than an
    /// error here.
    pub fn new<P: AsRef<Path>>(
        questions_dir: P,
        difficulty: Difficulty,
        requested_count: usize,
    ) -> Self {
        Self {
            app: App::new(
                FileQuestionSource::new(questions_dir),
                difficulty,
                requested_count,
            ),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> io::Result<()> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_difficulty();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_difficulty();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.raise_count();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.lower_count();
            false
        }
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
