use crate::data::{FileQuestionSource, LoadError};
use crate::models::{AppState, Difficulty};
use crate::session::{QuizSession, SessionState, StartOutcome};

pub const MIN_COUNT: usize = 5;
pub const MAX_COUNT: usize = 50;
pub const COUNT_STEP: usize = 5;

/// Application state for the terminal front end.
///
/// Wraps the quiz session together with the purely presentational bits:
/// the welcome-screen selectors, the option cursor, the result scroll
/// offset and the "no questions" warning line.
pub struct App {
    pub state: AppState,
    source: FileQuestionSource,
    session: QuizSession,
    difficulty: Difficulty,
    requested_count: usize,
    selected_option: usize,
    result_scroll: usize,
    warning: Option<String>,
}

impl App {
    pub fn new(source: FileQuestionSource, difficulty: Difficulty, requested_count: usize) -> Self {
        Self {
            state: AppState::Welcome,
            source,
            session: QuizSession::new(),
            difficulty,
            requested_count: snap_count(requested_count),
            selected_option: 0,
            result_scroll: 0,
            warning: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn next_difficulty(&mut self) {
        self.difficulty = cycle(self.difficulty, 1);
    }

    pub fn previous_difficulty(&mut self) {
        self.difficulty = cycle(self.difficulty, Difficulty::ALL.len() - 1);
    }

    pub fn raise_count(&mut self) {
        self.requested_count = (self.requested_count + COUNT_STEP).min(MAX_COUNT);
    }

    pub fn lower_count(&mut self) {
        self.requested_count = self.requested_count.saturating_sub(COUNT_STEP).max(MIN_COUNT);
    }

    /// Starts (or resumes) the quiz for the selected configuration.
    ///
    /// When the source has nothing for the selected tier the app stays on
    /// the welcome screen with a warning line and the quiz view never opens.
    pub fn start_quiz(&mut self) {
        match self
            .session
            .start(&self.source, self.difficulty, self.requested_count)
        {
            Ok(StartOutcome::Started) => {
                self.state = AppState::Quiz;
                self.selected_option = 0;
                self.result_scroll = 0;
                self.warning = None;
            }
            Ok(StartOutcome::AlreadyActive) => {
                self.state = match self.session.state() {
                    SessionState::Completed => AppState::Result,
                    _ => AppState::Quiz,
                };
                self.warning = None;
            }
            Ok(StartOutcome::NoQuestions(cause)) => {
                self.warning = Some(no_questions_message(self.difficulty, cause));
            }
            Err(err) => {
                self.warning = Some(err.to_string());
            }
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submits the option under the cursor.
    pub fn submit_selected(&mut self) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|q| q.options.get(self.selected_option))
            .cloned()
        else {
            return;
        };

        if self.session.submit_answer(&option).is_ok() {
            self.selected_option = 0;
            if self.session.state() == SessionState::Completed {
                self.state = AppState::Result;
            }
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.log().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Drops the attempt and returns to the welcome screen; the next start
    /// reshuffles even for an unchanged configuration.
    pub fn restart(&mut self) {
        self.session.restart();
        self.state = AppState::Welcome;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.warning = None;
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0)
    }
}

fn cycle(difficulty: Difficulty, by: usize) -> Difficulty {
    let position = Difficulty::ALL
        .iter()
        .position(|&d| d == difficulty)
        .unwrap_or(0);
    Difficulty::ALL[(position + by) % Difficulty::ALL.len()]
}

/// Snaps an arbitrary CLI-supplied count onto the 5..=50 step-5 grid.
fn snap_count(count: usize) -> usize {
    let clamped = count.clamp(MIN_COUNT, MAX_COUNT);
    clamped / COUNT_STEP * COUNT_STEP
}

fn no_questions_message(difficulty: Difficulty, cause: Option<LoadError>) -> String {
    match cause {
        Some(err) => format!("No questions available for {} ({})", difficulty, err),
        None => format!("No questions available for {}", difficulty),
    }
}
