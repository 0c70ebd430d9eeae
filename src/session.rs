//! The quiz session state machine.
//!
//! A session owns everything about one quiz attempt: the shuffled question
//! pool, the cursor into it, the running score and the answer log. It is
//! driven by exactly one caller at a time; `submit_answer` is a plain
//! read-modify-write with no internal locking, so callers behind a shared
//! boundary must serialize access per session themselves.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::data::{LoadError, QuestionSource};
use crate::models::{AnsweredEntry, Difficulty, QuestionRecord};

/// Caller misuse of the session API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The operation is not valid in the session's current state.
    InvalidState(&'static str),
    /// `start` was asked for zero questions.
    ZeroCount,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidState(detail) => write!(f, "invalid session state: {}", detail),
            SessionError::ZeroCount => write!(f, "a quiz needs at least one question"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What a `start` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A fresh pool was drawn; the session is in progress.
    Started,
    /// The requested configuration is already the held one; nothing changed.
    AlreadyActive,
    /// The source produced no questions. The session stays uninitialized;
    /// the cause is carried along for display when the source failed outright.
    NoQuestions(Option<LoadError>),
}

/// Progress of the held attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    InProgress,
    Completed,
}

/// Final report for a completed attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub score: usize,
    /// The count the user asked for, which is also the score denominator
    /// even when the bank was smaller than the request.
    pub requested_count: usize,
    /// `None` when there is no meaningful denominator.
    pub percentage: Option<f64>,
    pub log: Vec<AnsweredEntry>,
}

impl Summary {
    /// Entries answered incorrectly, in submission order.
    pub fn mistakes(&self) -> impl Iterator<Item = &AnsweredEntry> {
        self.log.iter().filter(|entry| !entry.is_correct())
    }
}

/// State of one quiz attempt.
///
/// The configuration is recorded only once a non-empty pool has been drawn,
/// so a start that found no questions leaves the session uninitialized and
/// the next start with the same configuration retries the load.
#[derive(Default)]
pub struct QuizSession {
    config: Option<(Difficulty, usize)>,
    pool: Vec<QuestionRecord>,
    index: usize,
    score: usize,
    log: Vec<AnsweredEntry>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.config.is_none() {
            SessionState::Uninitialized
        } else if self.index < self.pool.len() {
            SessionState::InProgress
        } else {
            SessionState::Completed
        }
    }

    /// Begins an attempt for `(difficulty, requested_count)`.
    ///
    /// Re-invoking with the configuration already held is a no-op: progress,
    /// pool order and score are kept. Any other configuration replaces the
    /// held attempt wholesale. The full bank is shuffled uniformly before
    /// truncating to the requested count; a bank smaller than the request
    /// just yields a shorter pool.
    pub fn start<S: QuestionSource>(
        &mut self,
        source: &S,
        difficulty: Difficulty,
        requested_count: usize,
    ) -> Result<StartOutcome, SessionError> {
        if requested_count == 0 {
            return Err(SessionError::ZeroCount);
        }

        if self.config == Some((difficulty, requested_count)) {
            return Ok(StartOutcome::AlreadyActive);
        }

        let bank = match source.load(difficulty) {
            Ok(bank) => bank,
            Err(err) => {
                self.restart();
                return Ok(StartOutcome::NoQuestions(Some(err)));
            }
        };
        if bank.is_empty() {
            self.restart();
            return Ok(StartOutcome::NoQuestions(None));
        }

        self.pool = draw_pool(bank, requested_count, &mut thread_rng());
        self.config = Some((difficulty, requested_count));
        self.index = 0;
        self.score = 0;
        self.log.clear();
        Ok(StartOutcome::Started)
    }

    /// Records an answer for the pending question and advances.
    ///
    /// The selection is not checked against the question's options; a stale
    /// or out-of-range string is simply logged and scored as incorrect.
    pub fn submit_answer(&mut self, selected: &str) -> Result<(), SessionError> {
        if self.state() != SessionState::InProgress {
            return Err(SessionError::InvalidState(
                "submit_answer is only valid while a question is pending",
            ));
        }

        let current = &self.pool[self.index];
        let entry = AnsweredEntry {
            question: current.question.clone(),
            selected: selected.to_string(),
            correct: current.correct_answer.clone(),
        };
        if entry.is_correct() {
            self.score += 1;
        }
        self.log.push(entry);
        self.index += 1;
        Ok(())
    }

    /// Final report. Only available once every pooled question is answered.
    pub fn summary(&self) -> Result<Summary, SessionError> {
        if self.state() != SessionState::Completed {
            return Err(SessionError::InvalidState(
                "summary is only available once every question is answered",
            ));
        }

        let requested_count = self.requested_count();
        let percentage = if requested_count > 0 {
            Some(self.score as f64 / requested_count as f64 * 100.0)
        } else {
            None
        };

        Ok(Summary {
            score: self.score,
            requested_count,
            percentage,
            log: self.log.clone(),
        })
    }

    /// Drops the held attempt unconditionally. Unlike re-invoking `start`
    /// with the held configuration, the next `start` after a restart draws
    /// a fresh pool and resets every counter.
    pub fn restart(&mut self) {
        self.config = None;
        self.pool.clear();
        self.index = 0;
        self.score = 0;
        self.log.clear();
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.pool.get(self.index)
    }

    /// 1-based position of the pending question.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn requested_count(&self) -> usize {
        self.config.map(|(_, count)| count).unwrap_or(0)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.config.map(|(difficulty, _)| difficulty)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn log(&self) -> &[AnsweredEntry] {
        &self.log
    }
}

/// Uniformly shuffles the whole bank, then keeps the first `count` records.
fn draw_pool<R: Rng>(
    mut bank: Vec<QuestionRecord>,
    count: usize,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    bank.shuffle(rng);
    bank.truncate(count);
    bank
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedSource(Vec<QuestionRecord>);

    impl QuestionSource for FixedSource {
        fn load(&self, _difficulty: Difficulty) -> Result<Vec<QuestionRecord>, LoadError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl QuestionSource for FailingSource {
        fn load(&self, difficulty: Difficulty) -> Result<Vec<QuestionRecord>, LoadError> {
            Err(LoadError::NotFound(PathBuf::from(difficulty.bank_file())))
        }
    }

    fn record(question: &str, options: &[&str], correct: &str) -> QuestionRecord {
        QuestionRecord {
            question: question.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn numbered_bank(len: usize) -> Vec<QuestionRecord> {
        (0..len)
            .map(|i| record(&format!("Question {}", i), &["yes", "no"], "yes"))
            .collect()
    }

    fn score_from_log(session: &QuizSession) -> usize {
        session.log().iter().filter(|e| e.is_correct()).count()
    }

    #[test]
    fn test_pool_is_capped_by_requested_count() {
        let source = FixedSource(numbered_bank(10));
        let mut session = QuizSession::new();

        let outcome = session.start(&source, Difficulty::Beginner, 3).unwrap();
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(session.pool_len(), 3);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_pool_truncates_to_bank_size() {
        let source = FixedSource(numbered_bank(3));
        let mut session = QuizSession::new();

        session.start(&source, Difficulty::Beginner, 5).unwrap();
        assert_eq!(session.pool_len(), 3);
        assert_eq!(session.requested_count(), 5);
    }

    #[test]
    fn test_log_and_score_stay_consistent() {
        let source = FixedSource(numbered_bank(4));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Intermediate, 4).unwrap();

        for (i, selection) in ["yes", "no", "garbage", "yes"].iter().enumerate() {
            session.submit_answer(selection).unwrap();
            assert_eq!(session.log().len(), i + 1);
            assert_eq!(session.position(), i + 2);
            assert_eq!(session.score(), score_from_log(&session));
        }

        assert_eq!(session.score(), 2);
        assert_eq!(session.state(), SessionState::Completed);
    }

    #[test]
    fn test_start_with_same_config_is_a_no_op() {
        let source = FixedSource(numbered_bank(6));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 4).unwrap();
        session.submit_answer("yes").unwrap();

        let pending = session.current_question().unwrap().question.clone();
        let outcome = session.start(&source, Difficulty::Beginner, 4).unwrap();

        assert_eq!(outcome, StartOutcome::AlreadyActive);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_question().unwrap().question, pending);
    }

    #[test]
    fn test_reconfiguration_resets_progress() {
        let source = FixedSource(numbered_bank(6));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 4).unwrap();
        session.submit_answer("yes").unwrap();

        let outcome = session.start(&source, Difficulty::Beginner, 5).unwrap();

        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(session.position(), 1);
        assert_eq!(session.score(), 0);
        assert!(session.log().is_empty());
        assert_eq!(session.pool_len(), 5);
    }

    #[test]
    fn test_restart_then_start_is_a_fresh_attempt() {
        let source = FixedSource(numbered_bank(6));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Advanced, 4).unwrap();
        session.submit_answer("no").unwrap();

        session.restart();
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.log().is_empty());
        assert_eq!(session.requested_count(), 0);

        // Identical configuration, but after a restart it is not a no-op.
        let outcome = session.start(&source, Difficulty::Advanced, 4).unwrap();
        assert_eq!(outcome, StartOutcome::Started);
        assert_eq!(session.position(), 1);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_single_question_wrong_answer() {
        let source = FixedSource(vec![record(
            "What is a stock?",
            &["Ownership share", "Bond", "Currency", "Loan"],
            "Ownership share",
        )]);
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 1).unwrap();

        session.submit_answer("Bond").unwrap();

        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.log(),
            &[AnsweredEntry {
                question: "What is a stock?".to_string(),
                selected: "Bond".to_string(),
                correct: "Ownership share".to_string(),
            }]
        );

        let summary = session.summary().unwrap();
        assert_eq!(summary.percentage, Some(0.0));
        assert_eq!(summary.mistakes().count(), 1);
    }

    #[test]
    fn test_submit_after_completion_is_invalid_state() {
        let source = FixedSource(numbered_bank(1));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 1).unwrap();
        session.submit_answer("yes").unwrap();

        let err = session.submit_answer("yes").unwrap_err();
        assert!(matches!(err, SessionError::InvalidState(_)));
    }

    #[test]
    fn test_submit_before_start_is_invalid_state() {
        let mut session = QuizSession::new();
        let err = session.submit_answer("yes").unwrap_err();
        assert!(matches!(err, SessionError::InvalidState(_)));
    }

    #[test]
    fn test_arbitrary_selection_is_accepted_and_scored_incorrect() {
        let source = FixedSource(numbered_bank(2));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 2).unwrap();

        session.submit_answer("definitely not an option").unwrap();

        assert_eq!(session.score(), 0);
        assert_eq!(session.log()[0].selected, "definitely not an option");
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_empty_bank_declines_to_start() {
        let source = FixedSource(Vec::new());
        let mut session = QuizSession::new();

        let outcome = session.start(&source, Difficulty::Beginner, 5).unwrap();

        assert_eq!(outcome, StartOutcome::NoQuestions(None));
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.summary().is_err());
    }

    #[test]
    fn test_source_failure_degrades_to_no_questions() {
        let mut session = QuizSession::new();

        let outcome = session.start(&FailingSource, Difficulty::Advanced, 5).unwrap();

        match outcome {
            StartOutcome::NoQuestions(Some(LoadError::NotFound(_))) => {}
            other => panic!("expected NoQuestions with a cause, got {:?}", other),
        }
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_failed_reconfiguration_drops_the_held_attempt() {
        let source = FixedSource(numbered_bank(3));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 3).unwrap();
        session.submit_answer("yes").unwrap();

        session.start(&FailingSource, Difficulty::Advanced, 3).unwrap();

        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let source = FixedSource(numbered_bank(3));
        let mut session = QuizSession::new();

        let err = session.start(&source, Difficulty::Beginner, 0).unwrap_err();
        assert_eq!(err, SessionError::ZeroCount);
        assert_eq!(session.state(), SessionState::Uninitialized);
    }

    #[test]
    fn test_percentage_denominator_is_the_requested_count() {
        let source = FixedSource(numbered_bank(3));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 5).unwrap();

        for _ in 0..3 {
            session.submit_answer("yes").unwrap();
        }

        let summary = session.summary().unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.requested_count, 5);
        assert_eq!(summary.percentage, Some(60.0));
    }

    #[test]
    fn test_summary_before_completion_is_invalid_state() {
        let source = FixedSource(numbered_bank(2));
        let mut session = QuizSession::new();
        session.start(&source, Difficulty::Beginner, 2).unwrap();
        session.submit_answer("yes").unwrap();

        assert!(session.summary().is_err());
    }

    #[test]
    fn test_draw_pool_is_a_permutation_prefix() {
        let bank = numbered_bank(10);
        let mut rng = StdRng::seed_from_u64(7);

        let pool = draw_pool(bank.clone(), 4, &mut rng);

        assert_eq!(pool.len(), 4);
        for question in &pool {
            assert!(bank.contains(question));
        }
        for (i, question) in pool.iter().enumerate() {
            assert!(!pool[..i].contains(question));
        }
    }

    #[test]
    fn test_draw_pool_is_deterministic_under_a_seed() {
        let bank = numbered_bank(10);

        let first = draw_pool(bank.clone(), 10, &mut StdRng::seed_from_u64(42));
        let second = draw_pool(bank, 10, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }
}
