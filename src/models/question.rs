use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Question bank tier. Each tier is backed by its own JSON file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// File name of the bank backing this tier.
    pub fn bank_file(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner_questions.json",
            Difficulty::Intermediate => "intermediate_questions.json",
            Difficulty::Advanced => "advanced_questions.json",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionRecord {
    /// Checks the record shape once at load time: 2-4 distinct options, and
    /// a correct answer that is one of them.
    pub fn validate(&self) -> Result<(), String> {
        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(format!(
                "expected {} to {} options, got {}",
                MIN_OPTIONS, MAX_OPTIONS, count
            ));
        }

        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].contains(option) {
                return Err(format!("duplicate option {:?}", option));
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(format!(
                "correct answer {:?} is not one of the options",
                self.correct_answer
            ));
        }

        Ok(())
    }
}

/// One submitted answer. Recorded at submission time, never mutated after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnsweredEntry {
    pub question: String,
    pub selected: String,
    pub correct: String,
}

impl AnsweredEntry {
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }
}

/// Which screen the app is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
