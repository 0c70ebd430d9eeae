//! File-backed question source.
//!
//! Each difficulty tier maps to one JSON file inside the bank directory.
//! The loader reads the full bank in file order; shuffling and truncation
//! belong to the session, not here.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{Difficulty, QuestionRecord};

/// Failure to produce a question bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The bank file for the requested tier does not exist.
    NotFound(PathBuf),
    /// The bank file exists but does not hold valid question records.
    Format { path: PathBuf, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "file '{}' not found", path.display()),
            LoadError::Format { path, message } => {
                write!(f, "invalid question bank '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Anything that can hand the session a bank of questions for a tier.
pub trait QuestionSource {
    /// Returns the full bank in source order, or why it is unavailable.
    fn load(&self, difficulty: Difficulty) -> Result<Vec<QuestionRecord>, LoadError>;
}

/// Question source reading the fixed tier-to-file table under one directory.
pub struct FileQuestionSource {
    dir: PathBuf,
}

impl FileQuestionSource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn bank_path(&self, difficulty: Difficulty) -> PathBuf {
        self.dir.join(difficulty.bank_file())
    }
}

impl QuestionSource for FileQuestionSource {
    fn load(&self, difficulty: Difficulty) -> Result<Vec<QuestionRecord>, LoadError> {
        let path = self.bank_path(difficulty);

        let contents = fs::read_to_string(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.clone()),
            _ => LoadError::Format {
                path: path.clone(),
                message: err.to_string(),
            },
        })?;

        let records: Vec<QuestionRecord> =
            serde_json::from_str(&contents).map_err(|err| LoadError::Format {
                path: path.clone(),
                message: err.to_string(),
            })?;

        for record in &records {
            record.validate().map_err(|message| LoadError::Format {
                path: path.clone(),
                message,
            })?;
        }

        Ok(records)
    }
}
