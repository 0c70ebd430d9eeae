mod loader;

pub use loader::{FileQuestionSource, LoadError, QuestionSource};
