mod question;

pub use question::{AnsweredEntry, AppState, Difficulty, QuestionRecord};
