use std::path::PathBuf;

use clap::Parser;
use stock_quiz::{Difficulty, Quiz};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the per-difficulty question bank files
    #[arg(short, long, default_value = "questions")]
    questions: PathBuf,

    /// Difficulty tier preselected on the welcome screen
    #[arg(short, long, value_enum, default_value_t = Difficulty::Beginner)]
    difficulty: Difficulty,

    /// Number of questions preselected on the welcome screen (5-50)
    #[arg(short, long, default_value_t = 5)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let quiz = Quiz::new(args.questions, args.difficulty, args.count);

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
