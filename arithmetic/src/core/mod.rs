//! Core quiz logic, free of HTTP and storage concerns

pub mod problem;
pub mod quiz;

pub use problem::{Difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY, Operation, Problem, generate_problem};
pub use quiz::{AnswerOutcome, CompletedQuiz, QuizSession, QuizSettings};
