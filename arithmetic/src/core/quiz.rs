//! Per-user quiz progress kept in the server-side session

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::problem::{Difficulty, Operation, Problem, generate_problem};

/// Validated parameters for a new quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    pub username: String,
    pub age: i64,
    pub operation: Operation,
    pub difficulty: Difficulty,
    pub num_questions: u32,
}

/// What happened when an answer was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No question was on screen; nothing was recorded
    NoPendingQuestion,
    Continue { correct: bool },
    Finished { correct: bool },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub settings: QuizSettings,
    pub current_question: u32,
    pub correct_answers: u32,
    pub started_at: DateTime<Utc>,
    pub pending: Option<Problem>,
    pub last_correct: Option<bool>,
}

impl QuizSession {
    pub fn new(settings: QuizSettings, started_at: DateTime<Utc>) -> Self {
        Self {
            settings,
            current_question: 0,
            correct_answers: 0,
            started_at,
            pending: None,
            last_correct: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_question >= self.settings.num_questions
    }

    /// 1-based number of the question currently shown
    pub fn question_number(&self) -> u32 {
        (self.current_question + 1).min(self.settings.num_questions)
    }

    /// The question on screen, drawing a new one if none is pending.
    /// Reloading the page keeps the same question.
    pub fn ensure_problem<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Problem {
        let (difficulty, operation) = (self.settings.difficulty, self.settings.operation);
        self.pending
            .get_or_insert_with(|| generate_problem(difficulty, operation, rng))
    }

    pub fn submit_answer(&mut self, answer: i64) -> AnswerOutcome {
        if self.is_finished() {
            return AnswerOutcome::NoPendingQuestion;
        }
        let Some(problem) = self.pending.take() else {
            return AnswerOutcome::NoPendingQuestion;
        };

        let correct = problem.is_correct(answer);
        if correct {
            self.correct_answers += 1;
        }
        self.last_correct = Some(correct);
        self.current_question += 1;

        if self.is_finished() {
            AnswerOutcome::Finished { correct }
        } else {
            AnswerOutcome::Continue { correct }
        }
    }

    /// Summarise a finished quiz for storage
    pub fn complete(&self, finished_at: DateTime<Utc>) -> CompletedQuiz {
        let elapsed = finished_at - self.started_at;
        let time_spent = (elapsed.num_milliseconds().max(0) as f64) / 1000.0;

        CompletedQuiz {
            username: self.settings.username.clone(),
            age: self.settings.age,
            operation: self.settings.operation,
            difficulty: self.settings.difficulty.value(),
            num_questions: self.settings.num_questions,
            correct_answers: self.correct_answers,
            score: shared::score::percentage(self.correct_answers, self.settings.num_questions),
            time_spent,
            finished_at,
        }
    }
}

/// A finished quiz ready to be written as one `quiz_result` row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedQuiz {
    pub username: String,
    pub age: i64,
    pub operation: Operation,
    pub difficulty: u32,
    pub num_questions: u32,
    pub correct_answers: u32,
    pub score: f64,
    pub time_spent: f64,
    pub finished_at: DateTime<Utc>,
}
