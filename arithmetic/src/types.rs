//! Row types read back from the results database

use serde::{Deserialize, Serialize};

/// A row of the `user` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub age: i64,
}

/// A row of the `quiz_result` table, as listed on the results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizResultRow {
    pub operation: String,
    pub difficulty: i64,
    pub num_questions: i64,
    pub score: f64,
    pub time_spent: f64,
    pub timestamp: String,
    pub correct_answers: i64,
}

impl QuizResultRow {
    /// Column headers of the CSV export
    pub const CSV_HEADERS: [&'static str; 7] = [
        "Operation",
        "Difficulty",
        "Number of Questions",
        "Score (%)",
        "Time Spent (s)",
        "Date",
        "Correct Answers",
    ];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.operation.clone(),
            self.difficulty.to_string(),
            self.num_questions.to_string(),
            shared::score::round2(self.score).to_string(),
            shared::score::round2(self.time_spent).to_string(),
            self.timestamp.clone(),
            self.correct_answers.to_string(),
        ]
    }
}
