//! Score records written to and read from the `results` table

use serde::{Deserialize, Serialize};

/// A finished quiz about to be stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewScore {
    pub name: String,
    pub num_questions: u32,
    pub score: f64,
    pub timestamp: String,
    pub time_spent: f64,
}

/// A row of the `results` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoreRow {
    pub name: String,
    pub num_questions: i64,
    pub score: f64,
    pub timestamp: String,
    pub time_spent: f64,
}

impl ScoreRow {
    pub const CSV_HEADERS: [&'static str; 5] =
        ["Name", "Number of Questions", "Score", "Timestamp", "Time Spent"];

    pub fn csv_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.num_questions.to_string(),
            shared::score::round2(self.score).to_string(),
            self.timestamp.clone(),
            shared::score::round2(self.time_spent).to_string(),
        ]
    }
}
