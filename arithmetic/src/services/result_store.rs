//! SQLite-backed result storage

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::core::CompletedQuiz;
use crate::error::ArithmeticResult;
use crate::traits::ResultStore;
use crate::types::{QuizResultRow, User};

const CREATE_USER_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS user (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL,
        age INTEGER NOT NULL,
        grade FLOAT,
        time_spent FLOAT,
        timestamp TEXT
    )
"#;

const CREATE_QUIZ_RESULT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS quiz_result (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL,
        operation TEXT NOT NULL,
        difficulty INTEGER NOT NULL,
        num_questions INTEGER NOT NULL,
        score REAL,
        time_spent FLOAT,
        timestamp TEXT,
        correct_answers INTEGER,
        FOREIGN KEY (user_id) REFERENCES user(id)
    )
"#;

/// Timestamps sort lexically in this format
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

#[derive(Clone)]
pub struct SqliteResultStore {
    pool: SqlitePool,
}

impl SqliteResultStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the tables if they don't exist yet
    pub async fn init_schema(&self) -> ArithmeticResult<()> {
        sqlx::query(CREATE_USER_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_QUIZ_RESULT_TABLE).execute(&self.pool).await?;
        shared::app_info!("📋 Result tables ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ResultStore for SqliteResultStore {
    async fn record(&self, quiz: &CompletedQuiz) -> ArithmeticResult<i64> {
        let timestamp = format_timestamp(quiz.finished_at);
        let mut tx = self.pool.begin().await?;

        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM user WHERE username = ? AND age = ?")
                .bind(&quiz.username)
                .bind(quiz.age)
                .fetch_optional(&mut *tx)
                .await?;

        let user_id = match existing {
            Some(id) => id,
            None => sqlx::query("INSERT INTO user (username, age, timestamp) VALUES (?, ?, ?)")
                .bind(&quiz.username)
                .bind(quiz.age)
                .bind(&timestamp)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid(),
        };

        sqlx::query(
            r#"
            INSERT INTO quiz_result
                (user_id, operation, difficulty, num_questions, score, time_spent, timestamp, correct_answers)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(quiz.operation.as_str())
        .bind(i64::from(quiz.difficulty))
        .bind(i64::from(quiz.num_questions))
        .bind(quiz.score)
        .bind(quiz.time_spent)
        .bind(&timestamp)
        .bind(i64::from(quiz.correct_answers))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        shared::app_info!(
            "💾 Saved {} result for {} (user {}): {:.1}%",
            quiz.operation,
            quiz.username,
            user_id,
            quiz.score
        );
        Ok(user_id)
    }

    async fn user(&self, user_id: i64) -> ArithmeticResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, age FROM user WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn results_for_user(
        &self,
        user_id: i64,
        limit: Option<u32>,
    ) -> ArithmeticResult<Vec<QuizResultRow>> {
        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map(i64::from).unwrap_or(-1);
        let rows = sqlx::query_as::<_, QuizResultRow>(
            r#"
            SELECT operation, difficulty, num_questions, score, time_spent, timestamp, correct_answers
            FROM quiz_result
            WHERE user_id = ?
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
