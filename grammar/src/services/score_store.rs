//! SQLite-backed score storage

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::GrammarResult;
use crate::traits::ScoreStore;
use crate::types::{NewScore, ScoreRow};

const CREATE_RESULTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS results (
        id INTEGER PRIMARY KEY,
        name TEXT,
        num_questions INTEGER,
        score REAL,
        timestamp TEXT,
        time_spent REAL
    )
"#;

#[derive(Clone)]
pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> GrammarResult<()> {
        sqlx::query(CREATE_RESULTS_TABLE).execute(&self.pool).await?;
        shared::app_info!("📋 Results table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ScoreStore for SqliteScoreStore {
    async fn record(&self, score: &NewScore) -> GrammarResult<i64> {
        let id = sqlx::query(
            "INSERT INTO results (name, num_questions, score, timestamp, time_spent) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&score.name)
        .bind(i64::from(score.num_questions))
        .bind(score.score)
        .bind(&score.timestamp)
        .bind(score.time_spent)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        shared::app_info!(
            "💾 Saved score for {}: {:.1}% over {} questions",
            score.name,
            score.score,
            score.num_questions
        );
        Ok(id)
    }

    async fn recent(&self, limit: u32) -> GrammarResult<Vec<ScoreRow>> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT COALESCE(name, '') AS name,
                   COALESCE(num_questions, 0) AS num_questions,
                   COALESCE(score, 0.0) AS score,
                   COALESCE(timestamp, '') AS timestamp,
                   COALESCE(time_spent, 0.0) AS time_spent
            FROM results
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
