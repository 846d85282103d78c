//! Storage trait for dependency injection

use async_trait::async_trait;

use crate::error::GrammarResult;
use crate::types::{NewScore, ScoreRow};

#[mockall::automock]
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Insert one row and return its id
    async fn record(&self, score: &NewScore) -> GrammarResult<i64>;

    /// Most recent rows first
    async fn recent(&self, limit: u32) -> GrammarResult<Vec<ScoreRow>>;
}
