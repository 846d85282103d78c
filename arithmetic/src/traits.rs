//! Storage trait for dependency injection
//!
//! Handlers only see `ResultStore`, so tests can swap in a mock.

use async_trait::async_trait;

use crate::core::CompletedQuiz;
use crate::error::ArithmeticResult;
use crate::types::{QuizResultRow, User};

#[mockall::automock]
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Find or create the `(username, age)` user and insert one result row.
    /// Returns the user id.
    async fn record(&self, quiz: &CompletedQuiz) -> ArithmeticResult<i64>;

    async fn user(&self, user_id: i64) -> ArithmeticResult<Option<User>>;

    /// Results for a user, newest first, optionally capped
    async fn results_for_user(
        &self,
        user_id: i64,
        limit: Option<u32>,
    ) -> ArithmeticResult<Vec<QuizResultRow>>;
}
