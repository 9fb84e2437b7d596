//! Usage policy: caps how many completed interviews one contact e-mail may have.
//!
//! The count is read when a session starts and the result row is written when
//! it ends, in separate statements. Two concurrent sessions for the same
//! e-mail can both pass the check, so the ceiling can be exceeded by the
//! number of sessions in flight.

use sqlx::SqlitePool;

use crate::errors::AppError;

pub const DEFAULT_INTERVIEW_LIMIT: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageDecision {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy)]
pub struct UsagePolicy {
    limit: i64,
}

impl Default for UsagePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVIEW_LIMIT)
    }
}

impl UsagePolicy {
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn check_limit(&self, prior_completed: i64) -> UsageDecision {
        if prior_completed >= self.limit {
            UsageDecision::Deny
        } else {
            UsageDecision::Allow
        }
    }

    /// Reads the e-mail's history and fails with `UsageLimitExceeded` on deny.
    pub async fn enforce(&self, pool: &SqlitePool, email: &str) -> Result<i64, AppError> {
        let count = count_completed(pool, email).await?;
        match self.check_limit(count) {
            UsageDecision::Allow => Ok(count),
            UsageDecision::Deny => Err(AppError::UsageLimitExceeded {
                email: email.to_string(),
                count,
                limit: self.limit,
            }),
        }
    }
}

/// Completed interviews stored for a contact e-mail.
pub async fn count_completed(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM interview_results WHERE email = ?")
        .bind(email)
        .fetch_one(pool)
        .await
}
