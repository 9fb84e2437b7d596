use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CandidateRow {
    pub id: i64,
    pub resume_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InterviewResultRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub resume_email: Option<String>,
    /// Raw evaluator text.
    pub scorecard: String,
    pub created_at: DateTime<Utc>,
}
