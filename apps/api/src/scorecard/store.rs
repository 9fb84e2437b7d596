//! Interview result persistence. Insert-only; rows are never updated.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::interview::InterviewResultRow;

/// Upper bound for the admin listing.
pub const MAX_LIST_LIMIT: i64 = 500;

pub struct NewInterviewResult<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub resume_email: Option<&'a str>,
    pub scorecard: &'a str,
}

/// Stores a completed evaluation and returns its row id.
pub async fn insert_result(
    pool: &SqlitePool,
    result: NewInterviewResult<'_>,
) -> Result<i64, sqlx::Error> {
    let outcome = sqlx::query(
        r#"
        INSERT INTO interview_results (name, email, resume_email, scorecard, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(result.name)
    .bind(result.email)
    .bind(result.resume_email)
    .bind(result.scorecard)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(outcome.last_insert_rowid())
}

/// Stored results, newest first.
pub async fn list_results(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<InterviewResultRow>, sqlx::Error> {
    sqlx::query_as::<_, InterviewResultRow>(
        "SELECT * FROM interview_results ORDER BY created_at DESC, id DESC LIMIT ?",
    )
    .bind(limit.clamp(1, MAX_LIST_LIMIT))
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_insert_then_list_newest_first() {
        let pool = test_pool().await;

        let first = insert_result(
            &pool,
            NewInterviewResult {
                name: "Jane",
                email: "jane@example.com",
                resume_email: Some("jane.doe@example.com"),
                scorecard: "Overall Score: 7",
            },
        )
        .await
        .unwrap();
        let second = insert_result(
            &pool,
            NewInterviewResult {
                name: "Ravi",
                email: "ravi@example.com",
                resume_email: None,
                scorecard: "Overall Score: 8",
            },
        )
        .await
        .unwrap();
        assert!(second > first);

        let rows = list_results(&pool, 10).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, second);
        assert_eq!(rows[0].name, "Ravi");
        assert_eq!(rows[0].resume_email, None);
        assert_eq!(rows[1].resume_email.as_deref(), Some("jane.doe@example.com"));
    }

    #[tokio::test]
    async fn test_list_limit_is_clamped() {
        let pool = test_pool().await;
        for i in 0..3 {
            insert_result(
                &pool,
                NewInterviewResult {
                    name: "Jane",
                    email: "jane@example.com",
                    resume_email: None,
                    scorecard: &format!("run {i}"),
                },
            )
            .await
            .unwrap();
        }

        assert_eq!(list_results(&pool, 0).await.unwrap().len(), 1);
        assert_eq!(list_results(&pool, 2).await.unwrap().len(), 2);
    }
}
