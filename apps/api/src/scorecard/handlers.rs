//! Axum route handlers for evaluation, scorecard delivery and the admin listing.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::session::{evaluate_transcript, Evaluation};
use crate::models::interview::InterviewResultRow;
use crate::scorecard::formatter::format;
use crate::scorecard::mailer::{ScorecardEmail, ScorecardMailer};
use crate::scorecard::scores::ScoreCard;
use crate::scorecard::store::{insert_result, list_results, NewInterviewResult};
use crate::scorecard::transcript::AnswerRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub resume_email: Option<String>,
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    pub result_id: i64,
    pub evaluation: Evaluation,
    pub email_sent: bool,
}

#[derive(Debug, Deserialize)]
pub struct SendScorecardRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub scorecard: String,
}

#[derive(Debug, Serialize)]
pub struct SendScorecardResponse {
    pub success: bool,
    pub email_sent: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

const DEFAULT_LIST_LIMIT: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/evaluate
///
/// Scores the transcript, stores the scorecard and e-mails it. A delivery
/// failure only flips `email_sent`; the stored result stands.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    let email = state.email_policy.validate(&request.email)?;
    if request.answers.is_empty() {
        return Err(AppError::Validation("answers cannot be empty".to_string()));
    }
    let resume_email = request
        .resume_email
        .as_deref()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty());

    let evaluation = evaluate_transcript(state.llm.as_ref(), &request.answers).await?;

    let result_id = insert_result(
        &state.db,
        NewInterviewResult {
            name,
            email: &email,
            resume_email: resume_email.as_deref(),
            scorecard: &evaluation.raw_feedback,
        },
    )
    .await?;
    info!("Stored interview result {result_id} for <{email}>");

    let message = ScorecardEmail::compose(name, &email, &evaluation.scores, &evaluation.sections);
    let email_sent = deliver(state.mailer.as_ref(), &message).await;

    Ok(Json(EvaluateResponse {
        success: true,
        result_id,
        evaluation,
        email_sent,
    }))
}

/// POST /api/v1/send-scorecard
///
/// Re-sends a raw scorecard, parsing it the same way as a fresh evaluation.
pub async fn handle_send_scorecard(
    State(state): State<AppState>,
    Json(request): Json<SendScorecardRequest>,
) -> Result<Json<SendScorecardResponse>, AppError> {
    let name = request.name.trim();
    if name.is_empty() || request.email.trim().is_empty() || request.scorecard.trim().is_empty() {
        return Err(AppError::Validation("Missing data".to_string()));
    }
    let email = state.email_policy.validate(&request.email)?;

    let message = ScorecardEmail::compose(
        name,
        &email,
        &ScoreCard::from_feedback(&request.scorecard),
        &format(&request.scorecard),
    );
    let email_sent = deliver(state.mailer.as_ref(), &message).await;

    Ok(Json(SendScorecardResponse {
        success: email_sent,
        email_sent,
    }))
}

/// GET /api/v1/admin/results?limit=N
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<InterviewResultRow>>, AppError> {
    let rows = list_results(&state.db, query.limit.unwrap_or(DEFAULT_LIST_LIMIT)).await?;
    Ok(Json(rows))
}

async fn deliver(mailer: &dyn ScorecardMailer, message: &ScorecardEmail) -> bool {
    match mailer.send(message).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Scorecard delivery to <{}> failed: {e}", message.to_address);
            false
        }
    }
}
