//! Axum route handlers for question generation and profile summaries.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::classifier::ExperienceTier;
use crate::interview::resume::{discover_email, extract_resume_text, record_candidate};
use crate::interview::session::{generate_questions, summarize_profile};
use crate::models::interview::CandidateRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// An uploaded file pulled out of the multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

/// Multipart form for `POST /api/v1/generate-questions`.
#[derive(Debug, Default)]
pub struct GenerateQuestionsForm {
    pub email: String,
    pub name: String,
    pub job_description: String,
    pub resume: Option<UploadedFile>,
}

impl GenerateQuestionsForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed form data: {e}")))?
        {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "resume" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read resume: {e}")))?;
                    form.resume = Some(UploadedFile {
                        bytes,
                        file_name,
                        content_type,
                    });
                }
                "email" | "name" | "job_description" => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Could not read {field_name}: {e}")))?;
                    match field_name.as_str() {
                        "email" => form.email = value,
                        "name" => form.name = value.trim().to_string(),
                        _ => form.job_description = value,
                    }
                }
                // unknown fields are ignored
                _ => {}
            }
        }

        Ok(form)
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub success: bool,
    pub tier: ExperienceTier,
    pub questions: Vec<String>,
    /// Address found inside the résumé, if any.
    pub resume_email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileSummaryRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileSummaryResponse {
    pub success: bool,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate-questions
///
/// Validates the contact e-mail, enforces the per-e-mail interview limit,
/// reads the résumé and returns exactly five questions for the derived tier.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let form = GenerateQuestionsForm::from_multipart(multipart).await?;

    let email = state.email_policy.validate(&form.email)?;
    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("Resume file is required".to_string()))?;

    let completed = state.usage_policy.enforce(&state.db, &email).await?;
    info!(
        "Question session for '{}' <{}> ({} of {} interviews used)",
        form.name,
        email,
        completed,
        state.usage_policy.limit()
    );

    let resume_text = extract_resume_text(
        resume.bytes,
        resume.content_type.as_deref(),
        resume.file_name.as_deref(),
    )
    .await?;

    let resume_email = discover_email(&resume_text);
    if let Some(found) = &resume_email {
        record_candidate(&state.db, found).await?;
    }

    let set = generate_questions(state.llm.as_ref(), &resume_text, &form.job_description).await?;

    Ok(Json(GenerateQuestionsResponse {
        success: true,
        tier: set.tier,
        questions: set.questions,
        resume_email,
    }))
}

/// POST /api/v1/profile-summary
pub async fn handle_profile_summary(
    State(state): State<AppState>,
    Json(request): Json<ProfileSummaryRequest>,
) -> Result<Json<ProfileSummaryResponse>, AppError> {
    if request.resume.trim().is_empty() && request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "resume or job_description must be provided".to_string(),
        ));
    }

    let summary =
        summarize_profile(state.llm.as_ref(), &request.resume, &request.job_description).await?;

    Ok(Json(ProfileSummaryResponse {
        success: true,
        summary,
    }))
}

/// GET /api/v1/admin/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let rows = sqlx::query_as::<_, CandidateRow>(
        "SELECT * FROM candidates ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}
