//! Résumé intake: turns an uploaded file into text and records the e-mail found in it.

use bytes::Bytes;
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::interview::sanitizer::normalize_whitespace;

static EMAIL_IN_TEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}")
        .expect("valid e-mail search regex")
});

#[derive(Debug, Clone, Copy, PartialEq)]
enum ResumeFormat {
    Pdf,
    PlainText,
}

fn detect_format(bytes: &[u8], content_type: Option<&str>, filename: Option<&str>) -> Option<ResumeFormat> {
    let filename = filename.map(str::to_lowercase).unwrap_or_default();
    let content_type = content_type.unwrap_or_default();

    if bytes.starts_with(b"%PDF") || content_type == "application/pdf" || filename.ends_with(".pdf") {
        Some(ResumeFormat::Pdf)
    } else if content_type.starts_with("text/plain") || filename.ends_with(".txt") {
        Some(ResumeFormat::PlainText)
    } else {
        None
    }
}

/// Extracts résumé text from an uploaded PDF or plain-text file.
///
/// PDF parsing is CPU-bound, so it runs on the blocking pool.
pub async fn extract_resume_text(
    bytes: Bytes,
    content_type: Option<&str>,
    filename: Option<&str>,
) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Resume file is empty".to_string()));
    }

    let text = match detect_format(&bytes, content_type, filename) {
        Some(ResumeFormat::Pdf) => {
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
            })
                .await
                .map_err(|e| {
                    warn!("PDF extraction aborted: {e}");
                    AppError::UnprocessableEntity("Resume PDF could not be read".to_string())
                })?
                .map_err(|e| {
                    warn!("PDF extraction failed: {e}");
                    AppError::UnprocessableEntity("Resume PDF could not be read".to_string())
                })?
        }
        Some(ResumeFormat::PlainText) => String::from_utf8_lossy(&bytes).into_owned(),
        None => {
            return Err(AppError::UnprocessableEntity(
                "Resume must be a PDF or plain-text file".to_string(),
            ))
        }
    };

    let text = normalize_whitespace(&text);
    info!("Extracted {} resume characters", text.chars().count());
    Ok(text)
}

/// First e-mail address written in the résumé, lowercased.
pub fn discover_email(text: &str) -> Option<String> {
    EMAIL_IN_TEXT
        .find(text)
        .map(|m| m.as_str().trim_end_matches('.').to_lowercase())
}

/// Records a résumé e-mail. Already-known addresses are left untouched.
pub async fn record_candidate(pool: &SqlitePool, resume_email: &str) -> Result<(), AppError> {
    sqlx::query("INSERT OR IGNORE INTO candidates (resume_email, created_at) VALUES (?, ?)")
        .bind(resume_email)
        .bind(Utc::now())
        .execute(pool)
        .await?;
    Ok(())
}
