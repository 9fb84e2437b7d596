use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::interview::validation::EmailPolicy;
use crate::llm_client::LanguageModel;
use crate::scorecard::mailer::ScorecardMailer;
use crate::usage::UsagePolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Model gateway, built once in `main`. Tests swap in a scripted model.
    pub llm: Arc<dyn LanguageModel>,
    /// Scorecard delivery; serializes its own sends.
    pub mailer: Arc<dyn ScorecardMailer>,
    pub config: Config,
    pub email_policy: EmailPolicy,
    pub usage_policy: UsagePolicy,
}
