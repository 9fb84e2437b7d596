mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod models;
mod routes;
mod scorecard;
mod state;
mod usage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::interview::validation::EmailPolicy;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scorecard::mailer::SmtpMailer;
use crate::state::AppState;
use crate::usage::UsagePolicy;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interviewer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize SQLite (schema created on first run)
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openai_api_key.clone(),
        &config.openai_base_url,
        config.openai_model.clone(),
    )?;
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize SMTP mailer (disabled when credentials are absent)
    let mailer = SmtpMailer::from_config(&config)?;
    info!(
        "Scorecard delivery: {}",
        if mailer.is_enabled() { "enabled" } else { "disabled" }
    );

    let email_policy = EmailPolicy::new(config.allowed_email_domains.clone());
    let usage_policy = UsagePolicy::new(config.max_interviews_per_email);
    info!(
        "Interview limit: {} per email, domain allowlist: {}",
        usage_policy.limit(),
        if email_policy.allowed_domains.is_empty() {
            "any".to_string()
        } else {
            email_policy.allowed_domains.join(", ")
        }
    );

    // Build app state
    let state = AppState {
        db,
        llm: Arc::new(llm),
        mailer: Arc::new(mailer),
        config: config.clone(),
        email_policy,
        usage_policy,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
