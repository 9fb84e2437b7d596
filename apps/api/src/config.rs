use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sender account. Empty disables scorecard delivery.
    pub email_user: String,
    pub email_app_password: String,
    /// Lowercased domains a candidate e-mail must belong to. Empty = any non-disposable domain.
    pub allowed_email_domains: Vec<String>,
    pub max_interviews_per_email: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL", "sqlite://interview.db"),
            openai_api_key: require_env("OPENAI_API_KEY")?.trim().to_string(),
            openai_base_url: optional_env("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: optional_env("OPENAI_MODEL", "gpt-3.5-turbo"),
            smtp_host: optional_env("SMTP_HOST", "smtp.gmail.com"),
            smtp_port: optional_env("SMTP_PORT", "465")
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            email_user: optional_env("EMAIL_USER", ""),
            email_app_password: optional_env("EMAIL_APP_PASSWORD", ""),
            allowed_email_domains: parse_domain_list(&optional_env("ALLOWED_EMAIL_DOMAINS", "")),
            max_interviews_per_email: optional_env("MAX_INTERVIEWS_PER_EMAIL", "2")
                .parse::<i64>()
                .context("MAX_INTERVIEWS_PER_EMAIL must be an integer")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }

    /// Whether SMTP credentials are present.
    pub fn email_configured(&self) -> bool {
        !self.email_user.is_empty() && !self.email_app_password.is_empty()
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_domain_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().trim_start_matches('@').to_lowercase())
        .filter(|d| !d.is_empty())
        .collect()
}
