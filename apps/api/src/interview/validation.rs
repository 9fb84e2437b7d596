//! Contact validation: rejects e-mails before any model call is made.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

static EMAIL_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9\-]+(?:\.[a-z0-9\-]+)*\.[a-z]{2,}$")
        .expect("valid e-mail format regex")
});

/// Throwaway inbox providers.
const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "tempmail.com",
    "temp-mail.org",
    "yopmail.com",
    "trashmail.com",
    "getnada.com",
    "dispostable.com",
    "sharklasers.com",
    "throwawaymail.com",
    "maildrop.cc",
];

/// Which candidate e-mail domains are accepted.
#[derive(Debug, Clone, Default)]
pub struct EmailPolicy {
    /// Lowercased domains. Empty accepts any non-disposable domain.
    pub allowed_domains: Vec<String>,
}

impl EmailPolicy {
    pub fn new(allowed_domains: Vec<String>) -> Self {
        Self { allowed_domains }
    }

    /// Normalizes and validates a candidate e-mail, returning it lowercased.
    pub fn validate(&self, raw: &str) -> Result<String, AppError> {
        let email = raw.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if !EMAIL_FORMAT.is_match(&email) {
            return Err(AppError::Validation(format!("'{email}' is not a valid email address")));
        }

        let domain = email.rsplit('@').next().unwrap_or_default();
        if DISPOSABLE_DOMAINS
            .iter()
            .any(|d| domain == *d || domain.ends_with(&format!(".{d}")))
        {
            return Err(AppError::Validation(
                "Disposable email addresses are not accepted".to_string(),
            ));
        }
        if !self.allowed_domains.is_empty() && !self.allowed_domains.iter().any(|d| d == domain) {
            return Err(AppError::Validation(format!(
                "Email domain '{domain}' is not permitted"
            )));
        }

        Ok(email)
    }
}
