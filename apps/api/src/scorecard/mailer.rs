//! Scorecard delivery over SMTP.
//!
//! Sends share one authenticated transport, so they are serialized through a
//! mutex owned by the mailer. Delivery failures never fail an evaluation; the
//! caller reports them as `email_sent: false`.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::config::Config;
use crate::scorecard::formatter::{escape_html, render_html, render_plain, FeedbackBlock};
use crate::scorecard::scores::ScoreCard;

pub const SCORECARD_SUBJECT: &str = "Your AI Interview Scorecard";
const SENDER_NAME: &str = "AI Interview System";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Email delivery is not configured")]
    NotConfigured,

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Message build error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A composed scorecard message: HTML body plus plain-text fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ScorecardEmail {
    pub to_name: String,
    pub to_address: String,
    pub subject: String,
    pub plain: String,
    pub html: String,
}

impl ScorecardEmail {
    pub fn compose(name: &str, to: &str, scores: &ScoreCard, blocks: &[FeedbackBlock]) -> Self {
        let metric_rows: String = scores
            .rows()
            .map(|(label, value)| {
                format!(
                    "<tr><td style=\"padding:6px 12px;border:1px solid #ddd;\">{label}</td>\
                     <td style=\"padding:6px 12px;border:1px solid #ddd;font-weight:bold;\">{}/10</td></tr>",
                    escape_html(value)
                )
            })
            .collect();

        let html = format!(
            "<html><body style=\"font-family:Arial,sans-serif;color:#222;\">\
             <p>Hi {name},</p>\
             <p>Thank you for completing the AI Interview. Here is your scorecard:</p>\
             <table style=\"border-collapse:collapse;margin:12px 0;\">{metric_rows}</table>\
             {sections}\
             <p style=\"margin-top:24px;\">Best regards,<br>{SENDER_NAME}</p>\
             </body></html>",
            name = escape_html(name),
            sections = render_html(blocks),
        );

        let metric_lines: String = scores
            .rows()
            .map(|(label, value)| format!("{label}: {value}/10\n"))
            .collect();

        let plain = format!(
            "Hi {name},\n\nThank you for completing the AI Interview.\n\n\
             Here is your scorecard:\n\n{metric_lines}\n{}\nBest regards,\n{SENDER_NAME}\n",
            render_plain(blocks)
        );

        Self {
            to_name: name.to_string(),
            to_address: to.to_string(),
            subject: SCORECARD_SUBJECT.to_string(),
            plain,
            html,
        }
    }
}

#[async_trait]
pub trait ScorecardMailer: Send + Sync {
    async fn send(&self, email: &ScorecardEmail) -> Result<(), DeliveryError>;
}

struct SmtpSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

/// SMTP mailer built once at startup. Disabled when no credentials are configured.
pub struct SmtpMailer {
    sender: Option<SmtpSender>,
    send_lock: Mutex<()>,
}

impl SmtpMailer {
    pub fn from_config(config: &Config) -> Result<Self, DeliveryError> {
        if !config.email_configured() {
            warn!("EMAIL_USER / EMAIL_APP_PASSWORD not set; scorecard e-mails are disabled");
            return Ok(Self::disabled());
        }

        let from = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            config.email_user.parse::<Address>()?,
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.email_user.clone(),
                config.email_app_password.clone(),
            ))
            .build();

        info!("SMTP mailer configured for {}:{}", config.smtp_host, config.smtp_port);
        Ok(Self {
            sender: Some(SmtpSender { transport, from }),
            send_lock: Mutex::new(()),
        })
    }

    pub fn disabled() -> Self {
        Self {
            sender: None,
            send_lock: Mutex::new(()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

#[async_trait]
impl ScorecardMailer for SmtpMailer {
    async fn send(&self, email: &ScorecardEmail) -> Result<(), DeliveryError> {
        let sender = self.sender.as_ref().ok_or(DeliveryError::NotConfigured)?;

        let to = Mailbox::new(
            Some(email.to_name.clone()),
            email.to_address.parse::<Address>()?,
        );
        let message = Message::builder()
            .from(sender.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.plain.clone(),
                email.html.clone(),
            ))?;

        let _guard = self.send_lock.lock().await;
        sender.transport.send(message).await?;

        info!("Scorecard e-mailed to {}", email.to_address);
        Ok(())
    }
}

/// In-memory mailer for handler tests.
#[cfg(test)]
pub mod test_support {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct RecordingMailer {
        pub fail: bool,
        pub sent: Mutex<Vec<ScorecardEmail>>,
    }

    impl RecordingMailer {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn sent(&self) -> Vec<ScorecardEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScorecardMailer for RecordingMailer {
        async fn send(&self, email: &ScorecardEmail) -> Result<(), DeliveryError> {
            if self.fail {
                return Err(DeliveryError::NotConfigured);
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }
}
