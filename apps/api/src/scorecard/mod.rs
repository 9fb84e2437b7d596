// Evaluation output: transcript rendering, metric extraction, section
// formatting, persistence and e-mail delivery of the scorecard.

pub mod formatter;
pub mod handlers;
pub mod mailer;
pub mod scores;
pub mod store;
pub mod transcript;
