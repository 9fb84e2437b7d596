// Shared system personas and sampling profiles for every model call.
// Prompt bodies live alongside the pipeline that sends them (interview::prompts).

use super::CompletionRequest;

/// System persona for candidate profile summarization.
pub const SUMMARY_SYSTEM: &str = "You summarize candidate profiles for interviews.";

/// System persona for interview question generation.
pub const QUESTION_SYSTEM: &str = "You are an expert HR interviewer. \
    Generate concise, role-specific interview questions.";

/// System persona for transcript evaluation.
pub const EVALUATION_SYSTEM: &str = "You are an expert interview evaluator. \
    Score candidates professionally and fairly.";

/// Sampling limits for one kind of call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallProfile {
    pub system: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CallProfile {
    /// Pairs this profile with a prompt body.
    pub fn request(&self, prompt: impl Into<String>) -> CompletionRequest {
        CompletionRequest {
            system: self.system.to_string(),
            prompt: prompt.into(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

pub const SUMMARY_PROFILE: CallProfile = CallProfile {
    system: SUMMARY_SYSTEM,
    temperature: 0.3,
    max_tokens: 400,
};

pub const QUESTION_PROFILE: CallProfile = CallProfile {
    system: QUESTION_SYSTEM,
    temperature: 0.6,
    max_tokens: 500,
};

pub const EVALUATION_PROFILE: CallProfile = CallProfile {
    system: EVALUATION_SYSTEM,
    temperature: 0.4,
    max_tokens: 900,
};

/// A tiny request that only proves the credentials and endpoint work.
pub fn connectivity_check() -> CompletionRequest {
    CompletionRequest {
        system: "You are a connectivity probe.".to_string(),
        prompt: "Reply with: API connection successful".to_string(),
        temperature: 0.0,
        max_tokens: 20,
    }
}
