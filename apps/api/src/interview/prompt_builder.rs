//! Prompt builder: assembles the instruction blocks into a single completion prompt.
//!
//! Every builder here is pure: identical inputs yield identical prompts.

use crate::interview::classifier::ExperienceTier;
use crate::interview::prompts::{
    EVALUATION_PROMPT_TEMPLATE, FRESHER_INSTRUCTIONS, MID_INSTRUCTIONS, NOT_PROVIDED,
    QUESTION_OUTPUT_RULES, QUESTION_PREAMBLE_TEMPLATE, SENIOR_INSTRUCTIONS,
    SUMMARY_PROMPT_TEMPLATE,
};

/// The instruction block for a tier.
pub fn tier_instructions(tier: ExperienceTier) -> &'static str {
    match tier {
        ExperienceTier::Fresher => FRESHER_INSTRUCTIONS,
        ExperienceTier::Mid => MID_INSTRUCTIONS,
        ExperienceTier::Senior => SENIOR_INSTRUCTIONS,
    }
}

/// Builds the question-generation prompt: preamble, tier block, output rules.
pub fn build(tier: ExperienceTier, resume_text: &str, job_description: &str) -> String {
    let preamble = render_template(
        QUESTION_PREAMBLE_TEMPLATE,
        &[
            ("tier", tier.as_str()),
            ("resume", or_not_provided(resume_text)),
            ("job_description", or_not_provided(job_description)),
        ],
    );

    format!(
        "{preamble}\n\n{}\n\n{QUESTION_OUTPUT_RULES}",
        tier_instructions(tier)
    )
}

/// Builds the profile summarization prompt.
pub fn build_summary_prompt(resume_text: &str, job_description: &str) -> String {
    render_template(
        SUMMARY_PROMPT_TEMPLATE,
        &[
            ("resume", or_not_provided(resume_text)),
            ("job_description", or_not_provided(job_description)),
        ],
    )
}

/// Builds the transcript evaluation prompt.
pub fn build_evaluation_prompt(transcript: &str) -> String {
    render_template(
        EVALUATION_PROMPT_TEMPLATE,
        &[("transcript", or_not_provided(transcript))],
    )
}

fn or_not_provided(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NOT_PROVIDED
    } else {
        trimmed
    }
}

/// Replaces `{key}` placeholders in one pass, so braces inside substituted
/// candidate text are never expanded again.
fn render_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let hit = vars.iter().find_map(|(key, value)| {
            after
                .strip_prefix(key)
                .and_then(|tail| tail.strip_prefix('}'))
                .map(|tail| (*value, tail))
        });
        match hit {
            Some((value, tail)) => {
                out.push_str(value);
                rest = tail;
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
