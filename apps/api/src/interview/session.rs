//! Interview session pipeline.
//!
//! Flow (questions): truncate inputs → classify tier → build prompt →
//!       model call → extract exactly five questions.
//! Flow (evaluation): render transcript → model call → extract scores →
//!       format sections.
//!
//! Nothing here touches storage or e-mail; handlers own those steps.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::classifier::{classify, ExperienceTier};
use crate::interview::prompt_builder::{build, build_evaluation_prompt, build_summary_prompt};
use crate::interview::questions::extract;
use crate::interview::sanitizer::{truncate, JOB_DESCRIPTION_CHAR_CAP, RESUME_CHAR_CAP};
use crate::llm_client::prompts::{EVALUATION_PROFILE, QUESTION_PROFILE, SUMMARY_PROFILE};
use crate::llm_client::LanguageModel;
use crate::scorecard::formatter::{format, FeedbackBlock};
use crate::scorecard::scores::ScoreCard;
use crate::scorecard::transcript::{render_transcript, AnswerRecord};

/// Résumé and job description for one session, already bounded.
#[derive(Debug, Clone)]
pub struct CandidateProfile {
    pub resume_text: String,
    pub job_description: String,
    pub tier: ExperienceTier,
}

impl CandidateProfile {
    pub fn new(resume_text: &str, job_description: &str) -> Self {
        let resume_text = truncate(resume_text, RESUME_CHAR_CAP);
        let job_description = truncate(job_description, JOB_DESCRIPTION_CHAR_CAP);
        let tier = classify(&job_description);
        Self {
            resume_text,
            job_description,
            tier,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionSet {
    pub tier: ExperienceTier,
    /// Always exactly five entries.
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub raw_feedback: String,
    pub scores: ScoreCard,
    pub sections: Vec<FeedbackBlock>,
}

impl Evaluation {
    pub fn from_feedback(raw_feedback: String) -> Self {
        Self {
            scores: ScoreCard::from_feedback(&raw_feedback),
            sections: format(&raw_feedback),
            raw_feedback,
        }
    }
}

pub async fn generate_questions(
    llm: &dyn LanguageModel,
    resume_text: &str,
    job_description: &str,
) -> Result<QuestionSet, AppError> {
    let profile = CandidateProfile::new(resume_text, job_description);
    info!(
        "Generating questions: tier={}, resume_chars={}, jd_chars={}",
        profile.tier,
        profile.resume_text.chars().count(),
        profile.job_description.chars().count()
    );

    let prompt = build(profile.tier, &profile.resume_text, &profile.job_description);
    let raw = llm.complete(&QUESTION_PROFILE.request(prompt)).await?;

    Ok(QuestionSet {
        tier: profile.tier,
        questions: extract(&raw),
    })
}

pub async fn summarize_profile(
    llm: &dyn LanguageModel,
    resume_text: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let profile = CandidateProfile::new(resume_text, job_description);
    let prompt = build_summary_prompt(&profile.resume_text, &profile.job_description);
    let summary = llm.complete(&SUMMARY_PROFILE.request(prompt)).await?;
    info!("Profile summarized ({} chars)", summary.chars().count());
    Ok(summary)
}

pub async fn evaluate_transcript(
    llm: &dyn LanguageModel,
    answers: &[AnswerRecord],
) -> Result<Evaluation, AppError> {
    let transcript = render_transcript(answers);
    info!(
        "Evaluating transcript: answers={}, chars={}",
        answers.len(),
        transcript.chars().count()
    );

    let prompt = build_evaluation_prompt(&transcript);
    let feedback = llm.complete(&EVALUATION_PROFILE.request(prompt)).await?;

    let evaluation = Evaluation::from_feedback(feedback);
    info!("Evaluation complete: overall={}", evaluation.scores.overall);
    Ok(evaluation)
}


#[cfg(test)]
mod tests {
    use super::test_support::ScriptedModel;
    use super::*;
    use crate::interview::prompts::SENIOR_INSTRUCTIONS;
    use crate::interview::questions::fallback_questions;
    use crate::llm_client::prompts::{EVALUATION_SYSTEM, QUESTION_SYSTEM};

    const FIVE_QUESTIONS: &str = "1. Tell me about yourself and your background.\n\
        2. How would you design an idempotent payments API?\n\
        3. How do you choose between Postgres and a key-value store?\n\
        4. How do you mentor engineers on your team?\n\
        5. Describe an outage you led the response for.";

    #[tokio::test]
    async fn test_senior_scenario_with_malformed_reply_falls_back() {
        let llm = ScriptedModel::replying("Sure! Here are some questions:\n1. Tell me about yourself.");

        let set = generate_questions(&llm, "", "Senior Backend Architect, 6+ years")
            .await
            .unwrap();

        assert_eq!(set.tier, ExperienceTier::Senior);
        assert_eq!(set.questions, fallback_questions());

        let request = llm.last_request();
        assert!(request.prompt.contains(SENIOR_INSTRUCTIONS));
        assert!(request.prompt.contains("Resume:\nNot provided"));
        assert_eq!(request.system, QUESTION_SYSTEM);
        assert_eq!(request.max_tokens, 500);
    }

    #[tokio::test]
    async fn test_well_formed_reply_is_returned() {
        let llm = ScriptedModel::replying(FIVE_QUESTIONS);

        let set = generate_questions(&llm, "Rust, Kafka", "Backend engineer, 3-5 years")
            .await
            .unwrap();

        assert_eq!(set.tier, ExperienceTier::Mid);
        assert_eq!(set.questions.len(), 5);
        assert_eq!(set.questions[1], "How would you design an idempotent payments API?");
    }

    #[tokio::test]
    async fn test_inputs_are_truncated_before_prompting() {
        let llm = ScriptedModel::replying(FIVE_QUESTIONS);
        let resume = "r".repeat(RESUME_CHAR_CAP + 500);

        generate_questions(&llm, &resume, "jd").await.unwrap();

        let prompt = llm.last_request().prompt;
        assert!(prompt.contains(&"r".repeat(RESUME_CHAR_CAP)));
        assert!(!prompt.contains(&"r".repeat(RESUME_CHAR_CAP + 1)));
        assert!(prompt.contains("[Content truncated for processing]"));
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let llm = ScriptedModel::failing();
        let err = generate_questions(&llm, "resume", "jd").await.unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_summary_uses_summary_profile() {
        let llm = ScriptedModel::replying("- Skills: Rust\n- Experience: 4 years");
        let summary = summarize_profile(&llm, "Rust engineer", "").await.unwrap();

        assert_eq!(summary, "- Skills: Rust\n- Experience: 4 years");
        let request = llm.last_request();
        assert_eq!(request.max_tokens, 400);
        assert!(request.prompt.contains("Job Description:\nNot provided"));
    }

    #[tokio::test]
    async fn test_evaluation_extracts_scores_and_sections() {
        let llm = ScriptedModel::replying(
            "Overall Score: 7/10\nCommunication: 8\nConfidence: 6\n\
             Technical Knowledge: 7\nGrammar: 9\n\n**Summary**\nSolid answers.",
        );
        let answers = vec![AnswerRecord {
            question: "Tell me about yourself.".to_string(),
            answer: "I build data pipelines in Rust.".to_string(),
            word_count: Some(6),
        }];

        let evaluation = evaluate_transcript(&llm, &answers).await.unwrap();

        assert_eq!(evaluation.scores.overall, "7");
        assert_eq!(evaluation.scores.answer_quality, "0");
        assert_eq!(
            evaluation.sections,
            vec![
                FeedbackBlock::Heading("Summary".to_string()),
                FeedbackBlock::Paragraph("Solid answers.".to_string()),
            ]
        );

        let request = llm.last_request();
        assert_eq!(request.system, EVALUATION_SYSTEM);
        assert_eq!(request.max_tokens, 900);
        assert!(request.prompt.contains("Question 1: Tell me about yourself."));
        assert!(request.prompt.contains("Word Count: 6"));
    }
}
