//! Question extraction: reduces raw model output to exactly five questions.
//!
//! All-or-nothing: when the cleaned output does not hold exactly five
//! questions, the whole reply is discarded in favour of [`FALLBACK_QUESTIONS`].

use tracing::warn;

pub const QUESTION_COUNT: usize = 5;

/// Lines this short after marker stripping are fragments, not questions.
const MIN_QUESTION_CHARS: usize = 10;

pub const FALLBACK_QUESTIONS: [&str; QUESTION_COUNT] = [
    "Tell me about yourself and your professional background.",
    "Which skills from your resume are most relevant to this role?",
    "Explain a technical concept you know well.",
    "Describe a challenging problem you solved.",
    "What are your strengths and areas for improvement?",
];

pub fn fallback_questions() -> Vec<String> {
    FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Parses numbered model output into exactly five questions.
pub fn extract(raw: &str) -> Vec<String> {
    let questions: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_enumeration)
        .filter(|line| line.chars().count() > MIN_QUESTION_CHARS)
        .map(str::to_string)
        .collect();

    if questions.len() != QUESTION_COUNT {
        warn!(
            "Model returned {} usable questions, expected {}; using fallback set",
            questions.len(),
            QUESTION_COUNT
        );
        return fallback_questions();
    }

    questions
}

/// Strips leading digits, dots, dashes, parentheses and spaces.
fn strip_enumeration(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        c.is_ascii_digit() || matches!(c, '.' | '-' | '(' | ')' | ' ')
    })
    .trim()
}
