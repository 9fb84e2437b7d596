use serde::{Deserialize, Serialize};

use crate::interview::sanitizer::{truncate, TRANSCRIPT_CHAR_CAP};

/// One answered question from the interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    #[serde(default)]
    pub answer: String,
    /// Sent by the client; recomputed from `answer` when absent.
    #[serde(default)]
    pub word_count: Option<u32>,
}

impl AnswerRecord {
    pub fn word_count(&self) -> u32 {
        self.word_count
            .unwrap_or_else(|| self.answer.split_whitespace().count() as u32)
    }
}

/// Renders answers into the transcript the evaluator reads, capped at the transcript budget.
pub fn render_transcript(records: &[AnswerRecord]) -> String {
    let transcript: String = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Question {}: {}\nAnswer: {}\nWord Count: {}\n---\n",
                i + 1,
                r.question.trim(),
                r.answer.trim(),
                r.word_count()
            )
        })
        .collect();

    truncate(&transcript, TRANSCRIPT_CHAR_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::sanitizer::TRUNCATION_MARKER;

    #[test]
    fn test_transcript_blocks_in_order() {
        let records = vec![
            AnswerRecord {
                question: "Tell me about yourself.".to_string(),
                answer: "I build backend systems.".to_string(),
                word_count: Some(4),
            },
            AnswerRecord {
                question: "What is a mutex?".to_string(),
                answer: "A lock.".to_string(),
                word_count: None,
            },
        ];

        assert_eq!(
            render_transcript(&records),
            "Question 1: Tell me about yourself.\nAnswer: I build backend systems.\nWord Count: 4\n---\n\
             Question 2: What is a mutex?\nAnswer: A lock.\nWord Count: 2\n---\n"
        );
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let record: AnswerRecord =
            serde_json::from_str(r#"{"question": "Why Rust?"}"#).unwrap();
        assert_eq!(record.answer, "");
        assert_eq!(record.word_count(), 0);
    }

    #[test]
    fn test_long_transcript_is_capped() {
        let records = vec![AnswerRecord {
            question: "Q".to_string(),
            answer: "word ".repeat(3000),
            word_count: None,
        }];
        let transcript = render_transcript(&records);
        assert!(transcript.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            transcript.chars().count(),
            TRANSCRIPT_CHAR_CAP + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(render_transcript(&[]), "");
    }
}
