//! Score extraction: best-effort numeric metrics from free-form evaluator text.
//!
//! Each label is searched independently. A missing or malformed label yields
//! `"0"` for that metric; nothing here ever fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Returned for a metric the evaluator did not report.
pub const MISSING_SCORE: &str = "0";

/// The metrics the evaluation prompt asks for, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Overall,
    Communication,
    Confidence,
    Technical,
    Grammar,
    AnswerQuality,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Overall,
        Metric::Communication,
        Metric::Confidence,
        Metric::Technical,
        Metric::Grammar,
        Metric::AnswerQuality,
    ];

    /// The label the evaluator writes in front of the number.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Overall => "Overall Score",
            Metric::Communication => "Communication",
            Metric::Confidence => "Confidence",
            Metric::Technical => "Technical Knowledge",
            Metric::Grammar => "Grammar",
            Metric::AnswerQuality => "Answer Quality",
        }
    }
}

fn score_pattern(label: &str) -> Regex {
    // label, optional markdown emphasis, optional ':' or '-', then a decimal number on the same line
    let pattern = format!(
        r"(?i){}[ \t*_]*[:\-–]?[ \t*_]*(\d+(?:\.\d+)?)",
        regex::escape(label)
    );
    Regex::new(&pattern).expect("escaped label always forms a valid regex")
}

static METRIC_PATTERNS: Lazy<Vec<(Metric, Regex)>> = Lazy::new(|| {
    Metric::ALL
        .iter()
        .map(|m| (*m, score_pattern(m.label())))
        .collect()
});

fn first_number(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| MISSING_SCORE.to_string())
}

/// Finds the first number written after `label`, or `"0"`.
pub fn extract_score(label: &str, text: &str) -> String {
    first_number(&score_pattern(label), text)
}

/// Numeric metrics pulled from one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreCard {
    pub overall: String,
    pub communication: String,
    pub confidence: String,
    pub technical: String,
    pub grammar: String,
    pub answer_quality: String,
}

impl ScoreCard {
    pub fn from_feedback(text: &str) -> Self {
        let mut card = Self::default();
        for (metric, pattern) in METRIC_PATTERNS.iter() {
            let value = first_number(pattern, text);
            match metric {
                Metric::Overall => card.overall = value,
                Metric::Communication => card.communication = value,
                Metric::Confidence => card.confidence = value,
                Metric::Technical => card.technical = value,
                Metric::Grammar => card.grammar = value,
                Metric::AnswerQuality => card.answer_quality = value,
            }
        }
        card
    }

    pub fn get(&self, metric: Metric) -> &str {
        match metric {
            Metric::Overall => &self.overall,
            Metric::Communication => &self.communication,
            Metric::Confidence => &self.confidence,
            Metric::Technical => &self.technical,
            Metric::Grammar => &self.grammar,
            Metric::AnswerQuality => &self.answer_quality,
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m.label(), self.get(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_with_denominator() {
        assert_eq!(extract_score("Overall Score", "Overall Score: 7.5/10"), "7.5");
    }

    #[test]
    fn test_absent_label_is_zero() {
        assert_eq!(extract_score("Grammar", "no grammar mentioned"), "0");
    }

    #[test]
    fn test_separators_and_case() {
        assert_eq!(extract_score("Confidence", "confidence - 6"), "6");
        assert_eq!(extract_score("Confidence", "CONFIDENCE 8"), "8");
        assert_eq!(extract_score("Grammar", "Grammar:9"), "9");
    }

    #[test]
    fn test_markdown_emphasis_tolerated() {
        assert_eq!(extract_score("Communication", "**Communication:** 8/10"), "8");
        assert_eq!(extract_score("Communication", "- **Communication**: 7"), "7");
    }

    #[test]
    fn test_first_match_wins() {
        let text = "Communication: 6\nLater note: Communication: 9";
        assert_eq!(extract_score("Communication", text), "6");
    }

    #[test]
    fn test_label_followed_by_words_is_zero() {
        assert_eq!(extract_score("Grammar", "Grammar was excellent throughout"), "0");
    }

    #[test]
    fn test_score_must_share_the_label_line() {
        assert_eq!(extract_score("Communication", "Communication:\n1. Speaks clearly"), "0");
        let card = ScoreCard::from_feedback("Grammar:\n- 3 tense slips\nConfidence: 6");
        assert_eq!(card.grammar, "0");
        assert_eq!(card.confidence, "6");
    }

    #[test]
    fn test_label_is_escaped() {
        assert_eq!(extract_score("Score (x)", "Score (x): 4"), "4");
    }

    #[test]
    fn test_scorecard_from_realistic_feedback() {
        let feedback = "\
## Interview Evaluation

**Overall Score:** 7.5/10
- Communication: 8/10
- Confidence - 7
- Technical Knowledge: 6.5
- Grammar: 9
- Answer Quality: 7

### Summary
The candidate communicated clearly.";

        let card = ScoreCard::from_feedback(feedback);
        assert_eq!(
            card,
            ScoreCard {
                overall: "7.5".to_string(),
                communication: "8".to_string(),
                confidence: "7".to_string(),
                technical: "6.5".to_string(),
                grammar: "9".to_string(),
                answer_quality: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_mislabeled_metric_defaults_to_zero() {
        let card = ScoreCard::from_feedback("Overall: 8\nTech Knowledge: 7\nGrammar: 6");
        assert_eq!(card.overall, "0");
        assert_eq!(card.technical, "0");
        assert_eq!(card.grammar, "6");
    }

    #[test]
    fn test_rows_follow_display_order() {
        let card = ScoreCard::from_feedback("Overall Score: 5");
        let rows: Vec<_> = card.rows().collect();
        assert_eq!(rows[0], ("Overall Score", "5"));
        assert_eq!(rows[5], ("Answer Quality", "0"));
        assert_eq!(rows.len(), 6);
    }
}
