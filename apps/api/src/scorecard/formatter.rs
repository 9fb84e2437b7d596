//! Evaluation formatting: turns free-form evaluator text into presentation blocks.
//!
//! Metric lines are dropped here because the metrics table already shows them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scorecard::scores::Metric;

/// "(0-10): 7" after a metric label; a range, then at most a separator and a number.
static SCORE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(\s*\d+\s*[-–]\s*\d+\s*\)[\s:\-–*_]*(?:\d+(?:\.\d+)?(?:\s*/\s*\d+)?)?\s*$")
        .expect("valid score range regex")
});

/// Lines that start a section.
const HEADING_PREFIXES: &[&str] = &["summary", "strength", "areas", "recommend"];

/// Whole lines that carry no content of their own.
const REDUNDANT_LINES: &[&str] = &[
    "none",
    "n/a",
    "scores",
    "score breakdown",
    "scorecard",
    "evaluation",
    "interview evaluation",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum FeedbackBlock {
    Heading(String),
    Paragraph(String),
}

impl FeedbackBlock {
    pub fn text(&self) -> &str {
        match self {
            FeedbackBlock::Heading(t) | FeedbackBlock::Paragraph(t) => t,
        }
    }
}

/// Splits feedback into headings and paragraphs in document order.
pub fn format(feedback: &str) -> Vec<FeedbackBlock> {
    feedback
        .lines()
        .map(clean_markdown)
        .filter(|line| !line.is_empty() && !is_redundant(line))
        .map(classify_line)
        .collect()
}

/// Drops heading markers and bold markers, keeping the inner text.
fn clean_markdown(line: &str) -> String {
    let line = line.trim().trim_start_matches('#').trim();
    line.replace("**", "").replace("__", "").trim().to_string()
}

fn is_redundant(line: &str) -> bool {
    let lower = line.to_lowercase();
    let bare = lower.trim_end_matches(':').trim();

    if REDUNDANT_LINES.contains(&bare) {
        return true;
    }
    // horizontal rules
    if line.chars().all(|c| matches!(c, '-' | '*' | '_' | '=')) {
        return true;
    }
    restates_metric(&lower)
}

/// "Communication: 8/10", "- Overall Score - 7", "Grammar:" and the like.
fn restates_metric(lower: &str) -> bool {
    let body = lower.trim_start_matches(|c: char| matches!(c, '-' | '*' | '•' | ' '));
    Metric::ALL.iter().any(|metric| {
        body.strip_prefix(&metric.label().to_lowercase())
            .map(|rest| {
                let rest = rest.trim_start_matches(|c: char| {
                    c.is_whitespace() || matches!(c, ':' | '-' | '–' | '*' | '_')
                });
                rest.is_empty()
                    || rest.starts_with(|c: char| c.is_ascii_digit())
                    || SCORE_RANGE.is_match(rest)
            })
            .unwrap_or(false)
    })
}

fn classify_line(line: String) -> FeedbackBlock {
    let lower = line.to_lowercase();
    if HEADING_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        let heading = line.trim_end_matches(':').trim().to_string();
        FeedbackBlock::Heading(heading)
    } else {
        FeedbackBlock::Paragraph(line)
    }
}

/// Styled HTML for the scorecard e-mail.
pub fn render_html(blocks: &[FeedbackBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            FeedbackBlock::Heading(text) => format!(
                "<h3 style=\"color:#1f3b73;margin:18px 0 6px;font-size:16px;\">{}</h3>",
                escape_html(text)
            ),
            FeedbackBlock::Paragraph(text) => format!(
                "<p style=\"margin:4px 0;line-height:1.5;color:#333;\">{}</p>",
                escape_html(text)
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text rendering; a blank line precedes each heading.
pub fn render_plain(blocks: &[FeedbackBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        if matches!(block, FeedbackBlock::Heading(_)) && !out.is_empty() {
            out.push('\n');
        }
        out.push_str(block.text());
        out.push('\n');
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
