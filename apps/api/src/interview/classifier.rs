//! Experience classifier: derives a seniority tier from job-description wording.
//!
//! A best-effort heuristic: rules are tested in order and the first match wins,
//! so text carrying several signals resolves to the earliest rule.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Candidate seniority. Drives which instruction block the question prompt carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceTier {
    Fresher,
    #[default]
    Mid,
    Senior,
}

impl ExperienceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceTier::Fresher => "fresher",
            ExperienceTier::Mid => "mid",
            ExperienceTier::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "a-b year(s)" with `-`, `–` or "to" between the bounds.
macro_rules! years {
    ($lo:literal, $hi:literal) => {
        concat!(r"\b", $lo, r"\s*(?:-|–|to)\s*", $hi, r"\s*years?\b")
    };
}

static RULES: Lazy<Vec<(Regex, ExperienceTier)>> = Lazy::new(|| {
    let fresher = [r"\bfresher", years!("0", "1"), years!("0", "2"), r"\bintern(?:ship)?s?\b"];
    let mid = [years!("2", "3"), years!("3", "5")];
    let senior = [years!("5", "7"), r"\bsenior\b", r"\blead", r"\barchitect"];

    [
        (fresher.join("|"), ExperienceTier::Fresher),
        (mid.join("|"), ExperienceTier::Mid),
        (senior.join("|"), ExperienceTier::Senior),
    ]
    .into_iter()
    .map(|(pattern, tier)| (Regex::new(&pattern).expect("valid tier regex"), tier))
    .collect()
});

/// Classifies a job description into a tier. Defaults to `Mid` when nothing matches.
pub fn classify(job_description: &str) -> ExperienceTier {
    let text = job_description.to_lowercase();
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&text))
        .map(|(_, tier)| *tier)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_years_defaults_to_mid() {
        assert_eq!(classify("3 years experience required"), ExperienceTier::Mid);
    }

    #[test]
    fn test_fresher_signals() {
        assert_eq!(classify("fresher, 0-1 year"), ExperienceTier::Fresher);
        assert_eq!(classify("Graduate role, 0 - 2 years"), ExperienceTier::Fresher);
        assert_eq!(classify("Summer Internship in data engineering"), ExperienceTier::Fresher);
        assert_eq!(classify("Hiring interns for Q3"), ExperienceTier::Fresher);
    }

    #[test]
    fn test_intern_does_not_match_internal_or_international() {
        assert_eq!(classify("Build internal tools for an international team"), ExperienceTier::Mid);
    }

    #[test]
    fn test_mid_ranges() {
        assert_eq!(classify("Backend engineer with 2-3 years of Go"), ExperienceTier::Mid);
        assert_eq!(classify("3–5 years in data pipelines"), ExperienceTier::Mid);
        assert_eq!(classify("3 to 5 years experience"), ExperienceTier::Mid);
    }

    #[test]
    fn test_senior_signals() {
        assert_eq!(classify("looking for a lead architect"), ExperienceTier::Senior);
        assert_eq!(classify("Senior Backend Architect, 6+ years"), ExperienceTier::Senior);
        assert_eq!(classify("5-7 years building payment systems"), ExperienceTier::Senior);
        assert_eq!(classify("Tech Lead, platform"), ExperienceTier::Senior);
    }

    #[test]
    fn test_rule_order_breaks_ties() {
        // Mentions both an internship and a senior mentor: fresher rule is tested first.
        assert_eq!(
            classify("Internship under a senior engineer"),
            ExperienceTier::Fresher
        );
        // Mid range wins over the later senior keyword.
        assert_eq!(classify("3-5 years, reporting to the lead"), ExperienceTier::Mid);
    }

    #[test]
    fn test_no_signal_defaults_to_mid() {
        assert_eq!(classify(""), ExperienceTier::Mid);
        assert_eq!(classify("Rust developer wanted"), ExperienceTier::Mid);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify("SENIOR ENGINEER"), ExperienceTier::Senior);
        assert_eq!(classify("FRESHER"), ExperienceTier::Fresher);
    }

    #[test]
    fn test_tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ExperienceTier::Senior).unwrap(), "\"senior\"");
        assert_eq!(ExperienceTier::Fresher.to_string(), "fresher");
    }
}
