//! Experience extractor — years-of-experience, seniority and entry-level phrases.
//!
//! Every non-overlapping occurrence in the job text is its own requirement. Repeating a
//! phrase in the job text repeats it in the report, so emphasis weighs proportionally.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::matching::report::CategoryMatchResult;

/// Weight of one experience requirement.
pub const EXPERIENCE_WEIGHT: f64 = 2.5;

const YEARS_PATTERN: &str = r"(?i)\b(\d+)\+?\s*(?:years?|yrs?)(?:\s+of)?\s+experience\b";
const LEVEL_PATTERN: &str = r"(?i)\b(junior|mid|senior|lead|principal)\b";
const ENTRY_PATTERN: &str = r"(?i)\b(internship|entry[\s-]level)\b";
/// Looser resume-side check for a years requirement: "<N> years" without "experience".
const YEARS_MENTION_PATTERN: &str = r"(?i)\b(\d+)\+?\s*(?:years?|yrs?)\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceKind {
    Years,
    Level,
    Entry,
}

/// One experience phrase found in the job text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub kind: ExperienceKind,
    /// The whole matched substring, e.g. "5+ years of experience".
    pub raw_text: String,
    /// First capture: the year count, the level word, or the entry phrase.
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ExperienceExtractor {
    patterns: Vec<(ExperienceKind, Regex)>,
    years_mention: Regex,
}

impl ExperienceExtractor {
    pub fn new() -> Result<Self, MatchError> {
        Ok(Self {
            patterns: vec![
                (ExperienceKind::Years, Regex::new(YEARS_PATTERN)?),
                (ExperienceKind::Level, Regex::new(LEVEL_PATTERN)?),
                (ExperienceKind::Entry, Regex::new(ENTRY_PATTERN)?),
            ],
            years_mention: Regex::new(YEARS_MENTION_PATTERN)?,
        })
    }

    /// All requirements in the job text, grouped by kind (years, level, entry) and
    /// in text order within each kind.
    pub fn extract(&self, job_text: &str) -> Vec<ExperienceRequirement> {
        let mut found = Vec::new();
        for (kind, pattern) in &self.patterns {
            for caps in pattern.captures_iter(job_text) {
                let raw_text = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                let value = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                found.push(ExperienceRequirement {
                    kind: *kind,
                    raw_text: raw_text.to_string(),
                    value: value.to_string(),
                });
            }
        }
        found
    }

    /// True when the resume covers `requirement`: the exact phrase appears, or for a
    /// years requirement, the same count is mentioned next to "year(s)"/"yr(s)".
    pub fn is_satisfied(&self, requirement: &ExperienceRequirement, resume_text: &str) -> bool {
        if resume_text.contains(&requirement.raw_text) {
            return true;
        }
        requirement.kind == ExperienceKind::Years
            && self
                .years_mention
                .captures_iter(resume_text)
                .any(|caps| caps.get(1).map(|m| m.as_str()) == Some(requirement.value.as_str()))
    }

    /// Classifies each job requirement independently. Duplicates are kept.
    pub fn classify(&self, resume_text: &str, job_text: &str) -> CategoryMatchResult {
        let mut result = CategoryMatchResult::default();
        for requirement in self.extract(job_text) {
            if self.is_satisfied(&requirement, resume_text) {
                result.matched.push(requirement.raw_text);
            } else {
                result.missing.push(requirement.raw_text);
            }
        }
        result
    }
}
