//! General keyword extractor — long non-taxonomy job words as a low-confidence signal.
//!
//! Resume checks here are plain substring containment, unlike the whole-word taxonomy
//! checks. "manage" in the job is satisfied by "management" in the resume.

use std::collections::HashSet;

use regex::Regex;

use crate::errors::MatchError;
use crate::matching::report::CategoryMatchResult;
use crate::matching::taxonomy::Taxonomy;

/// Base weight of a general keyword before the confidence factor.
pub const GENERAL_KEYWORD_WEIGHT: f64 = 1.0;
/// General keywords count for a fifth of their base weight.
pub const GENERAL_KEYWORD_FACTOR: f64 = 0.2;

/// Words must be longer than this to count toward `total_keywords`.
const MIN_DISTINCT_WORD_LEN: usize = 3;
/// Words must be longer than this to become general keywords.
const MIN_GENERAL_KEYWORD_LEN: usize = 4;

/// Words pulled from a job description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobKeywords {
    /// Distinct words longer than three characters, first occurrence order.
    pub distinct: Vec<String>,
    /// Words from `distinct` longer than four characters that are not taxonomy terms.
    pub general: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    word: Regex,
}

impl KeywordExtractor {
    pub fn new() -> Result<Self, MatchError> {
        Ok(Self {
            word: Regex::new(r"[0-9A-Za-z_]+")?,
        })
    }

    /// Tokenizes `job_text` (expected lowercase) and splits out the general keywords.
    ///
    /// Words are maximal runs of ASCII word characters; accented letters split a word
    /// ("résumé" → "r", "sum").
    pub fn extract(&self, job_text: &str, taxonomy: &Taxonomy) -> JobKeywords {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = self
            .word
            .find_iter(job_text)
            .map(|m| m.as_str())
            .filter(|w| w.len() > MIN_DISTINCT_WORD_LEN)
            .filter(|w| seen.insert(*w))
            .map(str::to_string)
            .collect();

        let general = distinct
            .iter()
            .filter(|w| w.len() > MIN_GENERAL_KEYWORD_LEN)
            .filter(|w| !taxonomy.contains_term(w))
            .cloned()
            .collect();

        JobKeywords { distinct, general }
    }

    /// Substring check of each general keyword against the resume.
    pub fn classify(&self, keywords: &[String], resume_text: &str) -> CategoryMatchResult {
        let (matched, missing): (Vec<String>, Vec<String>) = keywords
            .iter()
            .cloned()
            .partition(|kw| resume_text.contains(kw.as_str()));
        CategoryMatchResult { matched, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(job: &str) -> JobKeywords {
        KeywordExtractor::new()
            .unwrap()
            .extract(job, &Taxonomy::default())
    }

    #[test]
    fn test_distinct_words_keep_first_occurrence_order() {
        let kw = extract("build build teams with care and build trust");
        assert_eq!(kw.distinct, vec!["build", "teams", "with", "care", "trust"]);
    }

    #[test]
    fn test_general_keywords_need_five_chars() {
        let kw = extract("build teams with care and trust");
        assert_eq!(kw.general, vec!["build", "teams", "trust"]);
    }

    #[test]
    fn test_taxonomy_terms_are_excluded_exactly() {
        let kw = extract("python kubernetes pythonic developer");
        assert_eq!(kw.general, vec!["pythonic", "developer"]);
        assert!(kw.distinct.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_short_words_only() {
        let kw = extract("a an the and or to be");
        assert!(kw.distinct.is_empty());
        assert!(kw.general.is_empty());
    }

    #[test]
    fn test_accented_letters_split_words() {
        let kw = extract("café résumé naïve");
        assert!(kw.distinct.is_empty());
        assert!(kw.general.is_empty());
    }

    #[test]
    fn test_ascii_runs_around_accents_still_count() {
        let kw = extract("déploiement");
        // "d" and "ploiement"
        assert_eq!(kw.distinct, vec!["ploiement"]);
    }

    #[test]
    fn test_classify_uses_substring_containment() {
        let extractor = KeywordExtractor::new().unwrap();
        let keywords = vec!["manage".to_string(), "deliver".to_string()];
        let result = extractor.classify(&keywords, "project management lead");
        assert_eq!(result.matched, vec!["manage"]);
        assert_eq!(result.missing, vec!["deliver"]);
    }
}
