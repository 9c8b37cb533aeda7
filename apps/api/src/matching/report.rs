//! Match report data model and the JSON response shape handed to callers.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::MatchTier;
use crate::matching::taxonomy::SkillCategoryKind;

/// Cap on `matchedKeywordsList` / `missingKeywords` in the response.
pub const KEYWORD_LIST_CAP: usize = 20;

/// Terms found in both texts vs. terms the job asks for but the resume lacks.
/// Order follows taxonomy (or job-text) order; a term is never in both lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl CategoryMatchResult {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty() && self.missing.is_empty()
    }
}

/// Per-category results for the five taxonomy categories. Always fully populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalBreakdown {
    pub languages: CategoryMatchResult,
    pub frameworks: CategoryMatchResult,
    pub databases: CategoryMatchResult,
    pub cloud: CategoryMatchResult,
    pub tools: CategoryMatchResult,
}

impl TechnicalBreakdown {
    pub fn get(&self, kind: SkillCategoryKind) -> &CategoryMatchResult {
        match kind {
            SkillCategoryKind::Languages => &self.languages,
            SkillCategoryKind::Frameworks => &self.frameworks,
            SkillCategoryKind::Databases => &self.databases,
            SkillCategoryKind::Cloud => &self.cloud,
            SkillCategoryKind::Tools => &self.tools,
        }
    }

    pub fn get_mut(&mut self, kind: SkillCategoryKind) -> &mut CategoryMatchResult {
        match kind {
            SkillCategoryKind::Languages => &mut self.languages,
            SkillCategoryKind::Frameworks => &mut self.frameworks,
            SkillCategoryKind::Databases => &mut self.databases,
            SkillCategoryKind::Cloud => &mut self.cloud,
            SkillCategoryKind::Tools => &mut self.tools,
        }
    }

    /// Category results in fixed report order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategoryKind, &CategoryMatchResult)> {
        SkillCategoryKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}

/// Full outcome of one resume/job comparison. Built once per call, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u32,
    pub tier: MatchTier,
    pub technical: TechnicalBreakdown,
    /// Raw experience phrases from the job text, one entry per occurrence.
    pub experience: CategoryMatchResult,
    pub general_keywords: CategoryMatchResult,
    /// Distinct job words longer than three characters.
    pub total_keywords: usize,
    pub suggestions: String,
}

impl MatchReport {
    /// Matched items across all seven internal categories.
    pub fn matched_count(&self) -> usize {
        self.technical
            .iter()
            .map(|(_, r)| r.matched.len())
            .sum::<usize>()
            + self.experience.matched.len()
            + self.general_keywords.matched.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub total_keywords: usize,
    pub matched_keywords: usize,
    pub matched_keywords_list: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub technical_breakdown: TechnicalBreakdown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub score: u32,
    pub match_label: String,
    pub suggestions: String,
    pub match_details: MatchDetails,
}

impl From<&MatchReport> for MatchResponse {
    fn from(report: &MatchReport) -> Self {
        let matched_keywords_list = report
            .technical
            .iter()
            .flat_map(|(_, r)| r.matched.iter().cloned())
            .take(KEYWORD_LIST_CAP)
            .collect();
        let missing_keywords = report
            .technical
            .iter()
            .flat_map(|(_, r)| r.missing.iter().cloned())
            .take(KEYWORD_LIST_CAP)
            .collect();

        MatchResponse {
            score: report.score,
            match_label: report.tier.label().to_string(),
            suggestions: report.suggestions.clone(),
            match_details: MatchDetails {
                total_keywords: report.total_keywords,
                matched_keywords: report.matched_count(),
                matched_keywords_list,
                missing_keywords,
                technical_breakdown: report.technical.clone(),
            },
        }
    }
}
