//! Match engine — pluggable, trait-based scorer comparing a resume to a job description.
//!
//! Default: `KeywordMatchEngine` (taxonomy + heuristics, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn MatchScorer>`, built once at startup.

use tracing::{debug, info};

use crate::errors::MatchError;
use crate::matching::experience::{ExperienceExtractor, EXPERIENCE_WEIGHT};
use crate::matching::feedback::render_suggestions;
use crate::matching::keywords::{KeywordExtractor, GENERAL_KEYWORD_FACTOR, GENERAL_KEYWORD_WEIGHT};
use crate::matching::report::MatchReport;
use crate::matching::scorer::{compute_score, MatchTier, WeightedTally};
use crate::matching::taxonomy::Taxonomy;
use crate::matching::term_matcher::TermMatcher;

/// The scorer trait. Implement this to swap backends without touching the handler.
///
/// Scoring is synchronous and CPU-bound; callers on an async runtime should run it
/// on a blocking thread.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_description: &str) -> Result<MatchReport, MatchError>;

    /// Backend name, for logs.
    fn backend(&self) -> &'static str;
}

/// Keyword/taxonomy scorer. All patterns are compiled in `new`; `score` only evaluates them.
#[derive(Debug, Clone)]
pub struct KeywordMatchEngine {
    taxonomy: Taxonomy,
    terms: TermMatcher,
    experience: ExperienceExtractor,
    keywords: KeywordExtractor,
}

impl KeywordMatchEngine {
    pub fn new(taxonomy: Taxonomy) -> Result<Self, MatchError> {
        let terms = TermMatcher::compile(&taxonomy)?;
        Ok(Self {
            taxonomy,
            terms,
            experience: ExperienceExtractor::new()?,
            keywords: KeywordExtractor::new()?,
        })
    }

    /// Number of precompiled term patterns.
    pub fn pattern_count(&self) -> usize {
        self.terms.pattern_count()
    }

    fn compute(&self, resume_text: &str, job_description: &str) -> MatchReport {
        let resume = resume_text.to_lowercase();
        let job = job_description.to_lowercase();

        let technical = self.terms.match_terms(&resume, &job);
        let experience = self.experience.classify(&resume, &job);
        let job_keywords = self.keywords.extract(&job, &self.taxonomy);
        let general_keywords = self.keywords.classify(&job_keywords.general, &resume);

        let mut tallies: Vec<WeightedTally> = technical
            .iter()
            .map(|(kind, r)| {
                let weight = self.terms.weight_of(kind).unwrap_or_default();
                WeightedTally::new(r.matched.len(), r.missing.len(), weight)
            })
            .collect();
        tallies.push(WeightedTally::new(
            experience.matched.len(),
            experience.missing.len(),
            EXPERIENCE_WEIGHT,
        ));
        tallies.push(WeightedTally::new(
            general_keywords.matched.len(),
            general_keywords.missing.len(),
            GENERAL_KEYWORD_WEIGHT * GENERAL_KEYWORD_FACTOR,
        ));

        let score = compute_score(&tallies);
        let suggestions = render_suggestions(score, &technical, &experience, &general_keywords);

        MatchReport {
            score,
            tier: MatchTier::from_score(score),
            technical,
            experience,
            general_keywords,
            total_keywords: job_keywords.distinct.len(),
            suggestions,
        }
    }
}

impl MatchScorer for KeywordMatchEngine {
    fn score(&self, resume_text: &str, job_description: &str) -> Result<MatchReport, MatchError> {
        if resume_text.is_empty() || job_description.is_empty() {
            return Err(MatchError::InvalidInput(
                "Resume text and job description are required".to_string(),
            ));
        }

        debug!(
            "Processing resume match with texts of lengths: {}, {}",
            resume_text.len(),
            job_description.len()
        );

        let report = self.compute(resume_text, job_description);

        info!("Completed match analysis with score: {}", report.score);
        Ok(report)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
