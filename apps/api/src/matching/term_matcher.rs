//! Term matcher — whole-word, case-insensitive detection of taxonomy terms.
//!
//! Every (category, term) pair is compiled once into a `CompiledTerm`. A term only
//! counts when the job text mentions it; resume skills the job never asks for are ignored.

use regex::{Regex, RegexBuilder};

use crate::errors::MatchError;
use crate::matching::report::TechnicalBreakdown;
use crate::matching::taxonomy::{SkillCategoryKind, Taxonomy};

#[derive(Debug, Clone)]
pub struct CompiledTerm {
    pub category: SkillCategoryKind,
    pub term: String,
    pub pattern: Regex,
    pub weight: f64,
}

/// Indexed list of precompiled term patterns, in taxonomy order.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    terms: Vec<CompiledTerm>,
}

impl TermMatcher {
    pub fn compile(taxonomy: &Taxonomy) -> Result<Self, MatchError> {
        let mut terms = Vec::with_capacity(taxonomy.term_count());
        for category in taxonomy.categories() {
            for term in &category.terms {
                let pattern = RegexBuilder::new(&whole_word_pattern(term))
                    .case_insensitive(true)
                    .build()?;
                terms.push(CompiledTerm {
                    category: category.kind,
                    term: term.clone(),
                    pattern,
                    weight: category.weight,
                });
            }
        }
        Ok(Self { terms })
    }

    pub fn pattern_count(&self) -> usize {
        self.terms.len()
    }

    /// Weight of a category as compiled, or `None` when the category has no terms.
    pub fn weight_of(&self, kind: SkillCategoryKind) -> Option<f64> {
        self.terms
            .iter()
            .find(|t| t.category == kind)
            .map(|t| t.weight)
    }

    /// Classifies every job-relevant term as matched or missing.
    pub fn match_terms(&self, resume_text: &str, job_text: &str) -> TechnicalBreakdown {
        let mut breakdown = TechnicalBreakdown::default();
        for compiled in &self.terms {
            if !compiled.pattern.is_match(job_text) {
                continue;
            }
            let slot = breakdown.get_mut(compiled.category);
            if compiled.pattern.is_match(resume_text) {
                slot.matched.push(compiled.term.clone());
            } else {
                slot.missing.push(compiled.term.clone());
            }
        }
        breakdown
    }
}

/// Builds an escaped whole-word pattern for `term`.
///
/// Edges that are word characters get `\b`. Edges that are not ("c++", ".net") need a
/// non-word neighbour or the text boundary instead, since `\b` next to punctuation would
/// demand a word character on the far side.
pub fn whole_word_pattern(term: &str) -> String {
    let escaped = regex::escape(term);
    let leading = match term.chars().next() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:^|\W)",
    };
    let trailing = match term.chars().last() {
        Some(c) if is_word_char(c) => r"\b",
        _ => r"(?:\W|$)",
    };
    format!("{leading}{escaped}{trailing}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> TermMatcher {
        TermMatcher::compile(&Taxonomy::default()).unwrap()
    }

    #[test]
    fn test_compiles_every_default_term() {
        let taxonomy = Taxonomy::default();
        assert_eq!(matcher().pattern_count(), taxonomy.term_count());
    }

    #[test]
    fn test_java_does_not_leak_from_javascript() {
        let breakdown = matcher().match_terms("javascript", "We use JavaScript daily");
        assert_eq!(breakdown.languages.matched, vec!["javascript"]);
        assert!(!breakdown.languages.missing.contains(&"java".to_string()));
        assert!(!breakdown.languages.matched.contains(&"java".to_string()));
    }

    #[test]
    fn test_case_insensitive_match() {
        let breakdown = matcher().match_terms("python scripting", "Python required");
        assert_eq!(breakdown.languages.matched, vec!["python"]);
        assert!(breakdown.languages.missing.is_empty());
    }

    #[test]
    fn test_job_only_term_is_missing() {
        let breakdown = matcher().match_terms("I write Go", "Experience with AWS and Go");
        assert_eq!(breakdown.cloud.missing, vec!["aws"]);
        assert_eq!(breakdown.languages.matched, vec!["go"]);
    }

    #[test]
    fn test_resume_only_term_is_ignored() {
        let breakdown = matcher().match_terms("Expert in Haskell and Kubernetes", "We ship Python");
        assert!(breakdown.cloud.is_empty());
        assert_eq!(breakdown.languages.missing, vec!["python"]);
        assert!(breakdown.languages.matched.is_empty());
    }

    #[test]
    fn test_metacharacter_terms_are_escaped() {
        let breakdown = matcher().match_terms(
            "Shipped C++ and .NET services, plus notepad++",
            "Need C++, .NET and notepad++ skills",
        );
        assert!(breakdown.languages.matched.contains(&"c++".to_string()));
        assert!(breakdown.frameworks.matched.contains(&".net".to_string()));
        assert!(breakdown.tools.matched.contains(&"notepad++".to_string()));
    }

    #[test]
    fn test_punctuation_edge_requires_non_word_neighbour() {
        // ".net" glued to "vb" is the "vb.net" term, not ".net"
        let breakdown = matcher().match_terms("", "vb.net developer");
        assert!(breakdown.languages.missing.contains(&"vb.net".to_string()));
        assert!(!breakdown.frameworks.missing.contains(&".net".to_string()));
    }

    #[test]
    fn test_multi_word_terms() {
        let breakdown = matcher().match_terms("spring boot apps", "Spring Boot microservices");
        assert_eq!(breakdown.frameworks.matched, vec!["spring", "spring boot"]);
    }

    #[test]
    fn test_order_follows_taxonomy() {
        let breakdown = matcher().match_terms("", "rust, python and javascript");
        assert_eq!(
            breakdown.languages.missing,
            vec!["javascript", "python", "rust"]
        );
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let breakdown = matcher().match_terms(
            "python react docker",
            "python react docker aws jest git",
        );
        for (_, result) in breakdown.iter() {
            for term in &result.matched {
                assert!(!result.missing.contains(term), "{term} in both lists");
            }
        }
    }

    #[test]
    fn test_whole_word_pattern_shapes() {
        assert_eq!(whole_word_pattern("rust"), r"\brust\b");
        assert_eq!(whole_word_pattern("c++"), r"\bc\+\+(?:\W|$)");
        assert_eq!(whole_word_pattern(".net"), r"(?:^|\W)\.net\b");
    }

    #[test]
    fn test_weight_of_category() {
        let m = matcher();
        assert_eq!(m.weight_of(SkillCategoryKind::Languages), Some(2.5));
        assert_eq!(m.weight_of(SkillCategoryKind::Tools), Some(1.0));
    }
}
