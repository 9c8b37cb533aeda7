//! Feedback generator — renders the markdown suggestions text for a match.

use std::fmt::Write;

use crate::matching::report::{CategoryMatchResult, TechnicalBreakdown};
use crate::matching::scorer::MatchTier;

/// Only this many missing general keywords get a suggestion line.
pub const MAX_KEYWORD_SUGGESTIONS: usize = 5;
/// Scores below this get the generic restructuring advice.
pub const RESTRUCTURE_BELOW: u32 = 60;

const TITLE: &str = "## AI Technical Match Analysis\n\n";
const RESTRUCTURE_ADVICE: &str =
    "\n- Restructure your resume to emphasize your technical skills and quantifiable achievements.\n";

fn verdict(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Low => "Your resume needs significant improvement to match this technical role.\n\n",
        MatchTier::Moderate => "Your resume partially matches this technical position.\n\n",
        MatchTier::Strong => "Your resume shows a strong match for this technical position!\n\n",
    }
}

/// Builds the suggestions text. Pure function of its inputs.
pub fn render_suggestions(
    score: u32,
    technical: &TechnicalBreakdown,
    experience: &CategoryMatchResult,
    general_keywords: &CategoryMatchResult,
) -> String {
    let mut out = String::from(TITLE);
    out.push_str(verdict(MatchTier::from_score(score)));

    for (kind, result) in technical.iter() {
        out.push_str(&category_block(kind.display_name(), result));
    }

    if !experience.missing.is_empty() {
        out.push_str("\n### Experience Requirements\n");
        let _ = writeln!(out, "The job requires: {}.", experience.missing.join(", "));
        for item in &experience.missing {
            let _ = writeln!(
                out,
                "- Consider highlighting any relevant experience or transferable skills related to '{item}'."
            );
        }
    }

    let missing_skills: Vec<&String> = technical
        .iter()
        .flat_map(|(_, r)| r.missing.iter())
        .collect();
    if !missing_skills.is_empty() {
        out.push_str("\n### Skills & Tools to Add or Emphasize\n");
        for item in missing_skills {
            let _ = writeln!(
                out,
                "- Consider gaining experience with or highlighting '{item}' if applicable."
            );
        }
    }

    if !general_keywords.missing.is_empty() {
        out.push_str("\n### Other Important Keywords\n");
        for keyword in general_keywords.missing.iter().take(MAX_KEYWORD_SUGGESTIONS) {
            let _ = writeln!(
                out,
                "- Add or elaborate on '{keyword}' if you have relevant experience."
            );
        }
    }

    if score < RESTRUCTURE_BELOW {
        out.push_str(RESTRUCTURE_ADVICE);
    }

    out
}

/// One category section, or an empty string when the job named nothing from it.
fn category_block(name: &str, result: &CategoryMatchResult) -> String {
    if result.is_empty() {
        return String::new();
    }

    let mut block = format!("\n### {name}\n");
    if !result.matched.is_empty() {
        let _ = writeln!(block, "✅ Matched: {}", result.matched.join(", "));
    }
    if !result.missing.is_empty() {
        let _ = writeln!(block, "❌ Missing: {}", result.missing.join(", "));
        block.push_str("Consider adding these to your resume if you have experience with them.\n");
    }
    block
}
