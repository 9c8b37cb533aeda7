// Resume ↔ job description matching core.
// Pure and synchronous: taxonomy term matching, experience phrases, general keywords,
// weighted scoring and feedback text. No I/O below `handlers`.

pub mod engine;
pub mod experience;
pub mod feedback;
pub mod handlers;
pub mod keywords;
pub mod report;
pub mod scorer;
pub mod taxonomy;
pub mod term_matcher;

pub use engine::{KeywordMatchEngine, MatchScorer};
pub use taxonomy::Taxonomy;
