// Core algorithm exports
pub mod explain;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use explain::{explain_matches, generate_conversation_starters, generate_why_match_reasons};
pub use matcher::{Matcher, DEFAULT_MATCHES_PER_ATTENDEE};
pub use scoring::calculate_match_score;
pub use similarity::{fuzzy_jaccard_similarity, jaccard_similarity};
