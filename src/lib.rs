//! Mixer Match - attendee matching engine for event networking
//!
//! This library scores every attendee pair of an event, keeps each attendee's
//! top matches and explains why they were matched. The `services` and
//! `routes` modules wrap the engine in a small HTTP service that stores each
//! generation as a single atomic replace.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Matcher, explain_matches, fuzzy_jaccard_similarity, jaccard_similarity};
pub use models::{MatchableProfile, MatchScore, MatchComponents, ExplainedMatch, ExperienceLevel, ScoringWeights};
