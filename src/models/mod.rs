// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExperienceLevel, ExplainedMatch, MatchComponents, MatchScore, MatchableProfile, ScoringWeights};
pub use requests::{ComputeMatchesRequest, GenerateMatchesRequest, ListMatchesQuery};
pub use responses::{ComputeMatchesResponse, ErrorResponse, GenerateMatchesResponse, HealthResponse, ListMatchesResponse};
