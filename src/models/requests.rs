use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::MatchableProfile;

/// Request to regenerate the stored matches of an event
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct GenerateMatchesRequest {
    #[validate(range(min = 1, max = 50))]
    #[serde(alias = "matches_per_attendee", rename = "matchesPerAttendee", default)]
    pub matches_per_attendee: Option<u32>,
}

/// Request to compute matches for an ad-hoc batch of profiles
///
/// Batches are capped at 500 profiles; scoring is quadratic in batch size.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeMatchesRequest {
    #[validate(length(max = 500), custom(function = "validate_profile_ids"))]
    pub profiles: Vec<MatchableProfile>,
    #[validate(range(min = 1, max = 50))]
    #[serde(alias = "matches_per_attendee", rename = "matchesPerAttendee", default)]
    pub matches_per_attendee: Option<u32>,
    #[serde(default = "default_explain")]
    pub explain: bool,
}

fn default_explain() -> bool {
    true
}

/// Query parameters for reading stored matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMatchesQuery {
    #[serde(alias = "attendee_id", rename = "attendeeId")]
    pub attendee_id: Option<String>,
}

fn validate_profile_ids(profiles: &[MatchableProfile]) -> Result<(), validator::ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for profile in profiles {
        if profile.id.trim().is_empty() {
            return Err(validator::ValidationError::new("empty_profile_id"));
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(validator::ValidationError::new("duplicate_profile_id"));
        }
    }
    Ok(())
}
