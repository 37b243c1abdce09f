use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Career stage ladder, ordered from least to most senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Early,
    Mid,
    Senior,
    Executive,
    Founder,
}

impl ExperienceLevel {
    /// Position on the ladder (early = 0 .. founder = 4)
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Early => 0,
            ExperienceLevel::Mid => 1,
            ExperienceLevel::Senior => 2,
            ExperienceLevel::Executive => 3,
            ExperienceLevel::Founder => 4,
        }
    }

    /// Number of ladder steps between two levels
    pub fn distance(self, other: ExperienceLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Early => "early",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Executive => "executive",
            ExperienceLevel::Founder => "founder",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(ExperienceLevel::Early),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "executive" => Ok(ExperienceLevel::Executive),
            "founder" => Ok(ExperienceLevel::Founder),
            other => Err(format!("unknown experience level: {}", other)),
        }
    }
}

/// Unrecognized levels are treated as unknown rather than rejected
fn lenient_experience_level<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Structured attendee profile produced by the upstream extraction step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchableProfile {
    pub id: String,
    #[serde(rename = "seekingKeywords", default)]
    pub seeking_keywords: Vec<String>,
    #[serde(rename = "offeringKeywords", default)]
    pub offering_keywords: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(rename = "topicsOfInterest", default)]
    pub topics_of_interest: Vec<String>,
    #[serde(
        rename = "experienceLevel",
        default,
        deserialize_with = "lenient_experience_level"
    )]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Per-dimension sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchComponents {
    #[serde(rename = "seekingOffering")]
    pub seeking_offering: f64,
    pub expertise: f64,
    pub experience: f64,
    pub topics: f64,
}

/// Directed compatibility record for one attendee pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "attendeeId")]
    pub attendee_id: String,
    #[serde(rename = "matchedWithId")]
    pub matched_with_id: String,
    pub score: u8,
    pub components: MatchComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// A selected match together with its human-readable justification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainedMatch {
    #[serde(flatten)]
    pub score: MatchScore,
    pub reasons: Vec<String>,
    #[serde(rename = "conversationStarters")]
    pub conversation_starters: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub seeking_offering: f64,
    pub expertise: f64,
    pub experience: f64,
    pub topics: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.seeking_offering + self.expertise + self.experience + self.topics
    }

    /// Weights must be non-negative and sum to 1.0
    pub fn is_valid(&self) -> bool {
        let all_non_negative = [self.seeking_offering, self.expertise, self.experience, self.topics]
            .iter()
            .all(|w| *w >= 0.0);

        all_non_negative && (self.sum() - 1.0).abs() < 1e-6
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            seeking_offering: 0.40,
            expertise: 0.25,
            experience: 0.20,
            topics: 0.15,
        }
    }
}
