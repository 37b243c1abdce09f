use crate::models::{ExperienceLevel, MatchComponents, MatchableProfile, ScoringWeights};
use crate::core::similarity::fuzzy_jaccard_similarity;

/// Experience component when either level is unknown
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 0.5;

/// Calculate the compatibility score (0-100) and its components for a pair
///
/// Scoring formula:
/// score = round(100 * (
///     seeking_offering * 0.40 +    # Mutual seeking/offering fit
///     expertise * 0.25 +           # Overlapping expertise
///     experience * 0.20 +          # Career stage compatibility
///     topics * 0.15                # Shared topics of interest
/// ))
///
/// The pair is always evaluated in ascending id order. Fuzzy overlap is only
/// symmetric when partial hits pair up one-to-one, so this keeps
/// `score(a, b) == score(b, a)` for every input.
pub fn calculate_match_score(
    a: &MatchableProfile,
    b: &MatchableProfile,
    weights: &ScoringWeights,
) -> (u8, MatchComponents) {
    let (a, b) = if a.id <= b.id { (a, b) } else { (b, a) };

    let components = MatchComponents {
        seeking_offering: calculate_seeking_offering_score(a, b),
        expertise: fuzzy_jaccard_similarity(&a.expertise, &b.expertise),
        experience: calculate_experience_score(a.experience_level, b.experience_level),
        topics: fuzzy_jaccard_similarity(&a.topics_of_interest, &b.topics_of_interest),
    };

    (combine_components(&components, weights), components)
}

/// Weighted combination of the components, rounded into 0..=100
pub fn combine_components(components: &MatchComponents, weights: &ScoringWeights) -> u8 {
    let total = (components.seeking_offering * weights.seeking_offering
        + components.expertise * weights.expertise
        + components.experience * weights.experience
        + components.topics * weights.topics)
        * 100.0;

    total.round().clamp(0.0, 100.0) as u8
}

/// Average of both seeking -> offering directions
#[inline]
pub fn calculate_seeking_offering_score(a: &MatchableProfile, b: &MatchableProfile) -> f64 {
    let a_to_b = fuzzy_jaccard_similarity(&a.seeking_keywords, &b.offering_keywords);
    let b_to_a = fuzzy_jaccard_similarity(&b.seeking_keywords, &a.offering_keywords);

    (a_to_b + b_to_a) / 2.0
}

/// Experience compatibility on the career ladder
///
/// Adjacent levels (0.8) outscore identical levels (0.6): a one-step gap is
/// treated as a mentorship opportunity.
#[inline]
pub fn calculate_experience_score(
    a: Option<ExperienceLevel>,
    b: Option<ExperienceLevel>,
) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return NEUTRAL_EXPERIENCE_SCORE,
    };

    match a.distance(b) {
        0 => 0.6,
        1 => 0.8,
        2 => 0.5,
        _ => 0.4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(id: &str) -> MatchableProfile {
        MatchableProfile {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_experience_score_ladder() {
        use ExperienceLevel::*;

        assert_eq!(calculate_experience_score(Some(Mid), Some(Mid)), 0.6);
        assert_eq!(calculate_experience_score(Some(Mid), Some(Senior)), 0.8);
        assert_eq!(calculate_experience_score(Some(Early), Some(Senior)), 0.5);
        assert_eq!(calculate_experience_score(Some(Early), Some(Executive)), 0.4);
        assert_eq!(calculate_experience_score(Some(Early), Some(Founder)), 0.4);
    }

    #[test]
    fn test_experience_score_unknown_is_neutral() {
        assert_eq!(calculate_experience_score(None, Some(ExperienceLevel::Mid)), 0.5);
        assert_eq!(calculate_experience_score(Some(ExperienceLevel::Mid), None), 0.5);
        assert_eq!(calculate_experience_score(None, None), 0.5);
    }

    #[test]
    fn test_adjacent_levels_outscore_same_level() {
        let mut a = create_test_profile("a");
        a.experience_level = Some(ExperienceLevel::Mid);
        let mut b = create_test_profile("b");
        b.experience_level = Some(ExperienceLevel::Senior);
        let mut c = create_test_profile("c");
        c.experience_level = Some(ExperienceLevel::Mid);

        let weights = ScoringWeights::default();
        let (_, adjacent) = calculate_match_score(&a, &b, &weights);
        let (_, same) = calculate_match_score(&a, &c, &weights);

        assert_eq!(adjacent.experience, 0.8);
        assert_eq!(same.experience, 0.6);
        assert!(adjacent.experience > same.experience);
    }

    #[test]
    fn test_empty_profiles_score_only_neutral_experience() {
        let a = create_test_profile("a");
        let b = create_test_profile("b");

        let (score, components) = calculate_match_score(&a, &b, &ScoringWeights::default());

        assert_eq!(components.seeking_offering, 0.0);
        assert_eq!(components.expertise, 0.0);
        assert_eq!(components.topics, 0.0);
        // 0.5 * 0.20 * 100
        assert_eq!(score, 10);
    }

    #[test]
    fn test_identical_full_profiles_score_high() {
        let mut a = create_test_profile("a");
        a.seeking_keywords = strings(&["design"]);
        a.offering_keywords = strings(&["design"]);
        a.expertise = strings(&["ux"]);
        a.topics_of_interest = strings(&["climate"]);
        a.experience_level = Some(ExperienceLevel::Senior);

        let mut b = a.clone();
        b.id = "b".to_string();
        b.experience_level = Some(ExperienceLevel::Executive);

        let (score, components) = calculate_match_score(&a, &b, &ScoringWeights::default());

        assert_eq!(components.seeking_offering, 1.0);
        assert_eq!(components.expertise, 1.0);
        assert_eq!(components.topics, 1.0);
        // 40 + 25 + 16 + 15
        assert_eq!(score, 96);
    }

    #[test]
    fn test_seeking_offering_is_bidirectional() {
        let mut a = create_test_profile("a");
        a.seeking_keywords = strings(&["fundraising", "hiring"]);
        a.offering_keywords = strings(&["product"]);

        let mut b = create_test_profile("b");
        b.offering_keywords = strings(&["fundraising advice"]);
        b.seeking_keywords = strings(&["product feedback"]);

        let ab = calculate_seeking_offering_score(&a, &b);
        let ba = calculate_seeking_offering_score(&b, &a);

        assert!(ab > 0.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_uneven_partial_overlap_still_symmetric() {
        // "ai" partially hits both "air" and "said": one-sided fuzzy scores differ
        let mut a = create_test_profile("a");
        a.expertise = strings(&["ai"]);
        let mut b = create_test_profile("b");
        b.expertise = strings(&["air", "said"]);

        let weights = ScoringWeights::default();
        assert_eq!(calculate_match_score(&a, &b, &weights), calculate_match_score(&b, &a, &weights));
    }

    #[test]
    fn test_combine_components_bounds() {
        let weights = ScoringWeights::default();
        let max = MatchComponents {
            seeking_offering: 1.0,
            expertise: 1.0,
            experience: 1.0,
            topics: 1.0,
        };

        assert_eq!(combine_components(&max, &weights), 100);
        assert_eq!(combine_components(&MatchComponents::default(), &weights), 0);
    }
}
