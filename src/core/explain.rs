use std::collections::HashMap;
use crate::models::{ExplainedMatch, MatchScore, MatchableProfile};
use crate::core::similarity::is_partial_match;

/// Maximum number of reasons or starters attached to a match
pub const MAX_EXPLANATIONS: usize = 3;

/// Component threshold for similarity-based reasons
const SIMILARITY_REASON_THRESHOLD: f64 = 0.3;

/// Component threshold for the experience reason; only adjacent levels reach it
const EXPERIENCE_REASON_THRESHOLD: f64 = 0.8;

pub const FALLBACK_REASON: &str = "Complementary professional backgrounds";

pub const FALLBACK_STARTERS: [&str; 2] = [
    "What brought you to this event?",
    "What are you working on right now?",
];

/// Build up to three reasons for a match, in fixed priority order
///
/// Priority: seeking/offering fit, shared expertise, experience, shared
/// topics. Reasons are never re-ordered by component magnitude.
pub fn generate_why_match_reasons(
    score: &MatchScore,
    a: &MatchableProfile,
    b: &MatchableProfile,
) -> Vec<String> {
    let components = &score.components;
    let mut reasons = Vec::with_capacity(MAX_EXPLANATIONS);

    if components.seeking_offering > SIMILARITY_REASON_THRESHOLD {
        if let Some(reason) = seeking_offering_reason(a, b) {
            reasons.push(reason);
        }
    }

    if components.expertise > SIMILARITY_REASON_THRESHOLD {
        let shared = shared_terms(&a.expertise, &b.expertise, 2);
        if !shared.is_empty() {
            reasons.push(format!("Shared expertise in {}", shared.join(" and ")));
        }
    }

    if components.experience >= EXPERIENCE_REASON_THRESHOLD {
        if let (Some(a_level), Some(b_level)) = (a.experience_level, b.experience_level) {
            if a_level == b_level {
                reasons.push(format!("Both at the {} stage of their careers", a_level));
            } else {
                reasons.push(format!(
                    "Adjacent career stages ({} and {}) make for a natural mentorship fit",
                    a_level, b_level
                ));
            }
        }
    }

    if components.topics > SIMILARITY_REASON_THRESHOLD {
        let shared = shared_terms(&a.topics_of_interest, &b.topics_of_interest, 2);
        if !shared.is_empty() {
            reasons.push(format!("Mutual interest in {}", shared.join(" and ")));
        }
    }

    reasons.truncate(MAX_EXPLANATIONS);

    if reasons.is_empty() {
        reasons.push(FALLBACK_REASON.to_string());
    }

    reasons
}

/// Build up to three conversation starters `a` could use with `b`
pub fn generate_conversation_starters(a: &MatchableProfile, b: &MatchableProfile) -> Vec<String> {
    let mut starters = Vec::with_capacity(MAX_EXPLANATIONS);

    if let Some(expertise) = first_term(&b.expertise) {
        starters.push(format!("Ask them about their experience with {}", expertise));
    }

    if let Some(seeking) = first_term(&b.seeking_keywords) {
        starters.push(format!(
            "They're looking for {}. Do you know someone you could introduce them to?",
            seeking
        ));
    }

    if !a.seeking_keywords.is_empty() {
        if let Some(offering) = first_term(&b.offering_keywords) {
            starters.push(format!(
                "They can offer {}. Share what you're looking for and see if it fits",
                offering
            ));
        }
    }

    if let Some(topic) = shared_terms(&a.topics_of_interest, &b.topics_of_interest, 1).first() {
        starters.push(format!(
            "You're both into {}. What got you interested in it?",
            topic
        ));
    }

    starters.truncate(MAX_EXPLANATIONS);

    if starters.is_empty() {
        starters.extend(FALLBACK_STARTERS.iter().map(|s| s.to_string()));
    }

    starters
}

/// Attach reasons and conversation starters to each selected match
///
/// Matches referring to an id missing from `profiles` get the fallback
/// reason and starters.
pub fn explain_matches(matches: Vec<MatchScore>, profiles: &[MatchableProfile]) -> Vec<ExplainedMatch> {
    let index: HashMap<&str, &MatchableProfile> =
        profiles.iter().map(|p| (p.id.as_str(), p)).collect();

    matches
        .into_iter()
        .map(|score| {
            let pair = index
                .get(score.attendee_id.as_str())
                .zip(index.get(score.matched_with_id.as_str()));

            let (reasons, conversation_starters) = match pair {
                Some((a, b)) => (
                    generate_why_match_reasons(&score, a, b),
                    generate_conversation_starters(a, b),
                ),
                None => {
                    tracing::warn!(
                        "No profile for match {} -> {}, using fallback explanation",
                        score.attendee_id,
                        score.matched_with_id
                    );
                    (
                        vec![FALLBACK_REASON.to_string()],
                        FALLBACK_STARTERS.iter().map(|s| s.to_string()).collect(),
                    )
                }
            };

            ExplainedMatch {
                score,
                reasons,
                conversation_starters,
            }
        })
        .collect()
}

/// Phrase the seeking/offering reason from whichever direction has terms
///
/// Prefers A's seeking against B's offering. When A has no seeking keywords
/// or B has no offering keywords, the reason is phrased the other way round,
/// from B's seeking and A's offering ("They're looking for ... and you
/// offer ..."). `None` when neither direction has terms on both sides.
fn seeking_offering_reason(a: &MatchableProfile, b: &MatchableProfile) -> Option<String> {
    let a_seeking = leading_terms(&a.seeking_keywords, 2);
    let b_offering = leading_terms(&b.offering_keywords, 2);
    if !a_seeking.is_empty() && !b_offering.is_empty() {
        return Some(format!(
            "You're looking for {} and they offer {}",
            a_seeking.join(", "),
            b_offering.join(", ")
        ));
    }

    let b_seeking = leading_terms(&b.seeking_keywords, 2);
    let a_offering = leading_terms(&a.offering_keywords, 2);
    if !b_seeking.is_empty() && !a_offering.is_empty() {
        return Some(format!(
            "They're looking for {} and you offer {}",
            b_seeking.join(", "),
            a_offering.join(", ")
        ));
    }

    None
}

/// Terms of `a` that overlap some term of `b` (case-insensitive substring, either way)
pub fn shared_terms(a: &[String], b: &[String], limit: usize) -> Vec<String> {
    let b_normalized: Vec<String> = b
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();

    let mut shared: Vec<String> = Vec::with_capacity(limit);
    for term in a {
        if shared.len() >= limit {
            break;
        }
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() || shared.iter().any(|s| s.to_lowercase() == normalized) {
            continue;
        }
        if b_normalized.iter().any(|other| is_partial_match(&normalized, other)) {
            shared.push(term.trim().to_string());
        }
    }

    shared
}

fn leading_terms(terms: &[String], limit: usize) -> Vec<&str> {
    terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .take(limit)
        .collect()
}

fn first_term(terms: &[String]) -> Option<&str> {
    leading_terms(terms, 1).into_iter().next()
}
