use std::collections::HashMap;
use crate::models::{MatchScore, MatchableProfile, ScoringWeights};
use crate::core::scoring::calculate_match_score;

/// Default number of matches kept per attendee
pub const DEFAULT_MATCHES_PER_ATTENDEE: usize = 5;

/// Event matching orchestrator
///
/// # Pipeline Stages
/// 1. Pairwise scoring, computed once per unordered pair
/// 2. Emission of both directed records from that single computation
/// 3. Per-attendee grouping, sorting and tie-breaking
/// 4. Top-N truncation and position assignment
///
/// Each attendee gets their personally best matches. The result is not a
/// mutual or stable pairing: A may list B while B does not list A.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Generate the ranked match set for every attendee of an event
    ///
    /// # Arguments
    /// * `profiles` - All attendee profiles of the event
    /// * `matches_per_attendee` - Maximum number of matches kept per attendee
    ///
    /// # Returns
    /// A flat list of directed matches, grouped by attendee in ascending id
    /// order, each group sorted by position. Fewer than two profiles yields
    /// an empty list.
    pub fn generate_event_matches(
        &self,
        profiles: &[MatchableProfile],
        matches_per_attendee: usize,
    ) -> Vec<MatchScore> {
        if profiles.len() < 2 || matches_per_attendee == 0 {
            return Vec::new();
        }

        let mut candidates: HashMap<&str, Vec<MatchScore>> = HashMap::with_capacity(profiles.len());
        let mut pair_count = 0usize;

        for (i, a) in profiles.iter().enumerate() {
            for b in &profiles[i + 1..] {
                let (score, components) = calculate_match_score(a, b, &self.weights);
                pair_count += 1;

                candidates.entry(a.id.as_str()).or_default().push(MatchScore {
                    attendee_id: a.id.clone(),
                    matched_with_id: b.id.clone(),
                    score,
                    components,
                    position: None,
                });
                candidates.entry(b.id.as_str()).or_default().push(MatchScore {
                    attendee_id: b.id.clone(),
                    matched_with_id: a.id.clone(),
                    score,
                    components,
                    position: None,
                });
            }
        }

        let mut attendee_ids: Vec<&str> = candidates.keys().copied().collect();
        attendee_ids.sort_unstable();

        let mut matches = Vec::with_capacity(attendee_ids.len() * matches_per_attendee);
        for attendee_id in attendee_ids {
            if let Some(group) = candidates.remove(attendee_id) {
                matches.extend(rank_candidates(group, matches_per_attendee));
            }
        }

        tracing::debug!(
            "Scored {} pairs for {} attendees, kept {} matches",
            pair_count,
            profiles.len(),
            matches.len()
        );

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Sort one attendee's candidates, keep the top `limit` and assign positions
///
/// Ties on score are broken by ascending `matched_with_id`.
pub fn rank_candidates(mut candidates: Vec<MatchScore>, limit: usize) -> Vec<MatchScore> {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.matched_with_id.cmp(&b.matched_with_id))
    });

    candidates.truncate(limit);

    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.position = Some(index as u32 + 1);
    }

    candidates
}
