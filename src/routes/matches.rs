use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{explain_matches, Matcher};
use crate::models::{
    ComputeMatchesRequest, ComputeMatchesResponse, ErrorResponse, GenerateMatchesRequest,
    GenerateMatchesResponse, HealthResponse, ListMatchesQuery, ListMatchesResponse,
};
use crate::services::PostgresClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    /// Pick the per-attendee limit: request, then event setting, then default
    fn resolve_matches_per_attendee(&self, requested: Option<u32>, event_setting: Option<u32>) -> usize {
        requested
            .or(event_setting)
            .map(|v| v as usize)
            .unwrap_or(self.matching.default_matches_per_attendee)
            .min(self.matching.max_matches_per_attendee)
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/events/{event_id}/matches/generate", web::post().to(generate_matches))
        .route("/events/{event_id}/matches", web::get().to(list_matches))
        .route("/matches/compute", web::post().to(compute_matches));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn internal_error(error: &str, e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check PostgreSQL health
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Regenerate all matches of an event
///
/// POST /api/v1/events/{eventId}/matches/generate
///
/// Request body:
/// ```json
/// {
///   "matchesPerAttendee": 5
/// }
/// ```
///
/// Loads the event's attendees, scores and explains every match, then
/// replaces the stored set in one transaction. If storing fails the previous
/// set is left untouched.
async fn generate_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<GenerateMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let event_id = path.into_inner();

    let profiles = match state.postgres.load_event_profiles(&event_id).await {
        Ok(profiles) => profiles,
        Err(e) => {
            tracing::error!("Failed to load attendees for event {}: {}", event_id, e);
            return internal_error("Failed to load attendees", e);
        }
    };

    let event_setting = match state.postgres.get_matches_per_attendee(&event_id).await {
        Ok(setting) => setting,
        Err(e) => {
            tracing::warn!("Failed to read match settings for event {}, using default: {}", event_id, e);
            None
        }
    };

    let matches_per_attendee = state.resolve_matches_per_attendee(req.matches_per_attendee, event_setting);

    tracing::info!(
        "Generating matches for event {} ({} attendees, {} per attendee)",
        event_id,
        profiles.len(),
        matches_per_attendee
    );

    let matcher = state.matcher.clone();
    let (profiles, matches) = match web::block(move || {
        let scored = matcher.generate_event_matches(&profiles, matches_per_attendee);
        let matches = explain_matches(scored, &profiles);
        (profiles, matches)
    })
    .await
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Match generation for event {} was cancelled: {}", event_id, e);
            return internal_error("Failed to generate matches", e);
        }
    };

    let generation_id = uuid::Uuid::new_v4();
    let generated_at = chrono::Utc::now();

    let stored = match state
        .postgres
        .replace_event_matches(&event_id, generation_id, generated_at, &matches)
        .await
    {
        Ok(stored) => stored,
        Err(e) => {
            tracing::error!("Failed to store matches for event {}, discarding generation: {}", event_id, e);
            return internal_error("Failed to store matches", e);
        }
    };

    tracing::info!(
        "Stored generation {} for event {}: {} rows replaced, {} inserted",
        stored.generation_id,
        event_id,
        stored.rows_replaced,
        stored.rows_inserted
    );

    HttpResponse::Ok().json(GenerateMatchesResponse {
        event_id,
        generation_id: stored.generation_id,
        generated_at: stored.generated_at,
        attendee_count: profiles.len(),
        total_matches: matches.len(),
        replaced_matches: stored.rows_replaced,
        matches,
    })
}

/// Read stored matches of an event
///
/// GET /api/v1/events/{eventId}/matches?attendeeId={attendeeId}
async fn list_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ListMatchesQuery>,
) -> impl Responder {
    let event_id = path.into_inner();

    match state
        .postgres
        .get_event_matches(&event_id, query.attendee_id.as_deref())
        .await
    {
        Ok(matches) => HttpResponse::Ok().json(ListMatchesResponse { event_id, matches }),
        Err(e) => {
            tracing::error!("Failed to fetch matches for event {}: {}", event_id, e);
            internal_error("Failed to fetch matches", e)
        }
    }
}

/// Compute matches for the given profiles without storing them
///
/// POST /api/v1/matches/compute
///
/// Request body:
/// ```json
/// {
///   "profiles": [{ "id": "string", "seekingKeywords": ["string"], ... }],
///   "matchesPerAttendee": 5,
///   "explain": true
/// }
/// ```
async fn compute_matches(
    state: web::Data<AppState>,
    req: web::Json<ComputeMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let req = req.into_inner();
    let matches_per_attendee = state.resolve_matches_per_attendee(req.matches_per_attendee, None);

    tracing::debug!(
        "Computing matches for {} profiles ({} per attendee)",
        req.profiles.len(),
        matches_per_attendee
    );

    let matcher = state.matcher.clone();
    let response = web::block(move || {
        let scored = matcher.generate_event_matches(&req.profiles, matches_per_attendee);

        if req.explain {
            let matches = explain_matches(scored, &req.profiles);
            ComputeMatchesResponse::Explained {
                total_matches: matches.len(),
                matches,
            }
        } else {
            ComputeMatchesResponse::Scored {
                total_matches: scored.len(),
                matches: scored,
            }
        }
    })
    .await;

    match response {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::error!("Match computation was cancelled: {}", e);
            internal_error("Failed to compute matches", e)
        }
    }
}
