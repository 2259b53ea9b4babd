use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    HealthResponse, RecommendRequest, RecommendResponse, ScoreRequest, ScoreResponse,
};
use crate::routes::{error_response, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_candidate))
        .route("/recommendations", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_size = state.catalog.len();
    let status = if catalog_size > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        catalog_size,
    })
}

/// Score one catalog item for a user
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "candidateId": "string"
/// }
/// ```
async fn score_candidate(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let Some(user) = state.profiles.get(&req.user_id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Profile not found",
            format!("No profile for user {}", req.user_id),
        );
    };

    let Some(candidate) = state.catalog.get(&req.candidate_id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Candidate not found",
            format!("No catalog item with id {}", req.candidate_id),
        );
    };

    let (result, breakdown) = state.recommender.score_detailed(&user.interests, candidate);

    tracing::debug!(
        "Scored {} for user {}: {} ({})",
        req.candidate_id,
        req.user_id,
        result.score,
        result.label
    );

    HttpResponse::Ok().json(ScoreResponse {
        user_id: req.user_id.clone(),
        candidate_id: req.candidate_id.clone(),
        kind: candidate.kind(),
        score: result.score,
        label: result.label,
        tier: result.label.tier(),
        breakdown,
    })
}

/// Build a user's recommendation list
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 10
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommend request: field_errors={:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let Some(user) = state.profiles.get(&req.user_id) else {
        return error_response(
            StatusCode::NOT_FOUND,
            "Profile not found",
            format!("No profile for user {}", req.user_id),
        );
    };

    let pool = state.catalog.candidates();
    let limit = req.limit.unwrap_or(state.max_limit).min(state.max_limit) as usize;

    let mut recommendations = state
        .recommender
        .recommend(&user.interests, user.kind, pool);
    recommendations.truncate(limit);

    tracing::info!(
        "Returning {} recommendations for {} {} (from {} candidates)",
        recommendations.len(),
        user.kind,
        req.user_id,
        pool.len()
    );

    HttpResponse::Ok().json(RecommendResponse {
        user_id: req.user_id.clone(),
        user_kind: user.kind,
        recommendations,
        total_candidates: pool.len(),
    })
}
