use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::models::UserRecord;
use crate::routes::{error_response, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profiles/{user_id}", web::put().to(upsert_profile))
        .route("/profiles/{user_id}", web::get().to(get_profile));
}

/// Create or replace a user's interest profile
///
/// PUT /api/v1/profiles/{userId}
///
/// Request body:
/// ```json
/// {
///   "userKind": "patient|researcher",
///   "interests": { "conditionText": "string", "fieldText": "string" }
/// }
/// ```
async fn upsert_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    record: web::Json<UserRecord>,
) -> impl Responder {
    let user_id = path.into_inner();
    let record = record.into_inner();

    let previous = state.profiles.upsert(&user_id, record.clone());
    tracing::info!("Stored {} profile for user {}", record.kind, user_id);

    if previous.is_some() {
        HttpResponse::Ok().json(record)
    } else {
        HttpResponse::Created().json(record)
    }
}

/// GET /api/v1/profiles/{userId}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.profiles.get(&user_id) {
        Some(record) => HttpResponse::Ok().json(record),
        None => error_response(
            StatusCode::NOT_FOUND,
            "Profile not found",
            format!("No profile for user {}", user_id),
        ),
    }
}
