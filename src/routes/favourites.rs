use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{Candidate, SummarizeRequest, SummaryResponse};
use crate::routes::{error_response, AppState};
use crate::services::SummaryError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/favourites/summary", web::post().to(summarize_favourites));
}

/// Summarize saved items for a patient to share with their doctor
///
/// POST /api/v1/favourites/summary
///
/// Request body:
/// ```json
/// {
///   "itemIds": ["pub-1", "trial-1", "expert-1"]
/// }
/// ```
async fn summarize_favourites(
    state: web::Data<AppState>,
    req: web::Json<SummarizeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let mut items: Vec<&Candidate> = Vec::with_capacity(req.item_ids.len());
    for id in &req.item_ids {
        match state.catalog.get(id) {
            Some(candidate) => items.push(candidate),
            None => {
                return error_response(
                    StatusCode::NOT_FOUND,
                    "Candidate not found",
                    format!("No catalog item with id {}", id),
                );
            }
        }
    }

    match state.summarizer.summarize(&items).await {
        Ok(summary) => {
            let request_id = uuid::Uuid::new_v4().to_string();
            tracing::info!("Generated summary {} for {} items", request_id, items.len());
            HttpResponse::Ok().json(SummaryResponse { summary, request_id })
        }
        Err(e) => {
            tracing::error!("Failed to generate summary: {}", e);
            let status = match e {
                SummaryError::NoItems => StatusCode::BAD_REQUEST,
                SummaryError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                SummaryError::RequestError(_)
                | SummaryError::ApiError(_)
                | SummaryError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            };
            error_response(status, "Failed to generate summary", e.to_string())
        }
    }
}
