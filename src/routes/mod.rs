// Route exports
pub mod favourites;
pub mod matches;
pub mod profiles;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::{CandidateCatalog, ProfileDirectory, SummaryClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CandidateCatalog>,
    pub profiles: Arc<dyn ProfileDirectory>,
    pub summarizer: Arc<SummaryClient>,
    pub recommender: Recommender,
    pub max_limit: u16,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(profiles::configure)
            .configure(favourites::configure),
    );
}

pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}
