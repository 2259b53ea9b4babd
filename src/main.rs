use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use curalink_match::config::{LoggingSettings, Settings};
use curalink_match::core::{RecommendationPolicy, Recommender};
use curalink_match::models::ScoringWeights;
use curalink_match::routes::{self, AppState};
use curalink_match::services::{
    CandidateCatalog, InMemoryCatalog, InMemoryProfileDirectory, SummarizerOptions, SummaryClient,
};
use std::sync::Arc;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn io_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io_error("Configuration error", e)
    })?;

    init_logging(&settings.logging);

    info!("Starting CuraLink match service...");

    // Candidate catalog: configured file, or the bundled dataset
    let catalog = match &settings.catalog.path {
        Some(path) => InMemoryCatalog::from_file(path),
        None => InMemoryCatalog::seeded(),
    }
    .map_err(|e| {
        error!("Failed to load candidate catalog: {}", e);
        io_error("Catalog error", e)
    })?;

    info!("Catalog loaded with {} candidates", catalog.len());

    let policy = match &settings.recommendation.policy_path {
        Some(path) => RecommendationPolicy::from_file(path).map_err(|e| {
            error!("Failed to load recommendation policy: {}", e);
            io_error("Policy error", e)
        })?,
        None => RecommendationPolicy::default(),
    };

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let recommender = Recommender::new(weights, policy);

    info!("Recommender initialized with weights: {:?}", weights);

    let summarizer = SummaryClient::new(SummarizerOptions::from(&settings.summarizer))
        .map_err(|e| io_error("Summarizer error", e))?;

    if !summarizer.is_configured() {
        warn!("Summarizer API key not configured, favourites summaries are disabled");
    }

    let app_state = AppState {
        catalog: Arc::new(catalog),
        profiles: Arc::new(InMemoryProfileDirectory::new()),
        summarizer: Arc::new(summarizer),
        recommender,
        max_limit: settings.recommendation.max_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
