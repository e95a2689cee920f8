use actix_cors::Cors;
use actix_files::Files;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info, warn};

use survey_match::config::Settings;
use survey_match::core::{Matcher, RANKED_MATCH_LIMIT};
use survey_match::routes::{self, AppState};
use survey_match::services::{default_questions, AnswerStore, CacheManager};

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
        HttpResponse::build(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST),
        )
        .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting survey matching service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize PostgreSQL store
    let db_max_conn = settings.database.max_connections.unwrap_or(10);
    let db_min_conn = settings.database.min_connections.unwrap_or(1);

    let store = Arc::new(
        AnswerStore::from_settings(
            &settings.database.url,
            Some(db_max_conn),
            Some(db_min_conn),
            settings.database.acquire_timeout_secs,
            settings.database.idle_timeout_secs,
        )
        .await
        .unwrap_or_else(|e| {
            error!("Failed to connect to PostgreSQL: {}", e);
            panic!("PostgreSQL connection error: {}", e);
        }),
    );

    info!("PostgreSQL store initialized (max: {} connections)", db_max_conn);

    // Seed the question catalog; the server keeps running with whatever
    // catalog the store already holds if this fails.
    if settings.catalog.seed_on_startup {
        match store.replace_questions(&default_questions()).await {
            Ok(count) => info!("Seeded question catalog ({} questions)", count),
            Err(e) => error!("Failed to seed question catalog, continuing: {}", e),
        }
    }

    // Initialize cache manager
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = Arc::new(CacheManager::new(l1_cache_size, cache_ttl));

    info!(
        "Cache manager initialized (L1: {} entries, TTL: {}s)",
        l1_cache_size, cache_ttl
    );

    // Initialize matcher
    let ranked_limit = settings.matching.ranked_limit.unwrap_or(RANKED_MATCH_LIMIT);
    let matcher = Matcher::new(ranked_limit);

    info!("Matcher initialized (ranked limit: {})", ranked_limit);

    // Build application state
    let app_state = AppState {
        store,
        cache,
        matcher,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let static_dir = settings.server.static_dir.clone();

    let serve_static = std::path::Path::new(&static_dir).is_dir();
    if serve_static {
        info!("Serving frontend files from {}/", static_dir);
    } else {
        warn!("Static directory {} not found, serving API only", static_dir);
    }

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let app = App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes);

        let app = if serve_static {
            app.service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(web::route().to(routes::not_found)),
            )
        } else {
            app
        };

        app.default_service(web::route().to(routes::not_found))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
