// Route exports
pub mod matches;
pub mod survey;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::ErrorResponse;
use crate::services::{AnswerStore, CacheManager};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AnswerStore>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
}

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(survey::configure)
            .configure(matches::configure),
    );
}

/// JSON 404 for routes nothing else claims
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        message: "The requested route does not exist".to_string(),
        status_code: 404,
    })
}
