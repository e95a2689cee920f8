use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, HealthResponse, MatchesRequest};
use crate::routes::AppState;

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches", web::post().to(find_matches))
        .route("/matches/all", web::get().to(all_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find the best matches for one participant
///
/// POST /api/matches
///
/// Request body:
/// ```json
/// {
///   "name": "string"
/// }
/// ```
///
/// Returns 404 only when no participant with that name exists. A participant
/// who exists but has not answered the full catalog gets an empty list.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let name = &req.name;

    match state.store.find_participant(name).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Participant not found".to_string(),
                message: format!("No participant named '{}' has submitted answers", name),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to look up participant {}: {}", name, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to look up participant".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    // Catalog and answers are read fresh on every query so a resubmission
    // is reflected immediately.
    let catalog = match state.store.catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load question catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load question catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let population = match state.store.load_answer_sets().await {
        Ok(population) => population,
        Err(e) => {
            tracing::error!("Failed to load answer sets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load answer sets".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let matches = state.matcher.ranked_matches(name, &catalog, &population);

    tracing::info!(
        "Returning {} matches for participant {} (population {})",
        matches.len(),
        name,
        population.len()
    );

    HttpResponse::Ok().json(matches)
}

/// Score every comparable pair in the group
///
/// GET /api/matches/all
async fn all_matches(state: web::Data<AppState>) -> impl Responder {
    let catalog = match state.store.catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load question catalog: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load question catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let population = match state.store.load_answer_sets().await {
        Ok(population) => population,
        Err(e) => {
            tracing::error!("Failed to load answer sets: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load answer sets".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let pairs = state.matcher.all_matches(&catalog, &population);

    tracing::debug!(
        "Computed {} pair matches across {} participants",
        pairs.len(),
        population.len()
    );

    HttpResponse::Ok().json(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
