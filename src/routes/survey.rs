use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{ErrorResponse, Question, SubmitAnswersRequest, SubmitAnswersResponse};
use crate::routes::AppState;
use crate::services::{default_questions, CacheKey};

/// Configure catalog and submission routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/questions", web::get().to(list_questions))
        .route("/answers", web::post().to(submit_answers))
        .route("/participants", web::get().to(list_participants));
}

/// List the active question catalog
///
/// GET /api/questions
///
/// Serves from cache when possible. When the store errors or holds no
/// questions, the built-in seed set is returned instead so the frontend can
/// always render a survey.
async fn list_questions(state: web::Data<AppState>) -> impl Responder {
    let cache_key = CacheKey::questions();

    if let Ok(questions) = state.cache.get::<Vec<Question>>(&cache_key).await {
        return HttpResponse::Ok().json(questions);
    }

    match state.store.list_questions().await {
        Ok(questions) if !questions.is_empty() => {
            if let Err(e) = state.cache.set(&cache_key, &questions).await {
                tracing::warn!("Failed to cache question catalog: {}", e);
            }
            HttpResponse::Ok().json(questions)
        }
        Ok(_) => {
            tracing::warn!("Store holds no questions, serving built-in catalog");
            HttpResponse::Ok().json(default_questions())
        }
        Err(e) => {
            tracing::error!("Failed to load questions, serving built-in catalog: {}", e);
            HttpResponse::Ok().json(default_questions())
        }
    }
}

/// Submit a participant's answer set
///
/// POST /api/answers
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "answers": { "1": 0, "2": 3 }
/// }
/// ```
///
/// Creates the participant on first submission; a resubmission atomically
/// replaces the previously stored set.
async fn submit_answers(
    state: web::Data<AppState>,
    req: web::Json<SubmitAnswersRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for answer submission: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.submit_answer_set(&req.name, &req.answers).await {
        Ok(participant_id) => {
            tracing::info!(
                "Participant {} submitted {} answers",
                req.name,
                req.answers.len()
            );
            HttpResponse::Ok().json(SubmitAnswersResponse {
                success: true,
                participant_id,
                message: "Answers saved successfully".to_string(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to store answers for {}: {}", req.name, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to store answers".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// List all participants with their answer counts
///
/// GET /api/participants
async fn list_participants(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_participants().await {
        Ok(participants) => HttpResponse::Ok().json(participants),
        Err(e) => {
            tracing::error!("Failed to list participants: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list participants".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
