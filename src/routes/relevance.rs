use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{find_profile, find_relevant_content, sorted_profile_names};
use crate::models::{
    ErrorResponse, HealthResponse, ProfilesResponse, RelevantContentRequest,
    RelevantContentResponse,
};
use crate::services::DataStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
}

/// Configure all relevance routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::get().to(list_profiles))
        .route("/content/relevant", web::post().to(relevant_content));
}

fn load_failure(e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("Failed to load dataset: {}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Failed to load data".to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List selectable profile names
///
/// GET /api/v1/profiles
async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.store.dataset().await {
        Ok(dataset) => HttpResponse::Ok().json(ProfilesResponse {
            profiles: sorted_profile_names(&dataset.profiles),
        }),
        Err(e) => load_failure(e),
    }
}

/// Relevant content endpoint
///
/// POST /api/v1/content/relevant
///
/// Request body:
/// ```json
/// { "name": "string" }
/// ```
///
/// An unknown name is not an error: the response carries
/// `"relevantContent": null`.
async fn relevant_content(
    state: web::Data<AppState>,
    req: web::Json<RelevantContentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for relevant_content request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let dataset = match state.store.dataset().await {
        Ok(dataset) => dataset,
        Err(e) => return load_failure(e),
    };

    let relevant_content = find_profile(&dataset.profiles, &req.name)
        .map(|profile| find_relevant_content(profile, &dataset.catalog));

    match &relevant_content {
        Some(results) => tracing::info!(
            "Returning {} relevant items for {} (from {} in catalog)",
            results.len(),
            req.name,
            dataset.catalog.len()
        ),
        None => tracing::info!("No profile named {}, nothing selected", req.name),
    }

    HttpResponse::Ok().json(RelevantContentResponse {
        selected_profile: req.name.clone(),
        total_results: relevant_content.as_ref().map_or(0, Vec::len),
        relevant_content,
    })
}
