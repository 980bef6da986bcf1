// Route exports
pub mod flows;
pub mod resumes;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::HealthResponse;
use crate::services::{FlowCache, ResumeExtractor, ResumeStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    pub extractor: Arc<dyn ResumeExtractor>,
    pub flows: FlowCache,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/resumes")
                // Flow paths first: "/{id}" in the resume routes would swallow them.
                .configure(flows::configure)
                .configure(resumes::configure),
        );
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Resumatch is running")
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
