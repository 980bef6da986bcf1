use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::core::match_flow;
use crate::error::ApiError;
use crate::models::{CreateFlowRequest, NewFlow};
use crate::routes::AppState;

/// Configure analysis flow routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/create-flow", web::post().to(create_flow))
        .route("/get-all-flows", web::get().to(list_flows))
        .route("/get-flow/{id}", web::get().to(get_flow))
        .route("/get-matching-resumes/{id}", web::get().to(get_matching_resumes));
}

/// Create a new analysis flow
///
/// POST /api/resumes/create-flow
///
/// Request body:
/// ```json
/// {
///   "name": "Backend hires",
///   "required_skills": ["sql", "python"],
///   "min_experience_months": 12,
///   "education_keywords": ["computer science"]
/// }
/// ```
async fn create_flow(
    state: web::Data<AppState>,
    req: web::Json<CreateFlowRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_flow request: {:?}", errors);
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let new_flow = NewFlow::from(req.into_inner());

    let flow = state
        .store
        .insert_flow(&new_flow)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to insert flow", "Flow not found"))?;

    let flow = state.flows.insert(flow).await;

    Ok(HttpResponse::Ok().json(flow.as_ref()))
}

/// List all flows, newest first
///
/// GET /api/resumes/get-all-flows
async fn list_flows(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let flows = state
        .store
        .list_flows()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch flows", "Flow not found"))?;

    Ok(HttpResponse::Ok().json(flows))
}

/// GET /api/resumes/get-flow/{id}
async fn get_flow(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let flow = state
        .flows
        .get_or_load(path.into_inner(), state.store.as_ref())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch flow", "Flow not found"))?;

    Ok(HttpResponse::Ok().json(flow.as_ref()))
}

/// Run a flow over every stored resume
///
/// GET /api/resumes/get-matching-resumes/{id}
///
/// Returns the ids of matching resumes as a JSON array.
async fn get_matching_resumes(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let flow_id = path.into_inner();

    let flow = state
        .flows
        .get_or_load(flow_id, state.store.as_ref())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to run analysis flow", "Flow not found"))?;

    let candidates = state
        .store
        .list_candidates()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to run analysis flow", "Flow not found"))?;

    let matches = match_flow(&flow.definition, &candidates);

    tracing::info!(
        "Flow {} matched {} of {} resumes",
        flow_id,
        matches.len(),
        candidates.len()
    );

    Ok(HttpResponse::Ok().json(matches))
}
