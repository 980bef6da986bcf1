use actix_multipart::Multipart;
use actix_web::web::{Bytes, BytesMut};
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use futures::{Stream, StreamExt};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::models::{ManyResumesRequest, UpdateCorrectedDataRequest, UploadResumeRequest};
use crate::routes::AppState;

/// Configure resume routes
///
/// `/{id}` is registered last so it does not shadow the literal paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/upload", web::post().to(upload_resume))
        .route("", web::get().to(list_resumes))
        .route("/", web::get().to(list_resumes))
        .route("/many", web::post().to(get_many_resumes))
        .route("/{id}", web::get().to(get_resume))
        .route("/{id}", web::put().to(update_corrected_data));
}

/// Largest resume body or multipart part accepted on upload
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

fn no_resume() -> ApiError {
    ApiError::BadRequest("No resume provided".to_string())
}

fn unsupported_file_type() -> ApiError {
    ApiError::BadRequest("Unsupported file type".to_string())
}

/// Decode an uploaded file; only plain text is accepted
fn file_text(content_type: &str, bytes: &[u8]) -> Result<String, ApiError> {
    match content_type {
        "text/plain" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        _ => Err(unsupported_file_type()),
    }
}

fn non_blank(text: String) -> Result<String, ApiError> {
    if text.trim().is_empty() {
        return Err(no_resume());
    }
    Ok(text)
}

/// Pull resume text out of a non-multipart upload body
///
/// Accepts `text/plain` bodies as the resume itself and JSON bodies of the form
/// `{ "text": "..." }`.
fn resume_text(req: &HttpRequest, body: &[u8]) -> Result<String, ApiError> {
    if body.is_empty() {
        return Err(no_resume());
    }

    let text = match req.content_type() {
        "application/json" => {
            let upload: UploadResumeRequest = serde_json::from_slice(body)
                .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e)))?;
            upload.text.unwrap_or_default()
        }
        content_type => file_text(content_type, body)?,
    };

    non_blank(text)
}

/// Read a byte stream into memory, refusing anything over `MAX_UPLOAD_BYTES`
async fn read_limited<S, E>(mut stream: S) -> Result<BytesMut, ApiError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ApiError::BadRequest(format!("Invalid upload: {}", e)))?;
        if buf.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::BadRequest("Resume is too large".to_string()));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

/// Pull resume text out of a `multipart/form-data` upload
///
/// A `file` part takes precedence over a `text` field. Other parts are ignored.
async fn multipart_resume_text(mut multipart: Multipart) -> Result<String, ApiError> {
    let mut file = None;
    let mut text = None;

    while let Some(field) = multipart.next().await {
        let field =
            field.map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?;
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();

        let bytes = read_limited(field).await?;
        match name.as_str() {
            "file" => file = Some(file_text(&content_type, &bytes)?),
            "text" => text = Some(String::from_utf8_lossy(&bytes).into_owned()),
            _ => tracing::debug!("Ignoring multipart field {:?}", name),
        }
    }

    file.or(text).ok_or_else(no_resume).and_then(non_blank)
}

/// Upload a resume
///
/// POST /api/resumes/upload
///
/// The text is sent to the extraction service and the result is stored as both
/// the parsed and the corrected data.
async fn upload_resume(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, ApiError> {
    let text = if req.content_type() == "multipart/form-data" {
        multipart_resume_text(Multipart::new(req.headers(), payload)).await?
    } else {
        let body = read_limited(payload).await?;
        resume_text(&req, &body)?
    };

    tracing::info!("Extracting structured data from {} bytes of resume text", text.len());

    let parsed = state.extractor.extract(&text).await?;

    let record = state
        .store
        .insert_resume(&text, &parsed)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to upload resume", "Resume not found"))?;

    tracing::info!("Stored resume {}", record.id);

    Ok(HttpResponse::Ok().json(record))
}

/// List all resumes, newest first
///
/// GET /api/resumes
async fn list_resumes(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let resumes = state
        .store
        .list_resumes()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch resumes", "Resume not found"))?;

    Ok(HttpResponse::Ok().json(resumes))
}

/// Fetch several resumes by id
///
/// POST /api/resumes/many
///
/// Request body:
/// ```json
/// { "ids": ["uuid", "uuid"] }
/// ```
async fn get_many_resumes(
    state: web::Data<AppState>,
    req: web::Json<ManyResumesRequest>,
) -> Result<HttpResponse, ApiError> {
    if req.validate().is_err() {
        return Err(ApiError::BadRequest("Invalid or empty IDs array".to_string()));
    }

    let resumes = state
        .store
        .get_resumes(&req.ids)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve resumes", "Resume not found"))?;

    tracing::debug!("Fetched {} of {} requested resumes", resumes.len(), req.ids.len());

    Ok(HttpResponse::Ok().json(resumes))
}

/// GET /api/resumes/{id}
async fn get_resume(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let resume = state
        .store
        .get_resume(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch resume", "Resume not found"))?;

    Ok(HttpResponse::Ok().json(resume))
}

/// Replace the user-corrected data of a resume
///
/// PUT /api/resumes/{id}
///
/// Request body:
/// ```json
/// { "corrected_data": { "name": "...", "skills": ["..."] } }
/// ```
async fn update_corrected_data(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCorrectedDataRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let resume = state
        .store
        .update_corrected_data(id, req.corrected_data.as_ref())
        .await
        .map_err(|e| {
            ApiError::from_store(e, "Failed to update corrected data", "Resume not found")
        })?;

    tracing::info!("Updated corrected data for resume {}", id);

    Ok(HttpResponse::Ok().json(resume))
}
