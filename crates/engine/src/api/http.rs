//! HTTP routes.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use screenplay_shared::{
    ExportFdxRequest, FdxExportResponse, HealthResponse, NarrationResponse,
    PrepareNarrationRequest, ServiceInfo, FDX_CONTENT_TYPE,
};

use super::error::ApiError;
use super::extract::ApiJson;
use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/export/fdx", post(export_fdx))
        .route("/export/fdx/json", post(export_fdx_json))
        .route("/tts/prepare", post(prepare_narration))
}

async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Screenplay Editor API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

// =============================================================================
// FDX export
// =============================================================================

/// Return the FDX document as a file download.
async fn export_fdx(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<ExportFdxRequest>,
) -> Result<Response, ApiError> {
    let screenplay = request.into_screenplay();
    let export = app.use_cases.export.execute(&screenplay)?;
    tracing::info!(
        elements = screenplay.len(),
        filename = %export.filename,
        "Exported FDX file"
    );

    let disposition = HeaderValue::from_str(&export.content_disposition())
        .map_err(|e| ApiError::Internal(format!("Invalid Content-Disposition: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(FDX_CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}

/// Return the FDX document inside JSON, for Apps Script clients.
async fn export_fdx_json(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<ExportFdxRequest>,
) -> Result<Json<FdxExportResponse>, ApiError> {
    let screenplay = request.into_screenplay();
    let export = app.use_cases.export.execute(&screenplay)?;
    tracing::info!(
        elements = screenplay.len(),
        filename = %export.filename,
        "Exported FDX as JSON"
    );

    Ok(Json(FdxExportResponse::new(export.filename, export.content)))
}

// =============================================================================
// Narration
// =============================================================================

/// Annotate every element with voice parameters for client-side speech.
async fn prepare_narration(
    State(app): State<Arc<App>>,
    ApiJson(request): ApiJson<PrepareNarrationRequest>,
) -> Result<Json<NarrationResponse>, ApiError> {
    let (screenplay, characters) = request.into_parts();
    let narrated = app
        .use_cases
        .narration
        .execute(&screenplay, characters)?;
    tracing::info!(elements = narrated.len(), "Prepared narration");

    Ok(Json(NarrationResponse::new(screenplay.title, narrated)))
}
