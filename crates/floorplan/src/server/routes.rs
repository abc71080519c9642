//! Route handlers.

use axum::{extract::rejection::JsonRejection, Json};
use floorplan_common::ProjectData;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::response::WallsResponse;

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeRequest {
    #[schemars(description = "Base64-encoded image bytes (PNG, JPEG, ...)")]
    pub image: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SchemaResponse {
    pub analyze_request: schemars::schema::RootSchema,
    pub analyze_response: schemars::schema::RootSchema,
    pub project: schemars::schema::RootSchema,
}

/// POST /analyze - detect wall bounding boxes in a floor plan.
pub async fn analyze(
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<WallsResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(payload_len = request.image.len(), "Analyze request received");

    // CPU-bound; keep it off the async workers.
    let response = tokio::task::spawn_blocking(move || crate::analyze_base64(&request.image)).await??;

    Ok(Json(response))
}

/// POST /upload_project - answer any project description with the sample hierarchy.
pub async fn upload_project(
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<ProjectData>, ApiError> {
    let Json(project) = payload?;
    tracing::info!(received = %project, "Project upload received");

    Ok(Json(ProjectData::sample()))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "floorplan-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /schema - JSON schemas of the request and response documents.
pub async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        analyze_request: schemars::schema_for!(AnalyzeRequest),
        analyze_response: WallsResponse::schema(),
        project: ProjectData::schema(),
    })
}
