//! Drawing endpoints
//!
//! Each handler is one contract-to-repository mapping; no handler
//! issues more than a single database statement.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::repos::{Drawing, DrawingRepo, DrawingSummary};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{drawing::DEFAULT_TITLE, DrawingTitle};

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

/// Create drawing request
///
/// `data` is the client's stroke document: arbitrary JSON, stored
/// verbatim. It must be present; `title` may be omitted.
#[derive(Deserialize)]
pub struct CreateDrawingRequest {
    #[serde(default = "default_title")]
    pub title: String,
    pub data: Value,
}

/// Full drawing response, stroke document included
#[derive(Serialize)]
pub struct DrawingResponse {
    pub id: i32,
    pub title: String,
    pub data: Value,
    pub created_at: String,
}

impl From<Drawing> for DrawingResponse {
    fn from(d: Drawing) -> Self {
        Self {
            id: d.id,
            title: d.title,
            data: d.data,
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

/// List item: carries no `data` field, so list responses stay small
/// however large the stored stroke documents get
#[derive(Serialize)]
pub struct DrawingListItem {
    pub id: i32,
    pub title: String,
    pub created_at: String,
}

impl From<DrawingSummary> for DrawingListItem {
    fn from(d: DrawingSummary) -> Self {
        Self {
            id: d.id,
            title: d.title,
            created_at: d.created_at.to_rfc3339(),
        }
    }
}

/// POST /drawings - store a new drawing
async fn create_drawing(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateDrawingRequest>,
) -> Result<Json<DrawingResponse>, ApiError> {
    // Title is validated before any storage access
    let title = DrawingTitle::new(&req.title)?;
    let drawing = DrawingRepo::new(&state.pool).create(title, req.data).await?;

    Ok(Json(DrawingResponse::from(drawing)))
}

/// GET /drawings - list all drawings, newest first
async fn list_drawings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DrawingListItem>>, ApiError> {
    let summaries = DrawingRepo::new(&state.pool).list().await?;

    Ok(Json(
        summaries.into_iter().map(DrawingListItem::from).collect(),
    ))
}

/// GET /drawings/{id} - fetch one drawing with its stroke document
async fn get_drawing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DrawingResponse>, ApiError> {
    let drawing = DrawingRepo::new(&state.pool).get(id).await?;
    Ok(Json(DrawingResponse::from(drawing)))
}

/// DELETE /drawings/{id} - hard delete; 404 if already gone
async fn delete_drawing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    DrawingRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Drawing routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drawings", get(list_drawings).post(create_drawing))
        .route("/drawings/{id}", get(get_drawing).delete(delete_drawing))
}
