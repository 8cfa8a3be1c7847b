/// HTTP request handlers
use crate::domain::{Health, LaunchRecord, LaunchStatus};
use crate::errors::ApiError;
use crate::services::LaunchService;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub launch_service: Arc<LaunchService>,
    pub default_limit: u32,
}

/// Pagination parameters accepted by the launch endpoints.
#[derive(Debug, Deserialize)]
pub struct LaunchQuery {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
}

/// Resolve the requested limit against the configured default, never
/// letting it drop below 1.
pub fn effective_limit(requested: Option<u32>, default: u32) -> u32 {
    requested.unwrap_or(default).max(1)
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// List launches of every kind
pub async fn get_launches(
    State(state): State<AppState>,
    Query(params): Query<LaunchQuery>,
) -> Result<Json<Vec<LaunchRecord>>, ApiError> {
    list_launches(state, params, LaunchStatus::All).await
}

/// List upcoming launches
pub async fn get_upcoming_launches(
    State(state): State<AppState>,
    Query(params): Query<LaunchQuery>,
) -> Result<Json<Vec<LaunchRecord>>, ApiError> {
    list_launches(state, params, LaunchStatus::Upcoming).await
}

/// List past launches
pub async fn get_previous_launches(
    State(state): State<AppState>,
    Query(params): Query<LaunchQuery>,
) -> Result<Json<Vec<LaunchRecord>>, ApiError> {
    list_launches(state, params, LaunchStatus::Previous).await
}

async fn list_launches(
    state: AppState,
    params: LaunchQuery,
    kind: LaunchStatus,
) -> Result<Json<Vec<LaunchRecord>>, ApiError> {
    let limit = effective_limit(params.limit, state.default_limit);
    let launches = state.launch_service.list(kind, limit, params.offset).await?;
    Ok(Json(launches))
}
