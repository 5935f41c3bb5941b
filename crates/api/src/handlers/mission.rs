//! Handlers for the `/mision` resource.
//!
//! Successful responses are bare JSON (no envelope). Not-found conditions
//! are rendered by [`AppError`](crate::error::AppError) as a plain-text 404.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use mission_core::error::CoreError;
use mission_core::mission::MISSIONS_RESET_MESSAGE;
use mission_core::types::DbId;
use mission_db::models::mission::CreateMission;

use crate::error::AppResult;
use crate::query::{LevelParams, NamePrefixParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /mision
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let missions = state.missions.list_all().await?;
    Ok(Json(missions))
}

/// GET /mision/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mission = state.missions.get_by_id(id).await?;
    Ok(Json(mission))
}

/// GET /mision/recompensa/{id}
///
/// Responds with the bare reward integer.
pub async fn get_reward(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reward = state.missions.get_reward(id).await?;
    Ok(Json(reward))
}

/// GET /mision/nombre?prefijo=
pub async fn list_by_name_prefix(
    State(state): State<AppState>,
    Query(params): Query<NamePrefixParams>,
) -> AppResult<impl IntoResponse> {
    let missions = state.missions.list_by_name_prefix(&params.prefijo).await?;
    Ok(Json(missions))
}

/// GET /mision/nivel?nivel=
pub async fn list_by_level(
    State(state): State<AppState>,
    Query(params): Query<LevelParams>,
) -> AppResult<impl IntoResponse> {
    let missions = state.missions.list_by_level_at_most(params.nivel).await?;
    Ok(Json(missions))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /mision
///
/// Create a mission. Responds 201 with a `Location: /mision/{id}` header.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMission>,
) -> AppResult<impl IntoResponse> {
    let mission = state.missions.create(input).await?;
    let id = mission
        .id
        .ok_or_else(|| CoreError::Internal("saved mission has no id".into()))?;
    let location = format!("/mision/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(mission),
    ))
}

/// PUT /mision/{id}
///
/// Mark a mission as completed.
pub async fn mark_completed(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mission = state.missions.mark_completed(id).await?;
    Ok(Json(mission))
}

/// DELETE /mision/{id}
///
/// Soft delete: marks the mission inactive and returns it.
pub async fn mark_inactive(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mission = state.missions.mark_inactive(id).await?;
    Ok(Json(mission))
}

/// POST /mision/reinicio
pub async fn reset_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.missions.reset_all().await?;
    Ok(MISSIONS_RESET_MESSAGE)
}
