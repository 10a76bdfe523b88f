//! Handlers for the `/mutations` catalog.

use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::mutation::{CreateMutation, Mutation, UpdateMutation};
use acolyte_db::repositories::MutationRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Mutation",
        id,
    })
}

/// POST /api/v1/mutations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMutation>,
) -> AppResult<(StatusCode, Json<Mutation>)> {
    input.validate()?;
    let row = MutationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/mutations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Mutation>>> {
    let rows = MutationRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/mutations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mutation>> {
    let row = MutationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PUT /api/v1/mutations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMutation>,
) -> AppResult<Json<Mutation>> {
    input.validate()?;
    let row = MutationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/mutations/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MutationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
