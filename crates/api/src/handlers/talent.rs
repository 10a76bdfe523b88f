//! Handlers for the `/talents` catalog.

use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::talent::{CreateTalent, Talent, UpdateTalent};
use acolyte_db::repositories::TalentRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Talent",
        id,
    })
}

/// POST /api/v1/talents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTalent>,
) -> AppResult<(StatusCode, Json<Talent>)> {
    input.validate()?;
    let row = TalentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/talents
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Talent>>> {
    let rows = TalentRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/talents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Talent>> {
    let row = TalentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PUT /api/v1/talents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTalent>,
) -> AppResult<Json<Talent>> {
    input.validate()?;
    let row = TalentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/talents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TalentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
