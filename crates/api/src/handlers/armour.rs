//! Handlers for the `/armour` catalog.
//!
//! Each piece covers one hit location (`HEAD`, `BODY`, `LEFT_ARM`, ...).

use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::armour::{Armour, CreateArmour, UpdateArmour};
use acolyte_db::repositories::ArmourRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Armour",
        id,
    })
}

/// POST /api/v1/armour
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArmour>,
) -> AppResult<(StatusCode, Json<Armour>)> {
    input.validate()?;
    let row = ArmourRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/armour
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Armour>>> {
    let rows = ArmourRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/v1/armour/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Armour>> {
    let row = ArmourRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// PUT /api/v1/armour/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArmour>,
) -> AppResult<Json<Armour>> {
    input.validate()?;
    let row = ArmourRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(row))
}

/// DELETE /api/v1/armour/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ArmourRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
