//! Handlers for the name-only `/gear` and `/divinations` catalogs.

use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::divination::{Divination, SaveDivination};
use acolyte_db::models::gear::{Gear, SaveGear};
use acolyte_db::repositories::{DivinationRepo, GearRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Gear
// ---------------------------------------------------------------------------

fn gear_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Gear", id })
}

/// POST /api/v1/gear
pub async fn create_gear(
    State(state): State<AppState>,
    Json(input): Json<SaveGear>,
) -> AppResult<(StatusCode, Json<Gear>)> {
    input.validate()?;
    let gear = GearRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(gear)))
}

/// GET /api/v1/gear
pub async fn list_gear(State(state): State<AppState>) -> AppResult<Json<Vec<Gear>>> {
    let gear = GearRepo::list(&state.pool).await?;
    Ok(Json(gear))
}

/// GET /api/v1/gear/{id}
pub async fn get_gear(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Gear>> {
    let gear = GearRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| gear_not_found(id))?;
    Ok(Json(gear))
}

/// PUT /api/v1/gear/{id}
pub async fn update_gear(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveGear>,
) -> AppResult<Json<Gear>> {
    input.validate()?;
    let gear = GearRepo::rename(&state.pool, id, &input)
        .await?
        .ok_or_else(|| gear_not_found(id))?;
    Ok(Json(gear))
}

/// DELETE /api/v1/gear/{id}
pub async fn delete_gear(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GearRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(gear_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Divinations
// ---------------------------------------------------------------------------

fn divination_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Divination",
        id,
    })
}

/// POST /api/v1/divinations
pub async fn create_divination(
    State(state): State<AppState>,
    Json(input): Json<SaveDivination>,
) -> AppResult<(StatusCode, Json<Divination>)> {
    input.validate()?;
    let divination = DivinationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(divination)))
}

/// GET /api/v1/divinations
pub async fn list_divinations(State(state): State<AppState>) -> AppResult<Json<Vec<Divination>>> {
    let divinations = DivinationRepo::list(&state.pool).await?;
    Ok(Json(divinations))
}

/// GET /api/v1/divinations/{id}
pub async fn get_divination(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Divination>> {
    let divination = DivinationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| divination_not_found(id))?;
    Ok(Json(divination))
}

/// PUT /api/v1/divinations/{id}
pub async fn update_divination(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveDivination>,
) -> AppResult<Json<Divination>> {
    input.validate()?;
    let divination = DivinationRepo::rename(&state.pool, id, &input)
        .await?
        .ok_or_else(|| divination_not_found(id))?;
    Ok(Json(divination))
}

/// DELETE /api/v1/divinations/{id}
pub async fn delete_divination(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DivinationRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(divination_not_found(id))
    }
}
