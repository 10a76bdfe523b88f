//! Handlers for the `/home-worlds` resource and its owned quirks and classes.

use acolyte_core::catalog::validate_roll_range;
use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::home_world::{
    CreateHomeWorld, CreateHomeWorldClass, CreateQuirk, HomeWorld, HomeWorldAssociation,
    HomeWorldClass, HomeWorldDetail, Quirk, UpdateHomeWorld,
};
use acolyte_db::models::link::SetLinks;
use acolyte_db::repositories::{HomeWorldRepo, LinkRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn home_world_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "HomeWorld",
        id,
    })
}

async fn find_home_world(state: &AppState, id: DbId) -> AppResult<HomeWorld> {
    HomeWorldRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| home_world_not_found(id))
}

/// POST /api/v1/home-worlds
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateHomeWorld>,
) -> AppResult<(StatusCode, Json<HomeWorld>)> {
    input.validate()?;
    validate_roll_range(input.start_roll, input.end_roll)?;
    let home_world = HomeWorldRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(home_world)))
}

/// GET /api/v1/home-worlds
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<HomeWorld>>> {
    let home_worlds = HomeWorldRepo::list(&state.pool).await?;
    Ok(Json(home_worlds))
}

/// GET /api/v1/home-worlds/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<HomeWorldDetail>> {
    let detail = HomeWorldRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| home_world_not_found(id))?;
    Ok(Json(detail))
}

/// PUT /api/v1/home-worlds/{id}
///
/// A partial update of the roll range is checked against the stored bound
/// it leaves in place.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHomeWorld>,
) -> AppResult<Json<HomeWorld>> {
    input.validate()?;
    if input.start_roll.is_some() || input.end_roll.is_some() {
        let existing = find_home_world(&state, id).await?;
        validate_roll_range(
            input.start_roll.unwrap_or(existing.start_roll),
            input.end_roll.unwrap_or(existing.end_roll),
        )?;
    }

    let home_world = HomeWorldRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| home_world_not_found(id))?;
    Ok(Json(home_world))
}

/// DELETE /api/v1/home-worlds/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if HomeWorldRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(home_world_not_found(id))
    }
}

/// PUT /api/v1/home-worlds/{id}/{association}
///
/// `association` is one of `skills`, `traits`, `career-paths`.
pub async fn set_association(
    State(state): State<AppState>,
    Path((id, slug)): Path<(DbId, String)>,
    Json(input): Json<SetLinks>,
) -> AppResult<Json<SetLinks>> {
    let association = HomeWorldAssociation::from_slug(&slug).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown home world association '{slug}'"))
    })?;
    find_home_world(&state, id).await?;

    let ids = LinkRepo::replace(&state.pool, association.link(), id, &input.ids).await?;
    Ok(Json(SetLinks { ids }))
}

// ---------------------------------------------------------------------------
// Quirks
// ---------------------------------------------------------------------------

/// GET /api/v1/home-worlds/{id}/quirks
pub async fn list_quirks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Quirk>>> {
    find_home_world(&state, id).await?;
    let quirks = HomeWorldRepo::list_quirks(&state.pool, id).await?;
    Ok(Json(quirks))
}

/// POST /api/v1/home-worlds/{id}/quirks
pub async fn create_quirk(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateQuirk>,
) -> AppResult<(StatusCode, Json<Quirk>)> {
    input.validate()?;
    find_home_world(&state, id).await?;
    let quirk = HomeWorldRepo::create_quirk(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(quirk)))
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// GET /api/v1/home-worlds/{id}/classes
pub async fn list_classes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<HomeWorldClass>>> {
    find_home_world(&state, id).await?;
    let classes = HomeWorldRepo::list_classes(&state.pool, id).await?;
    Ok(Json(classes))
}

/// POST /api/v1/home-worlds/{id}/classes
pub async fn create_class(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateHomeWorldClass>,
) -> AppResult<(StatusCode, Json<HomeWorldClass>)> {
    input.validate()?;
    find_home_world(&state, id).await?;
    let class = HomeWorldRepo::create_class(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(class)))
}
