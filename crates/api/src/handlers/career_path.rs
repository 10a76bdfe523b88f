//! Handlers for the `/career-paths` resource and its ranks.

use acolyte_core::catalog::validate_rank;
use acolyte_core::error::CoreError;
use acolyte_core::types::DbId;
use acolyte_db::models::career::{
    CareerPath, CareerPathAssociation, CareerPathDetail, CareerRank, CreateCareerPath,
    CreateCareerRank, UpdateCareerPath,
};
use acolyte_db::models::link::SetLinks;
use acolyte_db::repositories::{CareerPathRepo, LinkRepo};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn career_path_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CareerPath",
        id,
    })
}

async fn ensure_career_path_exists(state: &AppState, id: DbId) -> AppResult<()> {
    CareerPathRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| career_path_not_found(id))
}

/// POST /api/v1/career-paths
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCareerPath>,
) -> AppResult<(StatusCode, Json<CareerPath>)> {
    input.validate()?;
    let career_path = CareerPathRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(career_path)))
}

/// GET /api/v1/career-paths
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CareerPath>>> {
    let career_paths = CareerPathRepo::list(&state.pool).await?;
    Ok(Json(career_paths))
}

/// GET /api/v1/career-paths/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CareerPathDetail>> {
    let detail = CareerPathRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| career_path_not_found(id))?;
    Ok(Json(detail))
}

/// PUT /api/v1/career-paths/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCareerPath>,
) -> AppResult<Json<CareerPath>> {
    input.validate()?;
    let career_path = CareerPathRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| career_path_not_found(id))?;
    Ok(Json(career_path))
}

/// DELETE /api/v1/career-paths/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CareerPathRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(career_path_not_found(id))
    }
}

/// PUT /api/v1/career-paths/{id}/{association}
///
/// `association` is one of `skills`, `talents`, `gear`, `traits`.
pub async fn set_association(
    State(state): State<AppState>,
    Path((id, slug)): Path<(DbId, String)>,
    Json(input): Json<SetLinks>,
) -> AppResult<Json<SetLinks>> {
    let association = CareerPathAssociation::from_slug(&slug).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown career path association '{slug}'"))
    })?;
    ensure_career_path_exists(&state, id).await?;

    let ids = LinkRepo::replace(&state.pool, association.link(), id, &input.ids).await?;
    Ok(Json(SetLinks { ids }))
}

// ---------------------------------------------------------------------------
// Ranks
// ---------------------------------------------------------------------------

/// GET /api/v1/career-paths/{id}/ranks
pub async fn list_ranks(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CareerRank>>> {
    ensure_career_path_exists(&state, id).await?;
    let ranks = CareerPathRepo::list_ranks(&state.pool, id).await?;
    Ok(Json(ranks))
}

/// POST /api/v1/career-paths/{id}/ranks
pub async fn create_rank(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCareerRank>,
) -> AppResult<(StatusCode, Json<CareerRank>)> {
    input.validate()?;
    validate_rank(input.min_xp, input.max_xp, input.rank_level)?;
    ensure_career_path_exists(&state, id).await?;
    let rank = CareerPathRepo::create_rank(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(rank)))
}
