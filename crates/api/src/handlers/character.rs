//! Handlers for the `/characters` resource.
//!
//! Besides plain CRUD a character has:
//! - `/characters/{id}/home-world` (manual choice) and
//!   `/characters/{id}/home-world/random` (weighted roll)
//! - `/characters/{id}/characteristics`
//! - `/characters/{id}/{association}` replace-set endpoints

use acolyte_core::error::CoreError;
use acolyte_core::home_world::assign_random_home_world;
use acolyte_core::types::DbId;
use acolyte_db::models::character::{
    Character, CharacterAssociation, CharacterSheet, ChooseHomeWorld, CreateCharacter,
    UpdateCharacter,
};
use acolyte_db::models::characteristic::{CharacterCharacteristic, SetCharacteristic};
use acolyte_db::models::link::SetLinks;
use acolyte_db::repositories::{CharacterRepo, HomeWorldRepo, LinkRepo};
use acolyte_db::roll_store::PgRollStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn character_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Character",
        id,
    })
}

async fn ensure_character_exists(state: &AppState, id: DbId) -> AppResult<()> {
    CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or_else(|| character_not_found(id))
}

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    input.validate()?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(character_id = character.id, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
///
/// Returns the full sheet: the character row plus every linked id and
/// characteristic value.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterSheet>> {
    let sheet = CharacterRepo::find_sheet(&state.pool, id)
        .await?
        .ok_or_else(|| character_not_found(id))?;
    Ok(Json(sheet))
}

/// PUT /api/v1/characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    input.validate()?;
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| character_not_found(id))?;
    Ok(Json(character))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CharacterRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(character_not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Home world
// ---------------------------------------------------------------------------

/// PUT /api/v1/characters/{id}/home-world
///
/// Sets the home world to the given id, or clears it with `null`.
pub async fn choose_home_world(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ChooseHomeWorld>,
) -> AppResult<Json<Character>> {
    if let Some(home_world_id) = input.home_world_id {
        HomeWorldRepo::find_by_id(&state.pool, home_world_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "HomeWorld",
                id: home_world_id,
            }))?;
    }

    let character = CharacterRepo::set_home_world(&state.pool, id, input.home_world_id)
        .await?
        .ok_or_else(|| character_not_found(id))?;
    Ok(Json(character))
}

/// POST /api/v1/characters/{id}/home-world/random
///
/// Draws a home world weighted by roll range width and stores it on the
/// character, replacing any previous home world.
pub async fn roll_home_world(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Character>> {
    let store = PgRollStore::new(state.pool.clone());
    let mut rng = state.roller.fork();

    let character = assign_random_home_world(&store, &mut rng, id).await?;
    tracing::info!(
        character_id = id,
        home_world_id = ?character.home_world_id,
        "Home world rolled"
    );
    Ok(Json(character))
}

// ---------------------------------------------------------------------------
// Characteristics
// ---------------------------------------------------------------------------

/// GET /api/v1/characters/{id}/characteristics
pub async fn list_characteristics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<CharacterCharacteristic>>> {
    ensure_character_exists(&state, id).await?;
    let values = CharacterRepo::list_characteristics(&state.pool, id).await?;
    Ok(Json(values))
}

/// PUT /api/v1/characters/{id}/characteristics
///
/// Upserts each `{ characteristic, value }` entry; characteristics not in the
/// body are left untouched.
pub async fn set_characteristics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Vec<SetCharacteristic>>,
) -> AppResult<Json<Vec<CharacterCharacteristic>>> {
    for entry in &input {
        entry.validate()?;
    }
    ensure_character_exists(&state, id).await?;
    let values = CharacterRepo::upsert_characteristics(&state.pool, id, &input).await?;
    Ok(Json(values))
}

// ---------------------------------------------------------------------------
// Associations
// ---------------------------------------------------------------------------

/// PUT /api/v1/characters/{id}/{association}
///
/// Replaces the whole association set, e.g. `PUT /characters/3/skills` with
/// `{ "ids": [1, 4] }`.
pub async fn set_association(
    State(state): State<AppState>,
    Path((id, slug)): Path<(DbId, String)>,
    Json(input): Json<SetLinks>,
) -> AppResult<Json<SetLinks>> {
    let association = CharacterAssociation::from_slug(&slug).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown character association '{slug}'"))
    })?;
    ensure_character_exists(&state, id).await?;

    let ids = LinkRepo::replace(&state.pool, association.link(), id, &input.ids).await?;
    tracing::debug!(
        character_id = id,
        association = %slug,
        count = ids.len(),
        "Character association replaced"
    );
    Ok(Json(SetLinks { ids }))
}
