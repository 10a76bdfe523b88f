//! Route definitions for characters.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (sheet)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// PUT    /{id}/home-world               -> choose_home_world
/// POST   /{id}/home-world/random        -> roll_home_world
/// GET    /{id}/characteristics          -> list_characteristics
/// PUT    /{id}/characteristics          -> set_characteristics
/// PUT    /{id}/{association}            -> set_association
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
        .route("/{id}/home-world", put(character::choose_home_world))
        .route("/{id}/home-world/random", post(character::roll_home_world))
        .route(
            "/{id}/characteristics",
            get(character::list_characteristics).put(character::set_characteristics),
        )
        .route("/{id}/{association}", put(character::set_association))
}
