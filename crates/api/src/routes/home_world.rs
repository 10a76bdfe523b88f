//! Route definitions for home worlds.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::home_world;
use crate::state::AppState;

/// Routes mounted at `/home-worlds`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (detail)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/quirks                   -> list_quirks
/// POST   /{id}/quirks                   -> create_quirk
/// GET    /{id}/classes                  -> list_classes
/// POST   /{id}/classes                  -> create_class
/// PUT    /{id}/{association}            -> set_association (skills, traits, career-paths)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_world::list).post(home_world::create))
        .route(
            "/{id}",
            get(home_world::get_by_id)
                .put(home_world::update)
                .delete(home_world::delete),
        )
        .route(
            "/{id}/quirks",
            get(home_world::list_quirks).post(home_world::create_quirk),
        )
        .route(
            "/{id}/classes",
            get(home_world::list_classes).post(home_world::create_class),
        )
        .route("/{id}/{association}", put(home_world::set_association))
}
