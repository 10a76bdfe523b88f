//! Route definitions for career paths.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::career_path;
use crate::state::AppState;

/// Routes mounted at `/career-paths`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id (detail)
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete
/// GET    /{id}/ranks                    -> list_ranks
/// POST   /{id}/ranks                    -> create_rank
/// PUT    /{id}/{association}            -> set_association (skills, talents, gear, traits)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(career_path::list).post(career_path::create))
        .route(
            "/{id}",
            get(career_path::get_by_id)
                .put(career_path::update)
                .delete(career_path::delete),
        )
        .route(
            "/{id}/ranks",
            get(career_path::list_ranks).post(career_path::create_rank),
        )
        .route("/{id}/{association}", put(career_path::set_association))
}
