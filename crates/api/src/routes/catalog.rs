//! Route definitions for the flat reference catalogs.
//!
//! Every catalog exposes the same shape:
//!
//! ```text
//! GET    /          -> list
//! POST   /          -> create
//! GET    /{id}      -> get_by_id
//! PUT    /{id}      -> update
//! DELETE /{id}      -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{armour, gear, mutation, skill, talent, traits};
use crate::state::AppState;

/// Routes mounted at `/skills`.
pub fn skills() -> Router<AppState> {
    Router::new()
        .route("/", get(skill::list).post(skill::create))
        .route(
            "/{id}",
            get(skill::get_by_id).put(skill::update).delete(skill::delete),
        )
}

/// Routes mounted at `/talents`.
pub fn talents() -> Router<AppState> {
    Router::new()
        .route("/", get(talent::list).post(talent::create))
        .route(
            "/{id}",
            get(talent::get_by_id)
                .put(talent::update)
                .delete(talent::delete),
        )
}

/// Routes mounted at `/traits`.
pub fn traits() -> Router<AppState> {
    Router::new()
        .route("/", get(traits::list).post(traits::create))
        .route(
            "/{id}",
            get(traits::get_by_id)
                .put(traits::update)
                .delete(traits::delete),
        )
}

/// Routes mounted at `/gear`.
pub fn gear() -> Router<AppState> {
    Router::new()
        .route("/", get(gear::list_gear).post(gear::create_gear))
        .route(
            "/{id}",
            get(gear::get_gear)
                .put(gear::update_gear)
                .delete(gear::delete_gear),
        )
}

/// Routes mounted at `/armour`.
pub fn armour() -> Router<AppState> {
    Router::new()
        .route("/", get(armour::list).post(armour::create))
        .route(
            "/{id}",
            get(armour::get_by_id)
                .put(armour::update)
                .delete(armour::delete),
        )
}

/// Routes mounted at `/mutations`.
pub fn mutations() -> Router<AppState> {
    Router::new()
        .route("/", get(mutation::list).post(mutation::create))
        .route(
            "/{id}",
            get(mutation::get_by_id)
                .put(mutation::update)
                .delete(mutation::delete),
        )
}

/// Routes mounted at `/divinations`.
pub fn divinations() -> Router<AppState> {
    Router::new()
        .route("/", get(gear::list_divinations).post(gear::create_divination))
        .route(
            "/{id}",
            get(gear::get_divination)
                .put(gear::update_divination)
                .delete(gear::delete_divination),
        )
}
