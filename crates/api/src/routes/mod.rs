pub mod career_path;
pub mod catalog;
pub mod character;
pub mod health;
pub mod home_world;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /vocabularies                                    characteristic, skill and armour codes
///
/// /characters                                      list, create
/// /characters/{id}                                 sheet, update, delete
/// /characters/{id}/home-world                      manual choice (PUT)
/// /characters/{id}/home-world/random               weighted roll (POST)
/// /characters/{id}/characteristics                 read, upsert
/// /characters/{id}/{association}                   replace association set (PUT)
///
/// /home-worlds                                     list, create
/// /home-worlds/{id}                                detail, update, delete
/// /home-worlds/{id}/quirks                         list, create
/// /home-worlds/{id}/classes                        list, create
/// /home-worlds/{id}/{association}                  replace association set (PUT)
///
/// /career-paths                                    list, create
/// /career-paths/{id}                               detail, update, delete
/// /career-paths/{id}/ranks                         list, create
/// /career-paths/{id}/{association}                 replace starting set (PUT)
///
/// /skills, /talents, /traits, /gear, /armour,
/// /mutations, /divinations  (+ /{id})              catalog CRUD
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/vocabularies", get(handlers::vocabulary::list))
        .nest("/characters", character::router())
        .nest("/home-worlds", home_world::router())
        .nest("/career-paths", career_path::router())
        .nest("/skills", catalog::skills())
        .nest("/talents", catalog::talents())
        .nest("/traits", catalog::traits())
        .nest("/gear", catalog::gear())
        .nest("/armour", catalog::armour())
        .nest("/mutations", catalog::mutations())
        .nest("/divinations", catalog::divinations())
}
