//! HTTP-level integration tests for the flat reference catalogs.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

/// Create, read, update, delete one row of a catalog and check the 404s.
async fn exercise_crud(
    pool: &PgPool,
    base: &str,
    create: serde_json::Value,
    update: serde_json::Value,
) {
    let id = create_id(pool, base, create).await;
    let uri = format!("{base}/{id}");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

    let response = put_json(common::build_test_app(pool.clone()), &uri, update.clone()).await;
    assert_eq!(response.status(), StatusCode::OK, "PUT {uri}");
    let json = body_json(response).await;
    for (key, value) in update.as_object().unwrap() {
        assert_eq!(&json[key], value, "PUT {uri} field {key}");
    }

    let list = body_json(get(common::build_test_app(pool.clone()), base).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1, "GET {base}");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT, "DELETE {uri}");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri} after delete");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/skills",
        json!({ "name": "Awareness", "type": "BASIC", "characteristic": "Per" }),
        json!({ "type": "ADVANCED", "descriptor": "Perception based" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_talent_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/talents",
        json!({ "name": "Quick Draw", "benefit": "Ready as a free action" }),
        json!({ "group": "Combat" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trait_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/traits",
        json!({ "name": "Unnatural Strength" }),
        json!({ "full_description": "Doubles the Strength bonus" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gear_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/gear",
        json!({ "name": "Chrono" }),
        json!({ "name": "Chronometer" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_armour_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/armour",
        json!({ "name": "Flak Vest", "type": "BODY" }),
        json!({ "type": "LEFT_ARM" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mutation_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/mutations",
        json!({ "name": "Grotesque" }),
        json!({ "description": "Hideous to behold" }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_divination_crud(pool: PgPool) {
    exercise_crud(
        &pool,
        "/api/v1/divinations",
        json!({ "name": "Trust in your fear." }),
        json!({ "name": "Only the insane have strength enough to prosper." }),
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_with_unknown_characteristic_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/skills",
        json!({ "name": "Psyniscience", "type": "ADVANCED", "characteristic": "Psy" }),
    )
    .await;
    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_gear_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/gear", json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_404(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/talents/999999",
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
