//! HTTP-level integration tests for the games endpoints.
//!
//! Each test gets a fresh migrated database from `sqlx::test` and seeds the
//! sample catalog (2 publishers, 2 categories, 2 games wired 0/0 and 1/1).

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;
use tailspin_db::seed::seed_catalog;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_games_returns_seeded_games_with_nested_refs(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let games = json.as_array().unwrap();
    assert_eq!(games.len(), 2);

    assert_eq!(games[0]["title"], "Pipeline Panic");
    assert_eq!(games[0]["starRating"], 4.5);
    assert_eq!(games[0]["publisher"]["name"], "DevGames Inc");
    assert_eq!(games[0]["category"]["name"], "Strategy");

    assert_eq!(games[1]["title"], "Agile Adventures");
    assert_eq!(games[1]["publisher"]["name"], "Scrum Masters");
    assert_eq!(games[1]["category"]["name"], "Card Game");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn game_objects_carry_all_wire_fields(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/games").await).await;
    let first = &json.as_array().unwrap()[0];

    for field in ["id", "title", "description", "starRating", "publisher", "category"] {
        assert!(
            first.get(field).is_some(),
            "game object should contain '{field}'"
        );
    }
    assert!(first["publisher"]["id"].is_number());
    assert!(first["category"]["id"].is_number());
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_game_by_id_returns_projection(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let games = body_json(get(app, "/api/games").await).await;
    let id = games[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Pipeline Panic");
    assert_eq!(json["publisher"]["name"], "DevGames Inc");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_game_returns_404_with_message(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Game not found");
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_by_category_restricts_results(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let category_id = all[0]["category"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/games?category_id={category_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let filtered = body_json(response).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    for game in filtered {
        assert_eq!(game["category"]["id"], category_id);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_by_publisher_restricts_results(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let publisher_id = all[1]["publisher"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let filtered = body_json(get(app, &format!("/api/games?publisher_id={publisher_id}")).await).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["publisher"]["id"], publisher_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_combine_with_and_semantics(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let category_id = all[0]["category"]["id"].as_i64().unwrap();
    let publisher_id = all[0]["publisher"]["id"].as_i64().unwrap();
    // Cross-wire the second game's publisher: both filters together match nothing.
    let other_publisher_id = all[1]["publisher"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let both = body_json(
        get(
            app,
            &format!("/api/games?category_id={category_id}&publisher_id={publisher_id}"),
        )
        .await,
    )
    .await;
    let both = both.as_array().unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0]["category"]["id"], category_id);
    assert_eq!(both[0]["publisher"]["id"], publisher_id);

    let app = common::build_test_app(pool);
    let none = body_json(
        get(
            app,
            &format!("/api/games?category_id={category_id}&publisher_id={other_publisher_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(none.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filter_with_no_matches_returns_empty_list(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games?category_id=999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_filter_is_ignored(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/games?category_id=invalid").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Behaves exactly as if the parameter were omitted.
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn signed_filter_value_is_ignored_not_applied(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    // "-1" is malformed (not digit-only), so the listing stays unfiltered
    // instead of filtering by -1 and returning nothing.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/games?category_id=-1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_numeric_filter_falls_back_to_other_valid_filter(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let publisher_id = all[0]["publisher"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let filtered = body_json(
        get(
            app,
            &format!("/api/games?category_id=invalid&publisher_id={publisher_id}"),
        )
        .await,
    )
    .await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["publisher"]["id"], publisher_id);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_game_returns_201_with_joined_projection(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let publisher_id = all[0]["publisher"]["id"].as_i64().unwrap();
    let category_id = all[1]["category"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/games",
        serde_json::json!({
            "title": "Refactor Rally",
            "description": "Race to clean up the legacy codebase",
            "starRating": 3.8,
            "publisher_id": publisher_id,
            "category_id": category_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Refactor Rally");
    assert_eq!(json["publisher"]["id"], publisher_id);
    assert_eq!(json["category"]["id"], category_id);

    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/games").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_game_with_short_title_returns_400(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/games",
        serde_json::json!({"title": "X", "publisher_id": 1, "category_id": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("Title"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_game_with_unknown_publisher_returns_404(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let all = body_json(get(app, "/api/games").await).await;
    let category_id = all[0]["category"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/games",
        serde_json::json!({
            "title": "Orphan Game",
            "publisher_id": 999,
            "category_id": category_id,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Publisher not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_game_with_out_of_range_rating_returns_400(pool: PgPool) {
    seed_catalog(&pool).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/games",
        serde_json::json!({
            "title": "Overrated",
            "starRating": 6.0,
            "publisher_id": 1,
            "category_id": 1,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
