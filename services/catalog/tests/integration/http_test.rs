use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestRequest;
use serde_json::{Value, json};

use cinema_testing::auth::MockAuth;

use crate::helpers::{ALIEN, DUNE, INCEPTION, TENET, create_user, test_server};

fn as_user(mut request: TestRequest, auth: &MockAuth) -> TestRequest {
    for (name, value) in auth.header_pairs() {
        request = request.add_header(name, value);
    }
    request
}

// ── Health ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_health_and_readiness() {
    let (server, _db) = test_server().await;
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_attach_a_request_id() {
    let (server, _db) = test_server().await;
    let response = server.get("/films/top").await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = server
        .get("/films/top")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("trace-me"),
        )
        .await;
    assert_eq!(response.headers()["x-request-id"], "trace-me");
}

// ── Films ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_ranked_lists() {
    let (server, _db) = test_server().await;
    let popular: Value = server.get("/films/popular").await.json();
    let ids: Vec<i64> = popular
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![i64::from(DUNE), i64::from(TENET)]);
}

#[tokio::test]
async fn should_show_film_detail_to_guests_without_viewer_fields() {
    let (server, _db) = test_server().await;
    let response = server.get(&format!("/films/{INCEPTION}")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Inception");
    assert_eq!(body["genres"], json!(["sci-fi", "thriller"]));
    assert_eq!(body["directors"][0]["name"], "Christopher Nolan");
    assert_eq!(body["reviews"]["total"], 0);
    assert!(body.get("my_rate").is_none());
    assert!(body.get("my_watchlists").is_none());

    server
        .get("/films/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_show_rating_and_watchlists_to_signed_in_viewers() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");

    let rated: Value = as_user(server.put(&format!("/films/{ALIEN}/rating/9")), &alice)
        .await
        .json();
    assert_eq!(rated["applied"], true);
    assert_eq!(rated["votes"], 11);

    as_user(server.post("/users/@me/flows"), &alice)
        .json(&json!({ "name": "classics", "film_id": ALIEN }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = as_user(server.get(&format!("/films/{ALIEN}")), &alice)
        .await
        .json();
    assert_eq!(body["my_rate"], 9);
    assert_eq!(body["my_watchlists"], json!(["classics"]));

    let mine: Value = as_user(server.get(&format!("/films/{ALIEN}/rating")), &alice)
        .await
        .json();
    assert_eq!(mine["rate"], 9);
}

#[tokio::test]
async fn should_answer_invalid_or_repeated_ratings_without_error() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");

    let response = as_user(server.put(&format!("/films/{DUNE}/rating/11")), &alice).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["applied"], false);
    assert_eq!(body["votes"], 4);

    let body: Value = as_user(server.put(&format!("/films/{DUNE}/rating/6")), &alice)
        .await
        .json();
    assert_eq!(body["applied"], true);
    let body: Value = as_user(server.put(&format!("/films/{DUNE}/rating/2")), &alice)
        .await
        .json();
    assert_eq!(body["applied"], false);
    assert_eq!(body["votes"], 5);
}

#[tokio::test]
async fn should_page_reviews_newest_first() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");
    for body in ["one", "two", "three"] {
        as_user(server.post(&format!("/films/{DUNE}/reviews")), &alice)
            .json(&json!({ "body": body }))
            .await
            .assert_status(StatusCode::CREATED);
    }
    as_user(server.post(&format!("/films/{DUNE}/reviews")), &alice)
        .json(&json!({ "body": "   " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = server.get(&format!("/films/{DUNE}?page=2")).await.json();
    assert_eq!(body["reviews"]["page"], 2);
    assert_eq!(body["reviews"]["page_count"], 2);
    assert_eq!(body["reviews"]["items"][0]["body"], "one");
    assert_eq!(body["reviews"]["items"][0]["user_name"], "alice");
}

// ── Auth boundary ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_member_routes_without_identity() {
    let (server, _db) = test_server().await;
    server
        .put(&format!("/films/{DUNE}/rating/5"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .get("/users/@me/watchlater")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    server
        .post("/users/@me/flows")
        .json(&json!({ "name": "x" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_and_log_in() {
    let (server, _db) = test_server().await;
    let credentials = json!({ "name": "dave", "email": "dave@example.com", "password": "pw" });

    let response = server.post("/users").json(&credentials).await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["name"], "dave");

    server
        .post("/users")
        .json(&credentials)
        .await
        .assert_status(StatusCode::CONFLICT);

    let logged_in: Value = server
        .post("/login")
        .json(&json!({ "name": "dave", "password": "pw" }))
        .await
        .json();
    assert_eq!(logged_in["id"], created["id"]);

    server
        .post("/login")
        .json(&json!({ "name": "dave", "password": "nope" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_follow_and_show_profile() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");
    create_user(&db, "bob").await;

    as_user(server.put("/users/bob/follow"), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_user(server.put("/users/alice/follow"), &alice)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let following: Value = as_user(server.get("/users/bob/follow"), &alice)
        .await
        .json();
    assert_eq!(following["following"], true);

    let profile: Value = server.get("/users/bob/profile").await.json();
    assert_eq!(profile["followers"], json!(["alice"]));
    assert_eq!(profile["is_following"], false);

    server
        .get("/users/nobody/profile")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ── Search ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_search_by_kind() {
    let (server, _db) = test_server().await;

    let films: Value = server.get("/search?query=inception&page=1").await.json();
    assert_eq!(films["type"], "film");
    assert_eq!(films["total"], 1);
    assert_eq!(films["items"][0]["title"], "Inception");

    let directors: Value = server
        .get("/search?query=chris&type=person&role[]=director")
        .await
        .json();
    assert_eq!(directors["type"], "person");
    assert_eq!(directors["total"], 1);
    assert_eq!(directors["items"][0]["name"], "Christopher Nolan");

    let empty: Value = server.get("/search?query=%22%25&type=film").await.json();
    assert_eq!(empty["total"], 0);
    assert_eq!(empty["page_count"], 0);
}

#[tokio::test]
async fn should_filter_by_every_genre() {
    let (server, _db) = test_server().await;
    let page: Value = server
        .get("/genres?gen[]=sci-fi&gen[]=thriller")
        .await
        .json();
    assert_eq!(page["total"], 2);
    assert_eq!(page["items"][0]["id"], TENET);
    assert_eq!(page["items"][1]["id"], INCEPTION);

    let none: Value = server.get("/genres?gen[]=western").await.json();
    assert_eq!(none["total"], 0);
}

// ── Watchlists and film sets ─────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_private_watchlists_from_others() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");
    let bob = MockAuth::new(create_user(&db, "bob").await, "bob");

    as_user(server.post("/users/@me/flows"), &alice)
        .json(&json!({ "name": "secret", "body": "shh" }))
        .await
        .assert_status(StatusCode::CREATED);
    as_user(server.put(&format!("/users/@me/flows/secret/films/{TENET}")), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_user(server.put("/users/@me/flows/secret/private"), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    as_user(server.get("/users/alice/flows/secret"), &bob)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/users/alice/flows/secret")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    let listed: Value = server.get("/users/alice/flows").await.json();
    assert_eq!(listed, json!([]));

    let own: Value = as_user(server.get("/users/@me/flows/secret"), &alice)
        .await
        .json();
    assert_eq!(own["private"], true);
    assert_eq!(own["films"][0]["id"], TENET);

    as_user(server.put("/users/@me/flows/secret/public"), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_user(server.get("/users/alice/flows/secret"), &bob)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn should_manage_watch_later() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");

    as_user(server.put(&format!("/users/@me/watchlater/{DUNE}")), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_user(server.put("/users/@me/watchlater/999"), &alice)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let contains: Value = as_user(server.get(&format!("/users/@me/watchlater/{DUNE}")), &alice)
        .await
        .json();
    assert_eq!(contains["contains"], true);

    let listed: Value = as_user(server.get("/users/@me/watchlater"), &alice)
        .await
        .json();
    assert_eq!(listed[0]["id"], DUNE);

    as_user(server.delete(&format!("/users/@me/watchlater/{DUNE}")), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_user(server.delete(&format!("/users/@me/watchlater/{DUNE}")), &alice)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_manage_favorites() {
    let (server, db) = test_server().await;
    let alice = MockAuth::new(create_user(&db, "alice").await, "alice");
    let bob = MockAuth::new(create_user(&db, "bob").await, "bob");

    for film_id in [ALIEN, INCEPTION] {
        as_user(server.put(&format!("/users/@me/favorites/{film_id}")), &alice)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }
    as_user(server.put(&format!("/users/@me/favorites/{ALIEN}")), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed: Value = as_user(server.get("/users/@me/favorites"), &alice)
        .await
        .json();
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![i64::from(INCEPTION), i64::from(ALIEN)]);

    let contains: Value = as_user(server.get(&format!("/users/@me/favorites/{ALIEN}")), &bob)
        .await
        .json();
    assert_eq!(contains["contains"], false);
    let later: Value = as_user(server.get("/users/@me/watchlater"), &alice)
        .await
        .json();
    assert_eq!(later, json!([]));

    as_user(server.delete(&format!("/users/@me/favorites/{ALIEN}")), &alice)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let contains: Value = as_user(server.get(&format!("/users/@me/favorites/{ALIEN}")), &alice)
        .await
        .json();
    assert_eq!(contains["contains"], false);
    as_user(server.delete(&format!("/users/@me/favorites/{ALIEN}")), &alice)
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/users/@me/favorites")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
