//! Integration tests for fyyur-web routes
//!
//! Every test drives the full router against a fresh in-memory store.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use fyyur_common::db::{self, init_memory_database};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method
use fyyur_web::{build_router, AppState};

const HOP_FORM: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
&address=1015+Folsom+Street&phone=123-123-1234&genres=Jazz&genres=Reggae\
&website_link=https%3A%2F%2Fwww.themusicalhop.com&seeking_talent=y\
&seeking_description=Looking+for+local+artists";

const PETALS_FORM: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
&phone=326-123-5000&genres=Rock+n+Roll&seeking_venue=y\
&image_link=https%3A%2F%2Fimages.example.com%2Fgnp.jpg";

/// Test helper: fresh store plus router
async fn setup() -> (SqlitePool, Router) {
    let pool = init_memory_database()
        .await
        .expect("Should create in-memory database");
    let app = build_router(AppState::new(pool.clone()));
    (pool, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn extract_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn extract_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Lists the Musical Hop (venue 1) and Guns N Petals (artist 1)
async fn seed(app: &Router) {
    let response = send(app, post_form("/venues/create", HOP_FORM)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(app, post_form("/artists/create", PETALS_FORM)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Health, home and error pages
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_pool, app) = setup().await;

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur-web");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_home_page() {
    let (_pool, app) = setup().await;

    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response).await.contains("<h1>Fyyur</h1>"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let (_pool, app) = setup().await;

    let response = send(&app, get("/nowhere")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(extract_text(response).await.contains("<h1>404</h1>"));
}

#[tokio::test]
async fn test_non_integer_and_missing_ids_are_not_found() {
    let (_pool, app) = setup().await;

    for uri in ["/venues/abc", "/venues/999", "/artists/abc", "/artists/999", "/venues/999/edit"] {
        let response = send(&app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venue_create_list_search_detail() {
    let (_pool, app) = setup().await;

    let response = send(&app, post_form("/venues/create", HOP_FORM)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response)
        .await
        .contains("Venue The Musical Hop was successfully listed!"));

    let html = extract_text(send(&app, get("/venues")).await).await;
    assert!(html.contains("<h2>San Francisco, CA</h2>"));
    assert!(html.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));

    let html = extract_text(send(&app, post_form("/venues/search", "search_term=hop")).await).await;
    assert!(html.contains("Number of search results for &quot;hop&quot;: 1"));

    let html = extract_text(send(&app, post_form("/venues/search", "search_term=zzz")).await).await;
    assert!(html.contains("Number of search results for &quot;zzz&quot;: 0"));

    let response = send(&app, get("/venues/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = extract_text(response).await;
    assert!(html.contains("<h1>The Musical Hop</h1>"));
    assert!(html.contains("0 Upcoming Show(s)"));
    assert!(html.contains("Looking for local artists"));
}

#[tokio::test]
async fn test_venue_create_validation_failure() {
    let (pool, app) = setup().await;

    let response = send(
        &app,
        post_form("/venues/create", "city=Nowhere&state=ZZ&address=1+Main&genres=Jazz"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = extract_text(response).await;
    assert!(html.contains("Errors name This field is required., state Not a valid choice."));
    // Submitted values survive the round trip
    assert!(html.contains(r#"value="Nowhere""#));

    assert!(db::venues::list_venues(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_venue_edit() {
    let (pool, app) = setup().await;
    seed(&app).await;

    let html = extract_text(send(&app, get("/venues/1/edit")).await).await;
    assert!(html.contains(r#"value="The Musical Hop""#));
    assert!(html.contains(r#"action="/venues/1/edit""#));

    // Checkbox left out: seeking_talent must follow the submission
    let edited = "name=The+Musical+Hop+Annex&city=Oakland&state=CA\
&address=1+Broadway&genres=Jazz";
    let response = send(&app, post_form("/venues/1/edit", edited)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response)
        .await
        .contains("Venue The Musical Hop Annex was successfully updated!"));

    let venue = db::venues::require_venue(&pool, 1).await.unwrap();
    assert_eq!(venue.name, "The Musical Hop Annex");
    assert_eq!(venue.city, "Oakland");
    assert!(!venue.seeking_talent);

    let response = send(&app, post_form("/venues/42/edit", edited)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_venue_delete_cascades_shows() {
    let (pool, app) = setup().await;
    seed(&app).await;

    let response = send(
        &app,
        post_form("/shows/create", "artist_id=1&venue_id=1&start_time=2099-05-21+21%3A30%3A00"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(db::shows::count_shows(&pool).await.unwrap(), 1);

    let response = send(&app, delete("/venues/1")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Venue The Musical Hop was successfully deleted.");
    assert_eq!(body["redirect"], "/venues");

    assert_eq!(db::shows::count_shows(&pool).await.unwrap(), 0);
    let response = send(&app, get("/venues/1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Artist side is untouched
    let html = extract_text(send(&app, get("/artists/1")).await).await;
    assert!(html.contains("0 Upcoming Show(s)"));
}

#[tokio::test]
async fn test_delete_missing_venue() {
    let (_pool, app) = setup().await;

    let response = send(&app, delete("/venues/7")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "An error occurred. Venue 7 could not be deleted.");
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artist_create_list_search() {
    let (_pool, app) = setup().await;

    let response = send(&app, post_form("/artists/create", PETALS_FORM)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response)
        .await
        .contains("Artist Guns N Petals was successfully listed!"));

    let html = extract_text(send(&app, get("/artists")).await).await;
    assert!(html.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));

    let html = extract_text(send(&app, post_form("/artists/search", "search_term=PETAL")).await).await;
    assert!(html.contains("Number of search results for &quot;PETAL&quot;: 1"));
}

#[tokio::test]
async fn test_artist_edit_clears_seeking_flag() {
    let (pool, app) = setup().await;
    seed(&app).await;
    assert!(db::artists::require_artist(&pool, 1).await.unwrap().seeking_venue);

    let edited = "name=Guns+N+Petals&city=San+Francisco&state=CA&genres=Rock+n+Roll";
    let response = send(&app, post_form("/artists/1/edit", edited)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response)
        .await
        .contains("Artist Guns N Petals was successfully updated!"));

    assert!(!db::artists::require_artist(&pool, 1).await.unwrap().seeking_venue);
}

#[tokio::test]
async fn test_artist_delete() {
    let (pool, app) = setup().await;
    seed(&app).await;

    let body = extract_json(send(&app, delete("/artists/1")).await).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Artist Guns N Petals was successfully deleted.");
    assert_eq!(body["redirect"], "/artists");
    assert!(db::artists::get_artist(&pool, 1).await.unwrap().is_none());
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_show_create_partitions_and_listing() {
    let (_pool, app) = setup().await;
    seed(&app).await;

    for start in ["2099-05-21+21%3A30%3A00", "2001-01-01T20%3A00"] {
        let body = format!("artist_id=1&venue_id=1&start_time={}", start);
        let response = send(&app, post_form("/shows/create", &body)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(extract_text(response).await.contains("Show was successfully listed!"));
    }

    let html = extract_text(send(&app, get("/venues/1")).await).await;
    assert!(html.contains("1 Upcoming Show(s)"));
    assert!(html.contains("1 Past Show(s)"));
    assert!(html.contains("05/21/2099, 21:30"));

    let html = extract_text(send(&app, get("/artists/1")).await).await;
    assert!(html.contains("1 Upcoming Show(s)"));
    assert!(html.contains("1 Past Show(s)"));

    let html = extract_text(send(&app, get("/shows")).await).await;
    assert!(html.contains("2099-05-21 21:30:00"));
    assert!(html.contains("2001-01-01 20:00:00"));
    assert!(html.contains("playing at <a href=\"/venues/1\">The Musical Hop</a>"));

    let html = extract_text(send(&app, get("/venues")).await).await;
    assert!(html.contains("1 upcoming show(s)"));
}

#[tokio::test]
async fn test_show_with_unknown_artist_is_rejected() {
    let (pool, app) = setup().await;
    seed(&app).await;

    let response = send(
        &app,
        post_form("/shows/create", "artist_id=99&venue_id=1&start_time=2099-01-01+20%3A00"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(extract_text(response)
        .await
        .contains("An error occurred. Show could not be listed."));
    assert_eq!(db::shows::count_shows(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_with_malformed_input_is_rejected() {
    let (pool, app) = setup().await;
    seed(&app).await;

    for body in [
        "artist_id=one&venue_id=1&start_time=2099-01-01+20%3A00",
        "artist_id=1&venue_id=1&start_time=tomorrow",
    ] {
        let response = send(&app, post_form("/shows/create", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
    }
    assert_eq!(db::shows::count_shows(&pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_show_form_prefills_start_time() {
    let (_pool, app) = setup().await;

    let response = send(&app, get("/shows/create")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(extract_text(response).await.contains(r#"name="start_time" value=""#));
}
