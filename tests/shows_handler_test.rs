//! Integration tests for show routes
//!
//! Shows are append-only: a listing of strictly-future shows plus an
//! unconditional create whose only referential check is the foreign keys.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use tower::util::ServiceExt;

use gigboard::db::entities::show;
use gigboard::handlers;
use gigboard::state::AppState;
use gigboard::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    handlers::routes().with_state(state.clone())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_shows_listing_joins_artist_and_venue() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;
    create_test_show(
        &state.db,
        band.id,
        hop.id,
        Utc::now().naive_utc() + Duration::days(5),
    )
    .await;

    let app = create_test_router(&state);
    let response = app.oneshot(get("/shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_shows_listing_excludes_past_and_boundary_shows() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;

    let now = Utc::now().naive_utc();
    // Neither a past show nor one starting exactly now is upcoming
    create_test_show(&state.db, band.id, hop.id, now - Duration::days(1)).await;
    create_test_show(&state.db, band.id, hop.id, now).await;

    let app = create_test_router(&state);
    let response = app.oneshot(get("/shows")).await.unwrap();

    let body = body_string(response).await;
    assert!(body.contains("No upcoming shows."));
}

#[tokio::test]
async fn test_create_show_via_form() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2030-06-15T20%3A00",
                band.id, hop.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Show was successfully listed!"));

    let count = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_create_show_with_dangling_ids_reports_generic_failure() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/shows/create",
            "artist_id=42&venue_id=99&start_time=2030-06-15T20%3A00",
        ))
        .await
        .unwrap();

    // The foreign-key violation collapses to the one generic message
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("An error occurred. Show could not be listed."));

    let count = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0, "nothing may be committed on a failed write");
}

#[tokio::test]
async fn test_create_show_with_bad_fields_rerenders_form() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/shows/create",
            "artist_id=abc&venue_id=&start_time=not-a-date",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Artist ID must be a number."));
    assert!(body.contains("Venue ID must be a number."));
    assert!(body.contains("Start time must be a valid date and time."));

    let count = show::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0);
}
