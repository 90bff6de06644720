//! Integration tests for venue routes
//!
//! Covers the grouped listing, name search, detail partitioning, the create
//! and edit forms, and the delete restrict policy.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use tower::util::ServiceExt;

use gigboard::db::entities::{city, venue};
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
async fn test_venues_page_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/venues")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("No venues listed yet."));
}

#[tokio::test]
async fn test_venues_grouped_by_city_with_upcoming_counts() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let denver = create_test_city(&state.db, "Denver", "CO").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    create_test_venue(&state.db, denver.id, "Red Rocks").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;

    let now = Utc::now().naive_utc();
    create_test_show(&state.db, band.id, hop.id, now + Duration::days(3)).await;
    create_test_show(&state.db, band.id, hop.id, now + Duration::days(10)).await;
    create_test_show(&state.db, band.id, hop.id, now - Duration::days(3)).await;

    let app = create_test_router(&state);
    let response = app.oneshot(get("/venues")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Austin, TX"));
    assert!(body.contains("Denver, CO"));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Red Rocks"));
    // Only the two future shows count
    assert!(body.contains("2 upcoming shows"));
    assert!(body.contains("0 upcoming shows"));
}

#[tokio::test]
async fn test_create_venue_via_form() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/venues/create",
            "name=The+Musical+Hop&address=1015+Folsom+Street&city=San+Francisco&state=CA\
             &phone=123-123-1234&genres=Jazz&genres=Blues&seeking_talent=y\
             &seeking_description=Looking+for+local+acts",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Venue The Musical Hop was successfully listed!"));

    let stored = venue::Entity::find()
        .filter(venue::Column::Name.eq("The Musical Hop"))
        .one(&state.db)
        .await
        .unwrap()
        .expect("venue should be persisted");
    assert_eq!(stored.address, "1015 Folsom Street");
    assert_eq!(stored.genres.as_deref(), Some("Jazz,Blues"));
    assert!(stored.seeking_talent);
}

#[tokio::test]
async fn test_city_get_or_create_is_idempotent_across_submissions() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    app.clone()
        .oneshot(form_post(
            "/venues/create",
            "name=Venue+A&address=1+First+St&city=Austin&state=TX",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_post(
            "/venues/create",
            "name=Venue+B&address=2+Second+St&city=Austin&state=TX",
        ))
        .await
        .unwrap();

    // One city row with two venues attached
    let cities = city::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(cities.len(), 1);
    let venue_count = venue::Entity::find()
        .filter(venue::Column::Cityid.eq(cities[0].id))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(venue_count, 2);
}

#[tokio::test]
async fn test_city_match_is_case_sensitive() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    app.clone()
        .oneshot(form_post(
            "/venues/create",
            "name=Venue+A&address=1+First+St&city=Austin&state=TX",
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(form_post(
            "/venues/create",
            "name=Venue+B&address=2+Second+St&city=austin&state=TX",
        ))
        .await
        .unwrap();

    let cities = city::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(cities.len(), 2, "differently-cased names are distinct cities");
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    create_test_venue(&state.db, austin.id, "The Musical Hop").await;

    let app = create_test_router(&state);
    for term in ["hop", "HOP", "Hop"] {
        let response = app
            .clone()
            .oneshot(form_post(
                "/venues/search",
                &format!("search_term={term}"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("The Musical Hop"), "term {term} should match");
        assert!(body.contains("Found 1 results"));
    }
}

#[tokio::test]
async fn test_search_empty_term_matches_every_row() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    create_test_venue(&state.db, austin.id, "Park Square Live").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post("/venues/search", "search_term="))
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Found 2 results"));
}

#[tokio::test]
async fn test_venue_detail_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get("/venues/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_venue_detail_genres_and_show_partition() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;

    let now = Utc::now().naive_utc();
    // A show starting exactly now is past: only strictly-future is upcoming
    create_test_show(&state.db, band.id, hop.id, now).await;
    create_test_show(&state.db, band.id, hop.id, now + Duration::days(2)).await;

    let app = create_test_router(&state);
    let response = app.oneshot(get(&format!("/venues/{}", hop.id))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("1 Upcoming Shows"));
    assert!(body.contains("1 Past Shows"));
    assert!(body.contains("Austin, TX"));
    assert!(body.contains("The Wild Sax Band"));

    // Genre string splits back into the ordered list
    let jazz = body.find(">Jazz<").expect("Jazz badge");
    let blues = body.find(">Blues<").expect("Blues badge");
    assert!(jazz < blues, "genres render in stored order");
}

#[tokio::test]
async fn test_create_venue_validation_short_circuits() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post("/venues/create", "city=Austin&state=TX"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("This field is required."));

    let count = venue::Entity::find().count(&state.db).await.unwrap();
    assert_eq!(count, 0, "validation failure must not persist anything");
}

#[tokio::test]
async fn test_edit_form_is_prepopulated() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(get(&format!("/venues/{}/edit", hop.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("value=\"123 Main St\""));
    // City and state come through the FK relationship
    assert!(body.contains("value=\"Austin\""));
    assert!(body.contains("value=\"TX\" selected"));
}

#[tokio::test]
async fn test_edit_submit_updates_and_redirects() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_post(
            &format!("/venues/{}/edit", hop.id),
            "name=The+Dueling+Pianos+Bar&address=335+Delancey+Street&city=New+York&state=NY",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, format!("/venues/{}", hop.id));
    assert!(response.headers().contains_key("set-cookie"));

    let updated = venue::Entity::find_by_id(hop.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "The Dueling Pianos Bar");

    // The edit created the new city on the fly
    let ny = city::Entity::find()
        .filter(city::Column::City.eq("New York"))
        .one(&state.db)
        .await
        .unwrap();
    assert!(ny.is_some());
    assert_eq!(updated.cityid, ny.unwrap().id);
}

#[tokio::test]
async fn test_edit_submit_unknown_venue_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/venues/999/edit",
            "name=Ghost&address=1+Nowhere&city=Austin&state=TX",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_venue_returns_400() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_venue_with_shows_is_restricted() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;
    let band = create_test_artist(&state.db, austin.id, "The Wild Sax Band").await;
    create_test_show(&state.db, band.id, hop.id, Utc::now().naive_utc()).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", hop.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was deleted
    let still_there = venue::Entity::find_by_id(hop.id)
        .one(&state.db)
        .await
        .unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_delete_storage_failure_returns_400() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;

    // Break the dependents lookup so the failure happens mid unit of work,
    // after the venue itself was found.
    state
        .db
        .execute_unprepared("DROP TABLE \"show\"")
        .await
        .unwrap();

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", hop.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let still_there = venue::Entity::find_by_id(hop.id)
        .one(&state.db)
        .await
        .unwrap();
    assert!(still_there.is_some());
}

#[tokio::test]
async fn test_delete_venue_without_shows_succeeds() {
    let state = setup_test_app_state().await;
    let austin = create_test_city(&state.db, "Austin", "TX").await;
    let hop = create_test_venue(&state.db, austin.id, "The Musical Hop").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", hop.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let gone = venue::Entity::find_by_id(hop.id)
        .one(&state.db)
        .await
        .unwrap();
    assert!(gone.is_none());
}
