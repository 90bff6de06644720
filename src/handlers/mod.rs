pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route(
            "/venues/create",
            get(venues::create_form).post(venues::create_submit),
        )
        .route("/venues/:id", get(venues::detail).delete(venues::delete))
        .route(
            "/venues/:id/edit",
            get(venues::edit_form).post(venues::edit_submit),
        )
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route(
            "/artists/create",
            get(artists::create_form).post(artists::create_submit),
        )
        .route("/artists/:id", get(artists::detail))
        .route(
            "/artists/:id/edit",
            get(artists::edit_form).post(artists::edit_submit),
        )
        // Shows
        .route("/shows", get(shows::list))
        .route(
            "/shows/create",
            get(shows::create_form).post(shows::create_submit),
        )
        .fallback(home::not_found)
}
