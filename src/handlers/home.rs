use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::flash;
use crate::templates::home_page;

/// Landing page
pub async fn index(jar: CookieJar) -> impl IntoResponse {
    let (jar, flash) = flash::take(jar);
    (jar, Html(home_page(flash.as_ref()).into_string()))
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("no such page".to_string())
}
