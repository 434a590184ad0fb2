//! Landing page and 404 fallback

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::{pages, AppState};

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET /
pub async fn index() -> Html<String> {
    Html(pages::home::home(None))
}

/// Any unmatched route
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(pages::errors::not_found()))
}
