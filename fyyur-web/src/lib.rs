//! fyyur-web library - Fyyur booking site
//!
//! Routes map to view-model derivations in `fyyur_common::catalog` and
//! store mutations in `fyyur_common::db`, rendered by [`pages`].

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod forms;
pub mod pages;

pub use crate::error::{WebError, WebResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Store handle; the only shared state between requests
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::home_routes())
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
