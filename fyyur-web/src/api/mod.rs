//! HTTP handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use home::{home_routes, not_found};
pub use shows::show_routes;
pub use venues::venue_routes;

use serde::Serialize;

/// Body of `DELETE /venues/:id` and `DELETE /artists/:id`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
    /// Where the page should navigate afterwards
    pub redirect: String,
}
