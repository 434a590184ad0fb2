//! Show listing view-model

use crate::db::{self, shows::ShowListing};
use crate::time::format_listing;
use crate::Result;
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListingView {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowListingView {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_listing(show.start_time),
        }
    }
}

/// Every scheduled show, past and upcoming
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListingView>> {
    Ok(db::shows::list_show_listings(pool)
        .await?
        .into_iter()
        .map(ShowListingView::from)
        .collect())
}
