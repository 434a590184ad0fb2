//! Venue view-models

use super::{upcoming_counts, SearchResults};
use crate::db::{self, shows::VenueBooking, Venue};
use crate::time::{format_detail, partition_by_start};
use crate::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;

/// One venue inside a location group or search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one `(city, state)` pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A show on a venue page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueShowView {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<VenueBooking> for VenueShowView {
    fn from(booking: VenueBooking) -> Self {
        Self {
            artist_id: booking.artist_id,
            artist_name: booking.artist_name,
            artist_image_link: booking.artist_image_link,
            start_time: format_detail(booking.start_time),
        }
    }
}

/// Venue page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetailView {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowView>,
    pub upcoming_shows: Vec<VenueShowView>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetailView {
    fn build(venue: Venue, bookings: Vec<VenueBooking>, now: NaiveDateTime) -> Self {
        let (past, upcoming) = partition_by_start(bookings, now, |b| b.start_time);
        let past_shows: Vec<VenueShowView> = past.into_iter().map(VenueShowView::from).collect();
        let upcoming_shows: Vec<VenueShowView> =
            upcoming.into_iter().map(VenueShowView::from).collect();

        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website_link: venue.website_link,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Group venues by `(city, state)`.
///
/// Groups appear in order of their first venue; venues keep their input
/// order within a group. Venues missing from `counts` have no upcoming shows.
pub fn group_by_area(venues: Vec<Venue>, counts: &HashMap<i64, usize>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for venue in venues {
        let summary = VenueSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
        };

        let key = (venue.city, venue.state);
        let existing = index.get(&key).copied();
        match existing {
            Some(pos) => areas[pos].venues.push(summary),
            None => {
                index.insert(key.clone(), areas.len());
                areas.push(VenueArea {
                    city: key.0,
                    state: key.1,
                    venues: vec![summary],
                });
            }
        }
    }

    areas
}

/// All venues grouped by location
pub async fn list_venue_areas(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueArea>> {
    let venues = db::venues::list_venues(pool).await?;
    let starts = db::shows::venue_start_times(pool).await?;
    Ok(group_by_area(venues, &upcoming_counts(&starts, now)))
}

/// Case-insensitive name search
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults<VenueSummary>> {
    let venues = db::venues::search_venues(pool, term).await?;
    let counts = upcoming_counts(&db::shows::venue_start_times(pool).await?, now);

    let data = venues
        .into_iter()
        .map(|venue| VenueSummary {
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            id: venue.id,
            name: venue.name,
        })
        .collect();

    Ok(SearchResults::new(data))
}

/// Venue page; `NotFound` if the id is unknown
pub async fn venue_detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<VenueDetailView> {
    let venue = db::venues::require_venue(pool, id).await?;
    let bookings = db::shows::venue_bookings(pool, id).await?;
    Ok(VenueDetailView::build(venue, bookings, now))
}
