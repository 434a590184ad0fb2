//! Show store operations
//!
//! Shows are insert-only. Reads resolve counterpart names and images with a
//! single join per request instead of one lookup per show.

use super::{begin, finish, NewShow, Show};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::info;

/// A show at a venue, with the performing artist resolved
#[derive(Debug, Clone, PartialEq)]
pub struct VenueBooking {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show by an artist, with the hosting venue resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistBooking {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show with both sides resolved, for the show listing
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

pub async fn get_show(pool: &SqlitePool, id: i64) -> Result<Option<Show>> {
    let row = sqlx::query("SELECT id, artist_id, venue_id, start_time FROM shows WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(Show {
            id: row.try_get("id")?,
            artist_id: row.try_get("artist_id")?,
            venue_id: row.try_get("venue_id")?,
            start_time: row.try_get("start_time")?,
        })),
        None => Ok(None),
    }
}

pub async fn count_shows(pool: &SqlitePool) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(pool)
        .await?)
}

/// Every show with venue and artist resolved, in identity order
pub async fn list_show_listings(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id,
               a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<ShowListing> {
            Ok(ShowListing {
                id: row.try_get("id")?,
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}

/// Shows hosted by one venue, in identity order
pub async fn venue_bookings(pool: &SqlitePool, venue_id: i64) -> Result<Vec<VenueBooking>> {
    let rows = sqlx::query(
        r#"
        SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<VenueBooking> {
            Ok(VenueBooking {
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}

/// Shows performed by one artist, in identity order
pub async fn artist_bookings(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ArtistBooking>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<ArtistBooking> {
            Ok(ArtistBooking {
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                venue_image_link: row.try_get("venue_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}

/// `(venue_id, start_time)` for every show
pub async fn venue_start_times(pool: &SqlitePool) -> Result<Vec<(i64, NaiveDateTime)>> {
    Ok(sqlx::query_as("SELECT venue_id, start_time FROM shows")
        .fetch_all(pool)
        .await?)
}

/// `(artist_id, start_time)` for every show
pub async fn artist_start_times(pool: &SqlitePool) -> Result<Vec<(i64, NaiveDateTime)>> {
    Ok(sqlx::query_as("SELECT artist_id, start_time FROM shows")
        .fetch_all(pool)
        .await?)
}

/// Schedule a show.
///
/// Both ends must exist. There is no double-booking check: the same pair
/// may be scheduled any number of times, even at identical instants.
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let mut tx = begin(pool).await?;
    let outcome = insert_show(&mut tx, show).await;
    let id = finish(tx, outcome).await?;

    info!(
        "Created show {} (artist {} at venue {}, {})",
        id, show.artist_id, show.venue_id, show.start_time
    );
    Ok(id)
}

async fn insert_show(conn: &mut SqliteConnection, show: &NewShow) -> Result<i64> {
    let artist_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(show.artist_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(Error::from_write)?;
    if !artist_exists {
        return Err(Error::ForeignKeyViolation(format!(
            "artist {} does not exist",
            show.artist_id
        )));
    }

    let venue_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(show.venue_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(Error::from_write)?;
    if !venue_exists {
        return Err(Error::ForeignKeyViolation(format!(
            "venue {} does not exist",
            show.venue_id
        )));
    }

    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(show.artist_id)
        .bind(show.venue_id)
        .bind(show.start_time)
        .execute(&mut *conn)
        .await
        .map_err(Error::from_write)?;

    Ok(result.last_insert_rowid())
}
