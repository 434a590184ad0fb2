//! Venue store operations

use super::{begin, finish, name_matches, Deleted, Venue, VenueFields};
use crate::{Error, Result};
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

const SELECT_VENUE: &str = r#"
    SELECT id, name, city, state, address, phone, genres, website_link,
           facebook_link, image_link, seeking_talent, seeking_description
    FROM venues
"#;

/// All venues in identity order
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("{SELECT_VENUE} ORDER BY id"))
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| Venue::from_row(row).map_err(Error::from))
        .collect()
}

pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("{SELECT_VENUE} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Venue::from_row).transpose()?)
}

/// Like [`get_venue`] but absence is an error
pub async fn require_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    get_venue(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", id)))
}

/// Venues whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<Vec<Venue>> {
    let all = list_venues(pool).await?;
    Ok(all
        .into_iter()
        .filter(|venue| name_matches(&venue.name, term))
        .collect())
}

/// Insert a venue; returns the identity assigned by the store
pub async fn create_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<i64> {
    let mut tx = begin(pool).await?;
    let outcome = insert_venue(&mut tx, fields).await;
    let id = finish(tx, outcome).await?;

    info!("Created venue {} ({})", id, fields.name);
    Ok(id)
}

/// Overwrite every editable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, id: i64, fields: &VenueFields) -> Result<()> {
    let mut tx = begin(pool).await?;
    let outcome = overwrite_venue(&mut tx, id, fields).await;
    finish(tx, outcome).await?;

    info!("Updated venue {} ({})", id, fields.name);
    Ok(())
}

/// Delete a venue together with its shows
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<Deleted> {
    let mut tx = begin(pool).await?;
    let outcome = remove_venue(&mut tx, id).await;
    let deleted = finish(tx, outcome).await?;

    info!(
        "Deleted venue {} ({}), removed {} show(s)",
        id, deleted.name, deleted.shows_removed
    );
    Ok(deleted)
}

async fn insert_venue(conn: &mut SqliteConnection, fields: &VenueFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres, website_link,
            facebook_link, image_link, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(Json(&fields.genres))
    .bind(&fields.website_link)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await
    .map_err(Error::from_write)?;

    Ok(result.last_insert_rowid())
}

async fn overwrite_venue(conn: &mut SqliteConnection, id: i64, fields: &VenueFields) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            website_link = ?, facebook_link = ?, image_link = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(Json(&fields.genres))
    .bind(&fields.website_link)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::from_write)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }
    Ok(())
}

async fn remove_venue(conn: &mut SqliteConnection, id: i64) -> Result<Deleted> {
    let name: Option<String> = sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(Error::from_write)?;
    let name = name.ok_or_else(|| Error::NotFound(format!("venue {}", id)))?;

    let shows = sqlx::query("DELETE FROM shows WHERE venue_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(Error::from_write)?;

    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(Error::from_write)?;

    Ok(Deleted {
        name,
        shows_removed: shows.rows_affected(),
    })
}
