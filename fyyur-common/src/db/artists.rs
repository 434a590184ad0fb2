//! Artist store operations

use super::{begin, finish, name_matches, Artist, ArtistFields, Deleted};
use crate::{Error, Result};
use sqlx::types::Json;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

const SELECT_ARTIST: &str = r#"
    SELECT id, name, city, state, phone, genres, website_link,
           facebook_link, image_link, seeking_venue, seeking_description
    FROM artists
"#;

/// All artists in identity order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("{SELECT_ARTIST} ORDER BY id"))
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| Artist::from_row(row).map_err(Error::from))
        .collect()
}

pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("{SELECT_ARTIST} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(Artist::from_row).transpose()?)
}

pub async fn require_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    get_artist(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))
}

/// Artists whose name contains `term`, ignoring case. An empty term matches all.
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<Vec<Artist>> {
    let all = list_artists(pool).await?;
    Ok(all
        .into_iter()
        .filter(|artist| name_matches(&artist.name, term))
        .collect())
}

pub async fn create_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<i64> {
    let mut tx = begin(pool).await?;
    let outcome = insert_artist(&mut tx, fields).await;
    let id = finish(tx, outcome).await?;

    info!("Created artist {} ({})", id, fields.name);
    Ok(id)
}

pub async fn update_artist(pool: &SqlitePool, id: i64, fields: &ArtistFields) -> Result<()> {
    let mut tx = begin(pool).await?;
    let outcome = overwrite_artist(&mut tx, id, fields).await;
    finish(tx, outcome).await?;

    info!("Updated artist {} ({})", id, fields.name);
    Ok(())
}

/// Delete an artist together with its shows
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<Deleted> {
    let mut tx = begin(pool).await?;
    let outcome = remove_artist(&mut tx, id).await;
    let deleted = finish(tx, outcome).await?;

    info!(
        "Deleted artist {} ({}), removed {} show(s)",
        id, deleted.name, deleted.shows_removed
    );
    Ok(deleted)
}

async fn insert_artist(conn: &mut SqliteConnection, fields: &ArtistFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, website_link,
            facebook_link, image_link, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(Json(&fields.genres))
    .bind(&fields.website_link)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await
    .map_err(Error::from_write)?;

    Ok(result.last_insert_rowid())
}

async fn overwrite_artist(conn: &mut SqliteConnection, id: i64, fields: &ArtistFields) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            website_link = ?, facebook_link = ?, image_link = ?,
            seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(Json(&fields.genres))
    .bind(&fields.website_link)
    .bind(&fields.facebook_link)
    .bind(&fields.image_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(Error::from_write)?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }
    Ok(())
}

async fn remove_artist(conn: &mut SqliteConnection, id: i64) -> Result<Deleted> {
    let name: Option<String> = sqlx::query_scalar("SELECT name FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(Error::from_write)?;
    let name = name.ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;

    let shows = sqlx::query("DELETE FROM shows WHERE artist_id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(Error::from_write)?;

    sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(Error::from_write)?;

    Ok(Deleted {
        name,
        shows_removed: shows.rows_affected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::fixtures::{artist_named, guns_n_petals};
    use crate::db::init_memory_database;

    #[tokio::test]
    async fn test_create_then_fetch_round_trip() {
        let pool = init_memory_database().await.unwrap();
        let fields = guns_n_petals();

        let id = create_artist(&pool, &fields).await.unwrap();
        let loaded = require_artist(&pool, id).await.unwrap();
        assert_eq!(loaded.fields(), fields);
    }

    #[tokio::test]
    async fn test_update_mirrors_submitted_seeking_flag() {
        let pool = init_memory_database().await.unwrap();
        let id = create_artist(&pool, &guns_n_petals()).await.unwrap();

        let mut edited = guns_n_petals();
        edited.seeking_venue = false;
        update_artist(&pool, id, &edited).await.unwrap();
        assert!(!require_artist(&pool, id).await.unwrap().seeking_venue);

        edited.seeking_venue = true;
        update_artist(&pool, id, &edited).await.unwrap();
        assert!(require_artist(&pool, id).await.unwrap().seeking_venue);
    }

    #[tokio::test]
    async fn test_list_in_identity_order() {
        let pool = init_memory_database().await.unwrap();
        for name in ["Matt Quevedo", "The Wild Sax Band", "Guns N Petals"] {
            create_artist(&pool, &artist_named(name)).await.unwrap();
        }

        let names: Vec<String> = list_artists(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Matt Quevedo", "The Wild Sax Band", "Guns N Petals"]);
    }

    #[tokio::test]
    async fn test_missing_artist() {
        let pool = init_memory_database().await.unwrap();
        assert!(get_artist(&pool, 1).await.unwrap().is_none());
        assert!(require_artist(&pool, 1).await.unwrap_err().is_not_found());
        assert!(update_artist(&pool, 1, &guns_n_petals()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let pool = init_memory_database().await.unwrap();
        for name in ["Björk Guðmundsdóttir", "Guns N Petals"] {
            create_artist(&pool, &artist_named(name)).await.unwrap();
        }

        for term in ["BJÖRK", "guðmunds", "DÓTTIR"] {
            let found = search_artists(&pool, term).await.unwrap();
            assert_eq!(found.len(), 1, "term {:?}", term);
            assert_eq!(found[0].name, "Björk Guðmundsdóttir");
        }
        assert_eq!(search_artists(&pool, "").await.unwrap().len(), 2);
        assert!(search_artists(&pool, "%").await.unwrap().is_empty());
    }
}
