//! Artist view-models

use super::{upcoming_counts, SearchResults};
use crate::db::{self, shows::ArtistBooking, Artist};
use crate::time::{format_detail, partition_by_start};
use crate::Result;
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqlitePool;

/// Bare artist listing entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

/// Artist search entry; unlike the bare listing it carries the upcoming count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistSearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// A show on an artist page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistShowView {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ArtistBooking> for ArtistShowView {
    fn from(booking: ArtistBooking) -> Self {
        Self {
            venue_id: booking.venue_id,
            venue_name: booking.venue_name,
            venue_image_link: booking.venue_image_link,
            start_time: format_detail(booking.start_time),
        }
    }
}

/// Artist page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetailView {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowView>,
    pub upcoming_shows: Vec<ArtistShowView>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetailView {
    fn build(artist: Artist, bookings: Vec<ArtistBooking>, now: NaiveDateTime) -> Self {
        let (past, upcoming) = partition_by_start(bookings, now, |b| b.start_time);
        let past_shows: Vec<ArtistShowView> = past.into_iter().map(ArtistShowView::from).collect();
        let upcoming_shows: Vec<ArtistShowView> =
            upcoming.into_iter().map(ArtistShowView::from).collect();

        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website_link: artist.website_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistSummary>> {
    Ok(db::artists::list_artists(pool)
        .await?
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.name,
        })
        .collect())
}

pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults<ArtistSearchHit>> {
    let artists = db::artists::search_artists(pool, term).await?;
    let counts = upcoming_counts(&db::shows::artist_start_times(pool).await?, now);

    let data = artists
        .into_iter()
        .map(|artist| ArtistSearchHit {
            num_upcoming_shows: counts.get(&artist.id).copied().unwrap_or(0),
            id: artist.id,
            name: artist.name,
        })
        .collect();

    Ok(SearchResults::new(data))
}

/// Artist page; `NotFound` if the id is unknown
pub async fn artist_detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<ArtistDetailView> {
    let artist = db::artists::require_artist(pool, id).await?;
    let bookings = db::shows::artist_bookings(pool, id).await?;
    Ok(ArtistDetailView::build(artist, bookings, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::create_artist;
    use crate::db::fixtures::{artist_named, guns_n_petals, musical_hop, venue_in};
    use crate::db::shows::create_show;
    use crate::db::venues::create_venue;
    use crate::db::{init_memory_database, NewShow};
    use chrono::{Duration, NaiveDate};

    fn reference_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_listing_and_search() {
        let pool = init_memory_database().await.unwrap();
        let now = reference_now();
        let gnp = create_artist(&pool, &guns_n_petals()).await.unwrap();
        create_artist(&pool, &artist_named("Matt Quevedo")).await.unwrap();
        create_artist(&pool, &artist_named("The Wild Sax Band")).await.unwrap();
        let venue_id = create_venue(&pool, &musical_hop()).await.unwrap();
        create_show(
            &pool,
            &NewShow {
                artist_id: gnp,
                venue_id,
                start_time: now + Duration::days(2),
            },
        )
        .await
        .unwrap();

        let listing = list_artists(&pool).await.unwrap();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0], ArtistSummary { id: gnp, name: "Guns N Petals".to_string() });

        let band = search_artists(&pool, "band", now).await.unwrap();
        assert_eq!(band.count, 1);
        assert_eq!(band.data[0].name, "The Wild Sax Band");

        let a = search_artists(&pool, "A", now).await.unwrap();
        assert_eq!(a.count, 3);
        let gnp_hit = a.data.iter().find(|hit| hit.id == gnp).unwrap();
        assert_eq!(gnp_hit.num_upcoming_shows, 1);

        let all = search_artists(&pool, "", now).await.unwrap();
        assert_eq!(all.count, 3);

        let none = search_artists(&pool, "xyz", now).await.unwrap();
        assert_eq!(none.count, 0);
        assert!(none.data.is_empty());
    }

    #[tokio::test]
    async fn test_detail_partitions_and_resolves_venues() {
        let pool = init_memory_database().await.unwrap();
        let now = reference_now();
        let artist_id = create_artist(&pool, &guns_n_petals()).await.unwrap();
        let hop = create_venue(&pool, &musical_hop()).await.unwrap();
        let park = create_venue(&pool, &venue_in("Park Square Live Music & Coffee", "San Francisco", "CA"))
            .await
            .unwrap();

        for (venue_id, start_time) in [
            (hop, now - Duration::days(10)),
            (park, now + Duration::hours(1)),
            (hop, now),
        ] {
            create_show(
                &pool,
                &NewShow {
                    artist_id,
                    venue_id,
                    start_time,
                },
            )
            .await
            .unwrap();
        }

        let detail = artist_detail(&pool, artist_id, now).await.unwrap();
        assert_eq!(detail.name, "Guns N Petals");
        assert_eq!(detail.past_shows_count, 2);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].venue_id, park);
        assert_eq!(detail.upcoming_shows[0].venue_name, "Park Square Live Music & Coffee");
        assert!(detail.past_shows.iter().all(|s| s.venue_id == hop));
        assert_eq!(
            detail.past_shows_count + detail.upcoming_shows_count,
            3,
            "every show lands in exactly one bucket"
        );

        let later = artist_detail(&pool, artist_id, now + Duration::hours(2)).await.unwrap();
        assert_eq!(later.past_shows_count, 3);
        assert_eq!(later.upcoming_shows_count, 0);
    }

    #[tokio::test]
    async fn test_detail_unknown_artist() {
        let pool = init_memory_database().await.unwrap();
        let err = artist_detail(&pool, 77, reference_now()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
