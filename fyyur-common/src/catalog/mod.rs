//! View-model derivation
//!
//! Turns raw venue, artist and show rows into the shapes the pages render:
//! venues grouped by location, search results with upcoming-show counts, and
//! detail views with shows split into past and upcoming. Every function takes
//! the reference instant explicitly so the partition rule in
//! [`crate::time::is_upcoming`] is the only place the boundary is decided.

pub mod artists;
pub mod shows;
pub mod venues;

use crate::time::is_upcoming;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;

pub use artists::{ArtistDetailView, ArtistSearchHit, ArtistShowView, ArtistSummary};
pub use shows::ShowListingView;
pub use venues::{VenueArea, VenueDetailView, VenueShowView, VenueSummary};

/// Search response: number of matches plus the matching rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Number of upcoming shows per owning id (venue or artist)
pub(crate) fn upcoming_counts(
    starts: &[(i64, NaiveDateTime)],
    now: NaiveDateTime,
) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for (owner_id, start_time) in starts {
        if is_upcoming(*start_time, now) {
            *counts.entry(*owner_id).or_insert(0) += 1;
        }
    }
    counts
}
