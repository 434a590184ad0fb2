//! Timestamp utilities
//!
//! Show start times are naive local date-times. Every view decides
//! past vs. upcoming through [`is_upcoming`], so the boundary is identical
//! everywhere: a show starting exactly at `now` is past.

use chrono::{Local, NaiveDateTime};

/// Display format used by venue and artist detail views (24-hour, zero-padded)
pub const DETAIL_FORMAT: &str = "%m/%d/%Y, %H:%M";

/// Display format used by the show listing
pub const LISTING_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted submission formats, tried in order
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Upcoming iff the show starts strictly after `now`
pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

/// Split items into `(past, upcoming)` preserving their relative order
pub fn partition_by_start<T, F>(items: Vec<T>, now: NaiveDateTime, start_of: F) -> (Vec<T>, Vec<T>)
where
    F: Fn(&T) -> NaiveDateTime,
{
    let (upcoming, past): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| is_upcoming(start_of(item), now));
    (past, upcoming)
}

/// Parse a submitted start time
pub fn parse_start_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Render a start time for detail views (`MM/DD/YYYY, HH:MM`)
pub fn format_detail(start_time: NaiveDateTime) -> String {
    start_time.format(DETAIL_FORMAT).to_string()
}

/// Render a start time for the show listing
pub fn format_listing(start_time: NaiveDateTime) -> String {
    start_time.format(LISTING_FORMAT).to_string()
}
