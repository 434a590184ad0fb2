//! Show listing page

use super::{escape, image, layout};
use fyyur_common::catalog::ShowListingView;

pub fn show_listing(shows: &[ShowListingView]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n<ul>\n");
    for show in shows {
        body.push_str(&format!(
            "<li>{image}<strong>{start}</strong> <a href=\"/artists/{artist_id}\">{artist}</a> playing at <a href=\"/venues/{venue_id}\">{venue}</a></li>\n",
            image = image(show.artist_image_link.as_deref(), &show.artist_name),
            start = escape(&show.start_time),
            artist_id = show.artist_id,
            artist = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape(&show.venue_name),
        ));
    }
    body.push_str("</ul>\n");
    if shows.is_empty() {
        body.push_str("<p>No shows scheduled yet.</p>\n");
    }
    layout("Shows", None, &body)
}
