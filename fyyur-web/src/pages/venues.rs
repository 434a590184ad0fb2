//! Venue pages

use super::{escape, genre_tags, image, layout, link_row, Flash};
use fyyur_common::catalog::{SearchResults, VenueArea, VenueDetailView, VenueShowView, VenueSummary};

fn summary_item(venue: &VenueSummary) -> String {
    format!(
        r#"<li><a href="/venues/{}">{}</a> <small>{} upcoming show(s)</small></li>"#,
        venue.id,
        escape(&venue.name),
        venue.num_upcoming_shows
    )
}

/// Venues grouped by city and state
pub fn venue_areas(areas: &[VenueArea]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>\n");
    }
    for area in areas {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul>\n",
            escape(&area.city),
            escape(&area.state)
        ));
        for venue in &area.venues {
            body.push_str(&summary_item(venue));
            body.push('\n');
        }
        body.push_str("</ul>\n");
    }
    layout("Venues", None, &body)
}

pub fn search_results(term: &str, results: &SearchResults<VenueSummary>) -> String {
    let mut body = format!(
        "<h1>Number of search results for \"{}\": {}</h1>\n<ul>\n",
        escape(term),
        results.count
    );
    for venue in &results.data {
        body.push_str(&summary_item(venue));
        body.push('\n');
    }
    body.push_str("</ul>\n");
    layout("Venue Search", None, &body)
}

fn show_items(shows: &[VenueShowView]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<li>{}<a href="/artists/{}">{}</a> <small>{}</small></li>"#,
                image(show.artist_image_link.as_deref(), &show.artist_name),
                show.artist_id,
                escape(&show.artist_name),
                escape(&show.start_time)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn venue_detail(venue: &VenueDetailView, flash: Option<&Flash>) -> String {
    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking"><strong>Seeking talent:</strong> {}</p>"#,
            escape(venue.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p>Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{image}
<p>{genres}</p>
<p><strong>Address:</strong> {address}, {city}, {state}</p>
<p><strong>Phone:</strong> {phone}</p>
{website}
{facebook}
{seeking}
<h2>{upcoming_count} Upcoming Show(s)</h2>
<ul>
{upcoming}
</ul>
<h2>{past_count} Past Show(s)</h2>
<ul>
{past}
</ul>
<p>
    <a class="button" href="/venues/{id}/edit">Edit</a>
    <button class="button button-danger" id="delete-venue" data-id="{id}">Delete</button>
</p>
<script>
document.getElementById('delete-venue').onclick = function (e) {{
    fetch('/venues/' + e.target.dataset.id, {{ method: 'DELETE' }})
        .then(function (response) {{ return response.json(); }})
        .then(function (body) {{ alert(body.message); window.location.href = body.redirect; }});
}};
</script>"#,
        name = escape(&venue.name),
        id = venue.id,
        image = image(venue.image_link.as_deref(), &venue.name),
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(venue.phone.as_deref().unwrap_or("")),
        website = link_row("Website", venue.website_link.as_deref()),
        facebook = link_row("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        upcoming_count = venue.upcoming_shows_count,
        upcoming = show_items(&venue.upcoming_shows),
        past_count = venue.past_shows_count,
        past = show_items(&venue.past_shows),
    );

    layout(&venue.name, flash, &body)
}
