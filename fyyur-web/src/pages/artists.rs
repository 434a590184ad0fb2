//! Artist pages

use super::{escape, genre_tags, image, layout, link_row, Flash};
use fyyur_common::catalog::{ArtistDetailView, ArtistSearchHit, ArtistShowView, ArtistSummary, SearchResults};

pub fn artist_list(artists: &[ArtistSummary]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n<ul>\n");
    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");
    if artists.is_empty() {
        body.push_str("<p>No artists listed yet.</p>\n");
    }
    layout("Artists", None, &body)
}

pub fn search_results(term: &str, results: &SearchResults<ArtistSearchHit>) -> String {
    let mut body = format!(
        "<h1>Number of search results for \"{}\": {}</h1>\n<ul>\n",
        escape(term),
        results.count
    );
    for artist in &results.data {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> <small>{} upcoming show(s)</small></li>\n",
            artist.id,
            escape(&artist.name),
            artist.num_upcoming_shows
        ));
    }
    body.push_str("</ul>\n");
    layout("Artist Search", None, &body)
}

fn show_items(shows: &[ArtistShowView]) -> String {
    shows
        .iter()
        .map(|show| {
            format!(
                r#"<li>{}<a href="/venues/{}">{}</a> <small>{}</small></li>"#,
                image(show.venue_image_link.as_deref(), &show.venue_name),
                show.venue_id,
                escape(&show.venue_name),
                escape(&show.start_time)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn artist_detail(artist: &ArtistDetailView, flash: Option<&Flash>) -> String {
    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking"><strong>Seeking performance venues:</strong> {}</p>"#,
            escape(artist.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p>Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{image}
<p>{genres}</p>
<p><strong>Based in:</strong> {city}, {state}</p>
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
    <a class="button" href="/artists/{id}/edit">Edit</a>
    <button class="button button-danger" id="delete-artist" data-id="{id}">Delete</button>
</p>
<script>
document.getElementById('delete-artist').onclick = function (e) {{
    fetch('/artists/' + e.target.dataset.id, {{ method: 'DELETE' }})
        .then(function (response) {{ return response.json(); }})
        .then(function (body) {{ alert(body.message); window.location.href = body.redirect; }});
}};
</script>"#,
        name = escape(&artist.name),
        id = artist.id,
        image = image(artist.image_link.as_deref(), &artist.name),
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(artist.phone.as_deref().unwrap_or("")),
        website = link_row("Website", artist.website_link.as_deref()),
        facebook = link_row("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        upcoming_count = artist.upcoming_shows_count,
        upcoming = show_items(&artist.upcoming_shows),
        past_count = artist.past_shows_count,
        past = show_items(&artist.past_shows),
    );

    layout(&artist.name, flash, &body)
}
