//! Create and edit forms

use super::{escape, layout, Flash};
use crate::forms::{GENRES, STATES};
use fyyur_common::db::{ArtistFields, VenueFields};

fn text_input(label: &str, name: &str, value: Option<&str>, required: bool) -> String {
    format!(
        r#"<label>{label} <input type="text" name="{name}" value="{value}"{required}></label>"#,
        label = label,
        name = name,
        value = escape(value.unwrap_or("")),
        required = if required { " required" } else { "" },
    )
}

fn state_select(selected: &str) -> String {
    let options: String = STATES
        .iter()
        .map(|state| {
            let mark = if *state == selected { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, state, mark)
        })
        .collect();
    format!(r#"<label>State <select name="state" required>{}</select></label>"#, options)
}

fn genre_select(selected: &[String]) -> String {
    let options: String = GENRES
        .iter()
        .map(|genre| {
            let mark = if selected.iter().any(|g| g == genre) { " selected" } else { "" };
            format!(r#"<option value="{0}"{1}>{0}</option>"#, escape(genre), mark)
        })
        .collect();
    format!(
        r#"<label>Genres <select name="genres" multiple required>{}</select></label>"#,
        options
    )
}

fn checkbox(label: &str, name: &str, checked: bool) -> String {
    format!(
        r#"<label><input type="checkbox" name="{}" value="y"{}> {}</label>"#,
        name,
        if checked { " checked" } else { "" },
        label
    )
}

/// Venue create/edit form; `action` is the submission URL
pub fn venue_form(
    title: &str,
    action: &str,
    venue: Option<&VenueFields>,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{address}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<p><input class="button" type="submit" value="{title}"></p>
</form>"#,
        title = escape(title),
        action = escape(action),
        name = text_input("Name", "name", venue.map(|v| v.name.as_str()), true),
        city = text_input("City", "city", venue.map(|v| v.city.as_str()), true),
        state = state_select(venue.map(|v| v.state.as_str()).unwrap_or("")),
        address = text_input("Address", "address", venue.map(|v| v.address.as_str()), true),
        phone = text_input("Phone", "phone", venue.and_then(|v| v.phone.as_deref()), false),
        genres = genre_select(venue.map(|v| v.genres.as_slice()).unwrap_or(&[])),
        facebook = text_input("Facebook link", "facebook_link", venue.and_then(|v| v.facebook_link.as_deref()), false),
        image = text_input("Image link", "image_link", venue.and_then(|v| v.image_link.as_deref()), false),
        website = text_input("Website link", "website_link", venue.and_then(|v| v.website_link.as_deref()), false),
        seeking = checkbox("Seeking talent", "seeking_talent", venue.map(|v| v.seeking_talent).unwrap_or(false)),
        description = text_input(
            "Seeking description",
            "seeking_description",
            venue.and_then(|v| v.seeking_description.as_deref()),
            false
        ),
    );
    layout(title, flash, &body)
}

/// Artist create/edit form
pub fn artist_form(
    title: &str,
    action: &str,
    artist: Option<&ArtistFields>,
    flash: Option<&Flash>,
) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
{name}
{city}
{state}
{phone}
{genres}
{facebook}
{image}
{website}
{seeking}
{description}
<p><input class="button" type="submit" value="{title}"></p>
</form>"#,
        title = escape(title),
        action = escape(action),
        name = text_input("Name", "name", artist.map(|a| a.name.as_str()), true),
        city = text_input("City", "city", artist.map(|a| a.city.as_str()), true),
        state = state_select(artist.map(|a| a.state.as_str()).unwrap_or("")),
        phone = text_input("Phone", "phone", artist.and_then(|a| a.phone.as_deref()), false),
        genres = genre_select(artist.map(|a| a.genres.as_slice()).unwrap_or(&[])),
        facebook = text_input("Facebook link", "facebook_link", artist.and_then(|a| a.facebook_link.as_deref()), false),
        image = text_input("Image link", "image_link", artist.and_then(|a| a.image_link.as_deref()), false),
        website = text_input("Website link", "website_link", artist.and_then(|a| a.website_link.as_deref()), false),
        seeking = checkbox("Seeking venue", "seeking_venue", artist.map(|a| a.seeking_venue).unwrap_or(false)),
        description = text_input(
            "Seeking description",
            "seeking_description",
            artist.and_then(|a| a.seeking_description.as_deref()),
            false
        ),
    );
    layout(title, flash, &body)
}

/// Show scheduling form; `default_start` pre-fills the start time
pub fn show_form(default_start: &str, flash: Option<&Flash>) -> String {
    let body = format!(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
<label>Artist ID <input type="number" name="artist_id" required></label>
<label>Venue ID <input type="number" name="venue_id" required></label>
<label>Start time <input type="text" name="start_time" value="{}" required></label>
<p><input class="button" type="submit" value="Create Show"></p>
</form>"#,
        escape(default_start)
    );
    layout("New Show", flash, &body)
}
