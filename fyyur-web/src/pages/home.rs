//! Landing page

use super::{layout, Flash};

pub fn home(flash: Option<&Flash>) -> String {
    let body = r#"
        <h1>Fyyur</h1>
        <p>Find and book live music: browse venues and artists, or schedule a new show.</p>
        <p>
            <a class="button" href="/venues/create">Post a venue</a>
            <a class="button" href="/artists/create">Post an artist</a>
            <a class="button" href="/shows/create">Post a show</a>
        </p>"#;
    layout("Home", flash, body)
}
