//! Sample rows shared by unit tests

use super::{ArtistFields, VenueFields};

pub(crate) fn musical_hop() -> VenueFields {
    VenueFields {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Reggae".to_string()],
        website_link: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        image_link: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

pub(crate) fn venue_in(name: &str, city: &str, state: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        ..musical_hop()
    }
}

pub(crate) fn guns_n_petals() -> ArtistFields {
    ArtistFields {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        website_link: Some("https://www.gunsnpetalsband.com".to_string()),
        facebook_link: None,
        image_link: Some("https://images.example.com/gnp.jpg".to_string()),
        seeking_venue: true,
        seeking_description: Some("Looking for shows in the San Francisco Bay Area!".to_string()),
    }
}

pub(crate) fn artist_named(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        ..guns_n_petals()
    }
}
