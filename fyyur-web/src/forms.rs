//! Form decoding and validation
//!
//! Submissions arrive as `application/x-www-form-urlencoded` pairs. Pairs are
//! kept in order so repeated keys (the `genres` multi-select) survive.
//! Validation yields the parsed fields together with a map of field name to
//! error messages; the handler only touches the store when that map is empty.

use chrono::NaiveDateTime;
use fyyur_common::db::{ArtistFields, NewShow, VenueFields};
use fyyur_common::time::parse_start_time;
use fyyur_common::Error;
use std::collections::BTreeMap;

const REQUIRED: &str = "This field is required.";
const INVALID_CHOICE: &str = "Not a valid choice.";
const INVALID_URL: &str = "Invalid URL.";
const INVALID_PHONE: &str = "Invalid phone number.";

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Decoded form body
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`, trimmed; empty values count as absent
    pub fn text(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// First value for `key` exactly as submitted
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value for a repeated key, in submission order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Checkbox state; an unchecked box is simply not submitted
    pub fn checked(&self, key: &str) -> bool {
        self.raw(key)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "on" | "true" | "1"))
            .unwrap_or(false)
    }
}

/// Field name to error messages, ordered by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Single user-facing message: `Errors name This field is required., state ...`
    pub fn flatten(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{} {}", field, messages.join("|")))
            .collect();
        format!("Errors {}", parts.join(", "))
    }
}

/// Parsed submission plus whatever was wrong with it
#[derive(Debug, Clone)]
pub struct Validated<T> {
    pub fields: T,
    pub errors: FieldErrors,
}

impl<T> Validated<T> {
    pub fn into_result(self) -> Result<T, (T, FieldErrors)> {
        if self.errors.is_empty() {
            Ok(self.fields)
        } else {
            Err((self.fields, self.errors))
        }
    }
}

fn required(form: &FormData, field: &str, errors: &mut FieldErrors) -> String {
    match form.text(field) {
        Some(value) => value,
        None => {
            errors.add(field, REQUIRED);
            String::new()
        }
    }
}

fn state(form: &FormData, errors: &mut FieldErrors) -> String {
    let value = required(form, "state", errors);
    if !value.is_empty() && !STATES.contains(&value.as_str()) {
        errors.add("state", INVALID_CHOICE);
    }
    value
}

fn genres(form: &FormData, errors: &mut FieldErrors) -> Vec<String> {
    let values = form.all("genres");
    if values.is_empty() {
        errors.add("genres", REQUIRED);
    } else if values.iter().any(|g| !GENRES.contains(&g.as_str())) {
        errors.add("genres", INVALID_CHOICE);
    }
    values
}

fn url(form: &FormData, field: &str, errors: &mut FieldErrors) -> Option<String> {
    let value = form.text(field)?;
    if !is_url(&value) {
        errors.add(field, INVALID_URL);
    }
    Some(value)
}

fn phone(form: &FormData, errors: &mut FieldErrors) -> Option<String> {
    let value = form.text("phone")?;
    if !is_phone(&value) {
        errors.add("phone", INVALID_PHONE);
    }
    Some(value)
}

fn is_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or("");
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_phone(value: &str) -> bool {
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits >= 7
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' '))
}

pub fn validate_venue(form: &FormData) -> Validated<VenueFields> {
    let mut errors = FieldErrors::default();
    let fields = VenueFields {
        name: required(form, "name", &mut errors),
        city: required(form, "city", &mut errors),
        state: state(form, &mut errors),
        address: required(form, "address", &mut errors),
        phone: phone(form, &mut errors),
        genres: genres(form, &mut errors),
        website_link: url(form, "website_link", &mut errors),
        facebook_link: url(form, "facebook_link", &mut errors),
        image_link: url(form, "image_link", &mut errors),
        seeking_talent: form.checked("seeking_talent"),
        seeking_description: form.text("seeking_description"),
    };
    Validated { fields, errors }
}

pub fn validate_artist(form: &FormData) -> Validated<ArtistFields> {
    let mut errors = FieldErrors::default();
    let fields = ArtistFields {
        name: required(form, "name", &mut errors),
        city: required(form, "city", &mut errors),
        state: state(form, &mut errors),
        phone: phone(form, &mut errors),
        genres: genres(form, &mut errors),
        website_link: url(form, "website_link", &mut errors),
        facebook_link: url(form, "facebook_link", &mut errors),
        image_link: url(form, "image_link", &mut errors),
        seeking_venue: form.checked("seeking_venue"),
        seeking_description: form.text("seeking_description"),
    };
    Validated { fields, errors }
}

fn parse_id(form: &FormData, field: &str) -> Result<i64, Error> {
    let raw = form
        .text(field)
        .ok_or_else(|| Error::InvalidInput(format!("{} is required", field)))?;
    raw.parse()
        .map_err(|_| Error::InvalidInput(format!("{} is not a valid id: {}", field, raw)))
}

fn parse_time(form: &FormData) -> Result<NaiveDateTime, Error> {
    let raw = form
        .text("start_time")
        .ok_or_else(|| Error::InvalidInput("start_time is required".to_string()))?;
    parse_start_time(&raw)
        .ok_or_else(|| Error::InvalidInput(format!("start_time is not a valid timestamp: {}", raw)))
}

/// Parse a show submission; malformed ids or timestamps are `InvalidInput`
pub fn parse_show(form: &FormData) -> Result<NewShow, Error> {
    Ok(NewShow {
        artist_id: parse_id(form, "artist_id")?,
        venue_id: parse_id(form, "venue_id")?,
        start_time: parse_time(form)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn hop_form() -> FormData {
        form(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("image_link", ""),
            ("website_link", "https://www.themusicalhop.com"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist"),
        ])
    }

    #[test]
    fn test_valid_venue() {
        let validated = validate_venue(&hop_form());
        assert!(validated.errors.is_empty(), "{:?}", validated.errors);

        let fields = validated.fields;
        assert_eq!(fields.genres, vec!["Jazz", "Reggae"]);
        assert_eq!(fields.image_link, None);
        assert!(fields.seeking_talent);
    }

    #[test]
    fn test_unchecked_box_is_false() {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (k, v) in [("name", "Hop"), ("city", "SF"), ("state", "CA"), ("genres", "Jazz")] {
            pairs.push((k.to_string(), v.to_string()));
        }
        let validated = validate_artist(&FormData::new(pairs));
        assert!(validated.errors.is_empty());
        assert!(!validated.fields.seeking_venue);
    }

    #[test]
    fn test_missing_fields_reported() {
        let validated = validate_venue(&form(&[("name", "  "), ("state", "ZZ")]));
        let errors = validated.errors;

        assert_eq!(errors.get("name"), Some(&[REQUIRED.to_string()][..]));
        assert_eq!(errors.get("state"), Some(&[INVALID_CHOICE.to_string()][..]));
        assert!(errors.get("city").is_some());
        assert!(errors.get("address").is_some());
        assert!(errors.get("genres").is_some());
        assert!(errors.get("phone").is_none());
    }

    #[test]
    fn test_bad_links_and_phone() {
        let validated = validate_artist(&form(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("genres", "Polka"),
            ("phone", "call me"),
            ("website_link", "www.example.com"),
            ("facebook_link", "https://"),
        ]));

        let errors = validated.errors;
        assert_eq!(errors.get("genres"), Some(&[INVALID_CHOICE.to_string()][..]));
        assert_eq!(errors.get("phone"), Some(&[INVALID_PHONE.to_string()][..]));
        assert_eq!(errors.get("website_link"), Some(&[INVALID_URL.to_string()][..]));
        assert_eq!(errors.get("facebook_link"), Some(&[INVALID_URL.to_string()][..]));
    }

    #[test]
    fn test_flatten_orders_by_field() {
        let mut errors = FieldErrors::default();
        errors.add("state", INVALID_CHOICE);
        errors.add("name", REQUIRED);
        errors.add("name", "Too long.");

        assert_eq!(
            errors.flatten(),
            "Errors name This field is required.|Too long., state Not a valid choice."
        );
    }

    #[test]
    fn test_parse_show() {
        let show = parse_show(&form(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-05-21 21:30:00"),
        ]))
        .unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_string(), "2035-05-21 21:30:00");
    }

    #[test]
    fn test_parse_show_rejects_malformed_input() {
        let bad_id = parse_show(&form(&[
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2035-05-21 21:30:00"),
        ]));
        assert!(matches!(bad_id, Err(Error::InvalidInput(_))));

        let bad_time = parse_show(&form(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "next friday"),
        ]));
        assert!(matches!(bad_time, Err(Error::InvalidInput(_))));

        let missing = parse_show(&form(&[("artist_id", "4")]));
        assert!(matches!(missing, Err(Error::InvalidInput(_))));
    }
}
