//! Error pages

use super::layout;

pub fn not_found() -> String {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1><p>Sorry, that page could not be found.</p><p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our end. Please try again later.</p><p><a href="/">Back home</a></p>"#,
    )
}
