//! Server-rendered HTML
//!
//! Each function takes a view-model and returns a complete page. No data is
//! fetched or computed here; every user-supplied string goes through
//! [`escape`].

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

/// One-shot message shown above the page content
#[derive(Debug, Clone, PartialEq)]
pub enum Flash {
    Success(String),
    Error(String),
}

impl Flash {
    pub fn message(&self) -> &str {
        match self {
            Flash::Success(msg) | Flash::Error(msg) => msg,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Flash::Success(_) => "flash flash-success",
            Flash::Error(_) => "flash flash-error",
        }
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Optional image, or nothing
pub(crate) fn image(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(
            r#"<img class="thumb" src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

/// Optional external link, or nothing
pub(crate) fn link_row(label: &str, link: Option<&str>) -> String {
    match link {
        Some(href) => format!(
            r#"<p><strong>{}:</strong> <a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
            label,
            escape(href),
            escape(href)
        ),
        None => String::new(),
    }
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wrap page content in the site chrome
pub fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = flash
        .map(|f| format!(r#"<div class="{}">{}</div>"#, f.class(), escape(f.message())))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <style>
        body {{ font-family: system-ui, -apple-system, sans-serif; max-width: 960px; margin: 0 auto; padding: 20px; line-height: 1.5; }}
        nav a {{ margin-right: 16px; }}
        nav form {{ display: inline; }}
        .flash {{ padding: 10px 14px; border-radius: 4px; margin: 16px 0; }}
        .flash-success {{ background: #e6f4ea; border: 1px solid #34a853; }}
        .flash-error {{ background: #fce8e6; border: 1px solid #d93025; }}
        .genre {{ display: inline-block; padding: 2px 8px; background: #eef; border-radius: 10px; font-size: 0.9em; }}
        .thumb {{ max-width: 120px; max-height: 120px; }}
        .seeking {{ color: #0066cc; }}
        label {{ display: block; margin-top: 10px; }}
        .button {{ display: inline-block; padding: 8px 16px; background: #0066cc; color: white; text-decoration: none; border: none; border-radius: 4px; cursor: pointer; }}
        .button-danger {{ background: #d93025; }}
    </style>
</head>
<body>
    <nav>
        <a href="/"><strong>Fyyur</strong></a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <form method="post" action="/venues/search"><input name="search_term" placeholder="Find a venue"></form>
        <form method="post" action="/artists/search"><input name="search_term" placeholder="Find an artist"></form>
    </nav>
    {flash_html}
    <main>
{body}
    </main>
</body>
</html>
"#,
        title = escape(title),
        flash_html = flash_html,
        body = body,
    )
}
