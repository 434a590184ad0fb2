//! Show pages: listing and scheduling

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use fyyur_common::{catalog, db, time};
use tracing::{error, warn};

use crate::{
    error::write_failure_status,
    forms::{parse_show, FormData},
    pages::{self, Flash},
    AppState, WebResult,
};

const FAILED: &str = "An error occurred. Show could not be listed.";

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show_submission))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> WebResult<Html<String>> {
    let shows = catalog::shows::list_shows(&state.db).await?;
    Ok(Html(pages::shows::show_listing(&shows)))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    Html(pages::forms::show_form(&time::format_listing(time::now()), None))
}

/// POST /shows/create
///
/// Malformed ids or timestamps re-render the form; a missing artist or venue
/// is reported on the home page and nothing is stored.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = FormData::new(pairs);
    let show = match parse_show(&form) {
        Ok(show) => show,
        Err(e) => {
            warn!("Rejected show submission: {}", e);
            let default_start = form.raw("start_time").unwrap_or("").to_string();
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::forms::show_form(&default_start, Some(&Flash::Error(FAILED.to_string())))),
            )
                .into_response();
        }
    };

    match db::shows::create_show(&state.db, &show).await {
        Ok(_) => {
            let flash = Flash::Success("Show was successfully listed!".to_string());
            Html(pages::home::home(Some(&flash))).into_response()
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            let flash = Flash::Error(FAILED.to_string());
            (write_failure_status(&e), Html(pages::home::home(Some(&flash)))).into_response()
        }
    }
}
