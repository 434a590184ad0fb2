//! Venue pages: listing, search, detail, create, edit, delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use fyyur_common::{
    catalog,
    db::{self, VenueFields},
    time,
};
use tracing::error;

use super::DeleteResponse;
use crate::{
    error::{path_id, write_failure_status},
    forms::{validate_venue, FormData},
    pages::{self, Flash},
    AppState, WebResult,
};

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues).post(create_venue_submission))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/:venue_id", get(show_venue).delete(delete_venue))
        .route(
            "/venues/:venue_id/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> WebResult<Html<String>> {
    let areas = catalog::venues::list_venue_areas(&state.db, time::now()).await?;
    Ok(Html(pages::venues::venue_areas(&areas)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Html<String>> {
    let form = FormData::new(pairs);
    let term = form.raw("search_term").unwrap_or("").to_string();
    let results = catalog::venues::search_venues(&state.db, &term, time::now()).await?;
    Ok(Html(pages::venues::search_results(&term, &results)))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Html<String>> {
    let venue_id = path_id(&raw_id)?;
    let view = catalog::venues::venue_detail(&state.db, venue_id, time::now()).await?;
    Ok(Html(pages::venues::venue_detail(&view, None)))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(pages::forms::venue_form(
        "List a new venue",
        "/venues/create",
        None,
        None,
    ))
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = match validate_venue(&FormData::new(pairs)).into_result() {
        Ok(fields) => fields,
        Err((fields, errors)) => {
            let flash = Flash::Error(errors.flatten());
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::forms::venue_form(
                    "List a new venue",
                    "/venues/create",
                    Some(&fields),
                    Some(&flash),
                )),
            )
                .into_response();
        }
    };

    match db::venues::create_venue(&state.db, &fields).await {
        Ok(_) => {
            let flash = Flash::Success(format!("Venue {} was successfully listed!", fields.name));
            Html(pages::home::home(Some(&flash))).into_response()
        }
        Err(e) => {
            error!("Failed to list venue {}: {}", fields.name, e);
            let flash = Flash::Error(format!(
                "An error occurred. Venue {} could not be listed.",
                fields.name
            ));
            (write_failure_status(&e), Html(pages::home::home(Some(&flash)))).into_response()
        }
    }
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Html<String>> {
    let venue_id = path_id(&raw_id)?;
    let venue = db::venues::require_venue(&state.db, venue_id).await?;
    Ok(Html(pages::forms::venue_form(
        "Edit venue",
        &edit_action(venue_id),
        Some(&venue.fields()),
        None,
    )))
}

/// POST /venues/:venue_id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let venue_id = path_id(&raw_id)?;
    db::venues::require_venue(&state.db, venue_id).await?;

    let fields = match validate_venue(&FormData::new(pairs)).into_result() {
        Ok(fields) => fields,
        Err((fields, errors)) => {
            let flash = Flash::Error(errors.flatten());
            return Ok(edit_form_response(
                StatusCode::BAD_REQUEST,
                venue_id,
                &fields,
                &flash,
            ));
        }
    };

    match db::venues::update_venue(&state.db, venue_id, &fields).await {
        Ok(()) => {
            let view = catalog::venues::venue_detail(&state.db, venue_id, time::now()).await?;
            let flash = Flash::Success(format!("Venue {} was successfully updated!", fields.name));
            Ok(Html(pages::venues::venue_detail(&view, Some(&flash))).into_response())
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to update venue {}: {}", venue_id, e);
            let flash = Flash::Error(format!(
                "An error occurred. Venue {} could not be updated.",
                fields.name
            ));
            Ok(edit_form_response(
                write_failure_status(&e),
                venue_id,
                &fields,
                &flash,
            ))
        }
    }
}

/// DELETE /venues/:venue_id
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Response> {
    let venue_id = path_id(&raw_id)?;
    // Label for the failure message; the store reports the name on success
    let label = match db::venues::get_venue(&state.db, venue_id).await {
        Ok(Some(venue)) => venue.name,
        _ => venue_id.to_string(),
    };

    let (status, body) = match db::venues::delete_venue(&state.db, venue_id).await {
        Ok(deleted) => (
            StatusCode::OK,
            DeleteResponse {
                success: true,
                message: format!("Venue {} was successfully deleted.", deleted.name),
                redirect: "/venues".to_string(),
            },
        ),
        Err(e) => {
            error!("Failed to delete venue {}: {}", venue_id, e);
            (
                write_failure_status(&e),
                DeleteResponse {
                    success: false,
                    message: format!("An error occurred. Venue {} could not be deleted.", label),
                    redirect: "/venues".to_string(),
                },
            )
        }
    };
    Ok((status, Json(body)).into_response())
}

fn edit_action(venue_id: i64) -> String {
    format!("/venues/{}/edit", venue_id)
}

fn edit_form_response(
    status: StatusCode,
    venue_id: i64,
    fields: &VenueFields,
    flash: &Flash,
) -> Response {
    (
        status,
        Html(pages::forms::venue_form(
            "Edit venue",
            &edit_action(venue_id),
            Some(fields),
            Some(flash),
        )),
    )
        .into_response()
}
