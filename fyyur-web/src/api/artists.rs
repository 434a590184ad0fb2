//! Artist pages: listing, search, detail, create, edit, delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use fyyur_common::{
    catalog,
    db::{self, ArtistFields},
    time,
};
use tracing::error;

use super::DeleteResponse;
use crate::{
    error::{path_id, write_failure_status},
    forms::{validate_artist, FormData},
    pages::{self, Flash},
    AppState, WebResult,
};

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists).post(create_artist_submission))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/:artist_id", get(show_artist).delete(delete_artist))
        .route(
            "/artists/:artist_id/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> WebResult<Html<String>> {
    let artists = catalog::artists::list_artists(&state.db).await?;
    Ok(Html(pages::artists::artist_list(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Html<String>> {
    let form = FormData::new(pairs);
    let term = form.raw("search_term").unwrap_or("").to_string();
    let results = catalog::artists::search_artists(&state.db, &term, time::now()).await?;
    Ok(Html(pages::artists::search_results(&term, &results)))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Html<String>> {
    let artist_id = path_id(&raw_id)?;
    let view = catalog::artists::artist_detail(&state.db, artist_id, time::now()).await?;
    Ok(Html(pages::artists::artist_detail(&view, None)))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(pages::forms::artist_form(
        "List a new artist",
        "/artists/create",
        None,
        None,
    ))
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let fields = match validate_artist(&FormData::new(pairs)).into_result() {
        Ok(fields) => fields,
        Err((fields, errors)) => {
            let flash = Flash::Error(errors.flatten());
            return (
                StatusCode::BAD_REQUEST,
                Html(pages::forms::artist_form(
                    "List a new artist",
                    "/artists/create",
                    Some(&fields),
                    Some(&flash),
                )),
            )
                .into_response();
        }
    };

    match db::artists::create_artist(&state.db, &fields).await {
        Ok(_) => {
            let flash = Flash::Success(format!("Artist {} was successfully listed!", fields.name));
            Html(pages::home::home(Some(&flash))).into_response()
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", fields.name, e);
            let flash = Flash::Error(format!(
                "An error occurred. Artist {} could not be listed.",
                fields.name
            ));
            (write_failure_status(&e), Html(pages::home::home(Some(&flash)))).into_response()
        }
    }
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Html<String>> {
    let artist_id = path_id(&raw_id)?;
    let artist = db::artists::require_artist(&state.db, artist_id).await?;
    Ok(Html(pages::forms::artist_form(
        "Edit artist",
        &edit_action(artist_id),
        Some(&artist.fields()),
        None,
    )))
}

/// POST /artists/:artist_id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> WebResult<Response> {
    let artist_id = path_id(&raw_id)?;
    db::artists::require_artist(&state.db, artist_id).await?;

    let fields = match validate_artist(&FormData::new(pairs)).into_result() {
        Ok(fields) => fields,
        Err((fields, errors)) => {
            let flash = Flash::Error(errors.flatten());
            return Ok(edit_form_response(
                StatusCode::BAD_REQUEST,
                artist_id,
                &fields,
                &flash,
            ));
        }
    };

    match db::artists::update_artist(&state.db, artist_id, &fields).await {
        Ok(()) => {
            let view = catalog::artists::artist_detail(&state.db, artist_id, time::now()).await?;
            let flash = Flash::Success(format!("Artist {} was successfully updated!", fields.name));
            Ok(Html(pages::artists::artist_detail(&view, Some(&flash))).into_response())
        }
        Err(e) if e.is_not_found() => Err(e.into()),
        Err(e) => {
            error!("Failed to update artist {}: {}", artist_id, e);
            let flash = Flash::Error(format!(
                "An error occurred. Artist {} could not be updated.",
                fields.name
            ));
            Ok(edit_form_response(
                write_failure_status(&e),
                artist_id,
                &fields,
                &flash,
            ))
        }
    }
}

/// DELETE /artists/:artist_id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> WebResult<Response> {
    let artist_id = path_id(&raw_id)?;
    // Label for the failure message; the store reports the name on success
    let label = match db::artists::get_artist(&state.db, artist_id).await {
        Ok(Some(artist)) => artist.name,
        _ => artist_id.to_string(),
    };

    let (status, body) = match db::artists::delete_artist(&state.db, artist_id).await {
        Ok(deleted) => (
            StatusCode::OK,
            DeleteResponse {
                success: true,
                message: format!("Artist {} was successfully deleted.", deleted.name),
                redirect: "/artists".to_string(),
            },
        ),
        Err(e) => {
            error!("Failed to delete artist {}: {}", artist_id, e);
            (
                write_failure_status(&e),
                DeleteResponse {
                    success: false,
                    message: format!("An error occurred. Artist {} could not be deleted.", label),
                    redirect: "/artists".to_string(),
                },
            )
        }
    };
    Ok((status, Json(body)).into_response())
}

fn edit_action(artist_id: i64) -> String {
    format!("/artists/{}/edit", artist_id)
}

fn edit_form_response(
    status: StatusCode,
    artist_id: i64,
    fields: &ArtistFields,
    flash: &Flash,
) -> Response {
    (
        status,
        Html(pages::forms::artist_form(
            "Edit artist",
            &edit_action(artist_id),
            Some(fields),
            Some(flash),
        )),
    )
        .into_response()
}
