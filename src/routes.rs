use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddMovieForm, EditMovieForm},
    templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.catalog.list_ranked().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(&AddMovieForm::default(), &[]))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Response> {
    match form.validate() {
        Ok(new) => {
            state.catalog.add(new).await?;
            Ok(redirect_home())
        }
        Err(errors) => Ok(Html(templates::add_page(&form, &errors)).into_response()),
    }
}

#[derive(Debug, Deserialize)]
pub struct EditParams {
    id: Option<i32>,
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EditParams>,
) -> AppResult<Html<String>> {
    let id = params.id.ok_or(AppError::NotFound)?;
    let movie = state.catalog.find(id).await?;

    let form =
        EditMovieForm { rating: movie.rating.to_string(), review: movie.review.clone() };
    Ok(Html(templates::edit_page(&movie, &form, &[])))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EditParams>,
    Form(form): Form<EditMovieForm>,
) -> AppResult<Response> {
    let id = params.id.ok_or(AppError::NotFound)?;
    let movie = state.catalog.find(id).await?;

    match form.validate() {
        Ok(update) => {
            state.catalog.update_review(id, update.rating, update.review).await?;
            Ok(redirect_home())
        }
        Err(errors) => Ok(Html(templates::edit_page(&movie, &form, &errors)).into_response()),
    }
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    state.catalog.remove(id).await?;
    Ok(redirect_home())
}

fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, HeaderValue::from_static("/"))]).into_response()
}
