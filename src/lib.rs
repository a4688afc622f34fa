pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod templates;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{catalog::MovieCatalog, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: MovieCatalog,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/add", get(routes::add_form).post(routes::add_submit))
        .route("/edit", get(routes::edit_form).post(routes::edit_submit))
        .route("/delete/{id}", get(routes::delete).post(routes::delete))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
