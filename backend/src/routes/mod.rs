//! Route definitions for the Agricultural Advisory Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// The advisory page and its form submission
pub fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::show_index).post(handlers::submit_feature))
}
