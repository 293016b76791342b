//! Agricultural Advisory Platform - Backend Server
//!
//! A single-page advisory tool for farmers: crop yield planning, water-loss
//! simulation with charts, regional water data and eco-friendly farming tips.

use axum::{routing::get, Router};
use shared::ReferenceData;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub mod charts;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(reference: ReferenceData, config: Config) -> Self {
        Self {
            reference: Arc::new(reference),
            config: Arc::new(config),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let assets = &state.config.assets;
    let static_files = ServeDir::new(&assets.static_dir);
    let mount = format!("/{}", assets.url_prefix.trim_matches('/'));

    Router::new()
        .merge(routes::page_routes())
        .route("/health", get(handlers::health_check))
        .nest_service(&mount, static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
