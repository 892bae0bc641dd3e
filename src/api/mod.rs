mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::callbacks::CallbackRegistry;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::{build_layout, Component};
use crate::models::LaunchTable;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub table: LaunchTable,
    pub layout: Arc<Component>,
    pub callbacks: Arc<CallbackRegistry>,
}

impl AppState {
    /// Build the page and callback table for a loaded launch table.
    pub fn new(table: LaunchTable, config: &LayoutConfig) -> Result<Self> {
        config.validate()?;
        let layout = build_layout(&table, config);
        let callbacks = CallbackRegistry::dashboard();
        callbacks.validate(&layout)?;

        Ok(Self {
            table,
            layout: Arc::new(layout),
            callbacks: Arc::new(callbacks),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/sites", get(handlers::list_sites))
        .route("/outcomes", get(handlers::get_outcome_breakdown))
        .route("/payload", get(handlers::get_payload_correlation))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        // Page shell and the widget protocol it speaks
        .route("/", get(handlers::index))
        .route("/_dash-layout", get(handlers::get_layout))
        .route("/_dash-dependencies", get(handlers::get_dependencies))
        .route("/_dash-update-component", post(handlers::update_component))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
