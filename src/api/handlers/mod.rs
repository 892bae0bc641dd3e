use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::AppState;
use crate::callbacks::{Dependency, InputValue, PropertyRef};
use crate::engine::{compute_outcome_breakdown, compute_payload_correlation, outcome_counts};
use crate::error::DashboardError;
use crate::layout::Component;
use crate::models::*;

const INDEX_HTML: &str = include_str!("../index.html");

// ============================================================
// Error Handling
// ============================================================

/// Map a dashboard error onto an HTTP response.
///
/// Input errors are the caller's fault and are echoed back. Anything else is
/// logged server-side and replaced with a generic message.
fn error_response(e: DashboardError) -> (StatusCode, String) {
    match e {
        DashboardError::InvalidInput(_) => {
            tracing::warn!("Validation error: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        DashboardError::UnknownOutput(_) => {
            tracing::warn!("{}", e);
            (StatusCode::NOT_FOUND, e.to_string())
        }
        other => {
            tracing::error!("Internal error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        records: state.table.len(),
    })
}

// ============================================================
// Page
// ============================================================

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_layout(State(state): State<AppState>) -> Json<Component> {
    Json(state.layout.as_ref().clone())
}

pub async fn get_dependencies(State(state): State<AppState>) -> Json<Vec<Dependency>> {
    Json(state.callbacks.dependencies())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateComponentRequest {
    /// Output to recompute, as `id.property`.
    pub output: String,
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

pub async fn update_component(
    State(state): State<AppState>,
    Json(request): Json<UpdateComponentRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let output: PropertyRef = request.output.parse().map_err(error_response)?;
    let figure = state
        .callbacks
        .dispatch(&state.table, &output, &request.inputs)
        .map_err(error_response)?;

    Ok(Json(json!({
        "response": { output.id: { output.property: figure } }
    })))
}

// ============================================================
// Selections
// ============================================================

pub async fn list_sites(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.table.sites().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct OutcomeQuery {
    pub site: Option<String>,
}

pub async fn get_outcome_breakdown(
    State(state): State<AppState>,
    Query(query): Query<OutcomeQuery>,
) -> Json<OutcomeBreakdown> {
    let site = query.site.map(SiteSelection::from).unwrap_or_default();
    let selection = compute_outcome_breakdown(&state.table, &site);

    Json(OutcomeBreakdown {
        site: site.as_value().to_string(),
        counts: outcome_counts(&selection.subset),
        records: selection.subset.to_owned_records(),
        title: selection.title,
    })
}

#[derive(Debug, Deserialize)]
pub struct PayloadQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

pub async fn get_payload_correlation(
    State(state): State<AppState>,
    Query(query): Query<PayloadQuery>,
) -> Result<Json<PayloadCorrelation>, (StatusCode, String)> {
    let site = query.site.map(SiteSelection::from).unwrap_or_default();
    let range = PayloadRange::new(
        query.low.unwrap_or_else(|| state.table.min_payload_mass_kg()),
        query.high.unwrap_or_else(|| state.table.max_payload_mass_kg()),
    )
    .map_err(error_response)?;

    let selection = compute_payload_correlation(&state.table, &site, &range);

    Ok(Json(PayloadCorrelation {
        site: site.as_value().to_string(),
        low: range.low(),
        high: range.high(),
        records: selection.subset.to_owned_records(),
        title: selection.title,
    }))
}
