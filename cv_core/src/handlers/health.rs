//! Health and metrics handlers

use crate::{metrics::MetricsSnapshot, AppState};
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "variant": state.routes.variant,
        "uptime_seconds": state.metrics.uptime_seconds(),
        "timestamp": chrono::Utc::now().timestamp(),
    }))
}

pub async fn handle_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.get_snapshot())
}
