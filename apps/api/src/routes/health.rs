use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::db::StoreDiagnostics;
use crate::state::AppState;

/// GET /
/// Liveness marker for the hosting platform and the site's uptime check.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "HairWorx.co API running" }))
}

/// GET /test
/// Operator-facing diagnostics: store availability, database name, and up
/// to ten collection names. Never used for control flow elsewhere.
pub async fn test_database_handler(State(state): State<AppState>) -> Json<StoreDiagnostics> {
    let report = state
        .store
        .diagnostics(state.config.database_url.is_some())
        .await;
    Json(report)
}
