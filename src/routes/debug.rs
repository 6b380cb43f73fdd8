use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Report liveness and the active planner settings
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let config = state.planner.config();

    Json(json!({
        "status": "ok",
        "checks": {
            "planner": {
                "travel_model": config.travel_time_model.to_string(),
                "selection_policy": config.selection_policy.to_string(),
            }
        }
    }))
}
