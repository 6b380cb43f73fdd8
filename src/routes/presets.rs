use crate::models::PlanningParameters;
use crate::services::itinerary_planner::presets::PresetBundle;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PresetSummary {
    pub name: PresetBundle,
    pub display_name: &'static str,
    pub parameters: PlanningParameters,
}

/// GET /presets
/// List the named parameter bundles
pub async fn list_presets() -> Json<Vec<PresetSummary>> {
    let presets = PresetBundle::all()
        .into_iter()
        .map(|preset| PresetSummary {
            name: preset,
            display_name: preset.display_name(),
            parameters: preset.parameters(),
        })
        .collect();

    Json(presets)
}
