use crate::constants::MAX_CATALOG_SIZE;
use crate::error::{AppError, Result};
use crate::models::{PlanningParameters, PointOfInterest};
use crate::services::itinerary_planner::presets::PresetBundle;
use crate::services::itinerary_planner::progress::NoProgress;
use crate::services::itinerary_planner::PlanOutcome;
use crate::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    pub pois: Vec<PointOfInterest>,
    #[serde(default)]
    pub parameters: Option<PlanningParameters>,
    /// Short preset name such as "3h" or "family"
    #[serde(default)]
    pub preset: Option<String>,
}

impl PlanItineraryRequest {
    /// Split into the catalog and the parameters to plan with.
    /// Exactly one of `parameters` and `preset` must be present.
    pub fn into_parts(self) -> Result<(Vec<PointOfInterest>, PlanningParameters)> {
        if self.pois.len() > MAX_CATALOG_SIZE {
            return Err(AppError::InvalidRequest(format!(
                "pois must contain at most {} entries",
                MAX_CATALOG_SIZE
            )));
        }

        let parameters = match (self.parameters, self.preset) {
            (Some(parameters), None) => parameters,
            (None, Some(name)) => name
                .parse::<PresetBundle>()
                .map_err(|_| AppError::UnknownPreset(name.clone()))?
                .parameters(),
            (Some(_), Some(_)) => {
                return Err(AppError::InvalidRequest(
                    "Provide either parameters or preset, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(AppError::InvalidRequest(
                    "Either parameters or preset is required".to_string(),
                ))
            }
        };

        parameters.validate().map_err(AppError::InvalidRequest)?;
        Ok((self.pois, parameters))
    }
}

#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    #[serde(flatten)]
    pub outcome: PlanOutcome,
    /// Itinerary polyline as a GeoJSON feature
    pub path: geojson::Feature,
}

/// POST /itineraries
/// Plan a walking itinerary over the supplied POI catalog
pub async fn create_itinerary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanItineraryRequest>,
) -> Result<Json<PlanItineraryResponse>> {
    let preset = request.preset.clone();
    let (pois, parameters) = request.into_parts()?;

    tracing::info!(
        catalog_size = pois.len(),
        preset = ?preset,
        max_duration_minutes = parameters.max_duration_minutes,
        "Itinerary request: {} POIs, {} min budget",
        pois.len(),
        parameters.max_duration_minutes
    );

    let outcome = state
        .planner
        .plan_async(pois.into(), parameters, Arc::new(NoProgress))
        .await?;
    let path = outcome.itinerary.path_feature();

    Ok(Json(PlanItineraryResponse { outcome, path }))
}
