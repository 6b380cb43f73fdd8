use crate::constants::MAX_PLANNING_DURATION_MINUTES;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// User preferences and constraints for a single planning call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanningParameters {
    /// Labels matched against POI categories and tags
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_categories: Vec<String>,
    #[serde(default)]
    pub avoid_categories: Vec<String>,
    /// Total time budget (minutes) for dwell and travel
    pub max_duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_location: Option<Coordinates>,
    /// Soft distance limit. Reported when exceeded, not enforced during selection.
    #[serde(default)]
    pub max_distance_km: f64,
    #[serde(default)]
    pub include_audio_guides: bool,
    #[serde(default)]
    pub include_restaurants: bool,
    #[serde(default)]
    pub include_shopping: bool,
}

impl PlanningParameters {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_duration_minutes > MAX_PLANNING_DURATION_MINUTES {
            return Err(format!(
                "max_duration_minutes must be at most {}",
                MAX_PLANNING_DURATION_MINUTES
            ));
        }
        if !self.max_distance_km.is_finite() || self.max_distance_km < 0.0 {
            return Err("max_distance_km must be a non-negative number".to_string());
        }
        if let Some(start) = &self.start_location {
            if !start.is_usable() {
                return Err(format!(
                    "Invalid start_location: ({}, {})",
                    start.lat, start.lng
                ));
            }
        }
        Ok(())
    }
}
