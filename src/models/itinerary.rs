use crate::constants::*;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify by total duration and distance. First matching tier wins.
    pub fn classify(total_duration_minutes: u32, total_distance_km: f64) -> Self {
        let total_hours = total_duration_minutes as f64 / 60.0;

        if total_hours <= EASY_MAX_HOURS && total_distance_km <= EASY_MAX_DISTANCE_KM {
            Difficulty::Easy
        } else if total_hours <= MEDIUM_MAX_HOURS && total_distance_km <= MEDIUM_MAX_DISTANCE_KM {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Легкий",
            Difficulty::Medium => "Средний",
            Difficulty::Hard => "Сложный",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// One visit in an itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stop {
    pub poi_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub dwell_minutes: u32,
}

impl Stop {
    pub fn new(poi_id: impl Into<String>, dwell_minutes: u32) -> Self {
        Stop {
            poi_id: poi_id.into(),
            note: None,
            dwell_minutes,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stops: Vec<Stop>,
    /// Start location (if given) followed by each stop's coordinates
    pub polyline: Vec<Coordinates>,
    /// Dwell plus travel minutes as accounted during selection
    pub total_duration_minutes: u32,
    pub total_distance_km: f64,
    pub interests: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    pub difficulty: Difficulty,
    pub audio_guides: Vec<String>,
}

impl Itinerary {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Polyline as a GeoJSON LineString feature for map layers
    pub fn path_feature(&self) -> geojson::Feature {
        let line: Vec<Vec<f64>> = self.polyline.iter().map(|c| vec![c.lng, c.lat]).collect();

        let mut properties = geojson::JsonObject::new();
        properties.insert("itinerary_id".to_string(), self.id.clone().into());
        properties.insert("stop_count".to_string(), self.stops.len().into());
        properties.insert(
            "difficulty".to_string(),
            self.difficulty.to_string().into(),
        );
        properties.insert(
            "difficulty_label".to_string(),
            self.difficulty.display_name().into(),
        );

        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::LineString(line))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Non-fatal diagnostics describing why an itinerary came out short or empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanningNotice {
    /// Filtering left nothing to choose from
    EmptyCandidatePool,
    /// The first stop could not fit in the time budget
    BudgetTooSmall {
        required_minutes: u32,
        budget_minutes: u32,
    },
    /// POI skipped because it has no usable coordinates
    MissingCoordinate { poi_id: String },
    /// Walking distance is above the requested limit
    DistanceLimitExceeded { distance_km: f64, limit_km: f64 },
}

impl fmt::Display for PlanningNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningNotice::EmptyCandidatePool => write!(f, "no POI matched the filters"),
            PlanningNotice::BudgetTooSmall {
                required_minutes,
                budget_minutes,
            } => write!(
                f,
                "first stop needs {} min but the budget is {} min",
                required_minutes, budget_minutes
            ),
            PlanningNotice::MissingCoordinate { poi_id } => {
                write!(f, "POI {} has no usable coordinates", poi_id)
            }
            PlanningNotice::DistanceLimitExceeded {
                distance_km,
                limit_km,
            } => write!(
                f,
                "route is {:.2}km, above the {:.2}km limit",
                distance_km, limit_km
            ),
        }
    }
}
