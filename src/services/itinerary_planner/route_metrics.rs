use super::travel_time::walking_seconds;
use crate::config::PlannerConfig;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// Display summary of a finalized route.
///
/// Uses a flat per-POI visit time rather than the per-stop dwell estimates,
/// so it can differ from the itinerary's own duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteTimeInfo {
    /// Walking plus visit time (seconds)
    pub total_time_s: f64,
    pub walking_time_s: f64,
    pub poi_visit_time_s: f64,
    pub total_distance_m: f64,
    pub poi_count: usize,
    pub formatted_total_time: String,
    pub formatted_walking_time: String,
    pub formatted_distance: String,
}

impl RouteTimeInfo {
    /// Aggregate over consecutive stop coordinates
    pub fn compute(stops: &[Coordinates], config: &PlannerConfig) -> Self {
        let total_distance_m: f64 = stops
            .windows(2)
            .map(|w| w[0].distance_meters_to(&w[1]))
            .sum();
        let walking_time_s = walking_seconds(total_distance_m, config.walking_speed_mps);
        let poi_visit_time_s = stops.len() as f64 * config.average_visit_minutes * 60.0;
        let total_time_s = walking_time_s + poi_visit_time_s;

        RouteTimeInfo {
            total_time_s,
            walking_time_s,
            poi_visit_time_s,
            total_distance_m,
            poi_count: stops.len(),
            formatted_total_time: format_time(total_time_s),
            formatted_walking_time: format_time(walking_time_s),
            formatted_distance: format_distance(total_distance_m),
        }
    }
}

/// "1ч 5мин" from one hour up, otherwise just "13мин". Partial minutes are dropped.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = total % 3600 / 60;

    if hours > 0 {
        format!("{}ч {}мин", hours, minutes)
    } else {
        format!("{}мин", minutes)
    }
}

/// Kilometers with one decimal from 1000m up, whole meters below.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} км", meters / 1000.0)
    } else {
        format!("{:.0} м", meters)
    }
}
