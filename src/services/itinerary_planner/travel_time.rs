use crate::config::{PlannerConfig, TravelTimeModel};
use crate::models::Coordinates;

/// Seconds needed to walk `meters` at `speed_mps`.
pub fn walking_seconds(meters: f64, speed_mps: f64) -> f64 {
    meters / speed_mps
}

/// Seconds needed to walk the straight line between two points.
pub fn walking_time_between(from: &Coordinates, to: &Coordinates, speed_mps: f64) -> f64 {
    walking_seconds(from.distance_meters_to(to), speed_mps)
}

/// Travel-time estimate used while stops are being selected.
#[derive(Debug, Clone)]
pub struct TravelTimeEstimator {
    model: TravelTimeModel,
    fixed_minutes: u32,
    walking_speed_mps: f64,
}

impl TravelTimeEstimator {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            model: config.travel_time_model,
            fixed_minutes: config.fixed_travel_minutes,
            walking_speed_mps: config.walking_speed_mps,
        }
    }

    /// Minutes to reach `to`. The first stop is free under the fixed model;
    /// the geodesic model walks from the start location when one is given.
    pub fn leg_minutes(
        &self,
        previous_stop: Option<&Coordinates>,
        start: Option<&Coordinates>,
        to: &Coordinates,
    ) -> u32 {
        match self.model {
            TravelTimeModel::Fixed => previous_stop.map_or(0, |_| self.fixed_minutes),
            TravelTimeModel::Geodesic => previous_stop.or(start).map_or(0, |from| {
                let seconds = walking_time_between(from, to, self.walking_speed_mps);
                (seconds / 60.0).ceil() as u32
            }),
        }
    }
}
