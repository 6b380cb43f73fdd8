use crate::constants::*;
use std::env;
use std::fmt;

/// How travel time between consecutive stops is estimated while selecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelTimeModel {
    #[default]
    Fixed, // Flat minutes between stops, regardless of distance
    Geodesic, // Haversine distance at walking speed
}

impl std::str::FromStr for TravelTimeModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(TravelTimeModel::Fixed),
            "geodesic" => Ok(TravelTimeModel::Geodesic),
            _ => Err(format!(
                "Invalid travel time model: {}. Use 'fixed' or 'geodesic'",
                s
            )),
        }
    }
}

impl fmt::Display for TravelTimeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelTimeModel::Fixed => write!(f, "fixed"),
            TravelTimeModel::Geodesic => write!(f, "geodesic"),
        }
    }
}

/// What the optimizer does when the best-scored candidate does not fit the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    #[default]
    StopOnMiss, // End selection at the first candidate that does not fit
    SkipUnfit, // Drop the candidate and try the next best
}

impl std::str::FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(SelectionPolicy::StopOnMiss),
            "skip" => Ok(SelectionPolicy::SkipUnfit),
            _ => Err(format!(
                "Invalid selection policy: {}. Use 'stop' or 'skip'",
                s
            )),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::StopOnMiss => write!(f, "stop"),
            SelectionPolicy::SkipUnfit => write!(f, "skip"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Walking speed used by the display summary and the geodesic travel model
    pub walking_speed_mps: f64,

    /// Per-POI visit time used by the display summary (minutes)
    pub average_visit_minutes: f64,

    /// Flat travel time between consecutive stops for the fixed travel model
    pub fixed_travel_minutes: u32,

    /// Dwell time of the stop seeded from the start location
    pub start_dwell_minutes: u32,

    /// Placeholder cost per stop used for the estimated itinerary cost
    pub cost_per_stop: f64,

    pub travel_time_model: TravelTimeModel,

    pub selection_policy: SelectionPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            walking_speed_mps: DEFAULT_WALKING_SPEED_MPS,
            average_visit_minutes: DEFAULT_AVERAGE_VISIT_MINUTES,
            fixed_travel_minutes: DEFAULT_FIXED_TRAVEL_MINUTES,
            start_dwell_minutes: DEFAULT_START_DWELL_MINUTES,
            cost_per_stop: DEFAULT_COST_PER_STOP,
            travel_time_model: TravelTimeModel::default(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            walking_speed_mps: env::var("PLANNER_WALKING_SPEED_MPS")
                .unwrap_or_else(|_| defaults.walking_speed_mps.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_WALKING_SPEED_MPS")?,

            average_visit_minutes: env::var("PLANNER_AVERAGE_VISIT_MINUTES")
                .unwrap_or_else(|_| defaults.average_visit_minutes.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_AVERAGE_VISIT_MINUTES")?,

            fixed_travel_minutes: env::var("PLANNER_FIXED_TRAVEL_MINUTES")
                .unwrap_or_else(|_| defaults.fixed_travel_minutes.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_FIXED_TRAVEL_MINUTES")?,

            start_dwell_minutes: env::var("PLANNER_START_DWELL_MINUTES")
                .unwrap_or_else(|_| defaults.start_dwell_minutes.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_START_DWELL_MINUTES")?,

            cost_per_stop: env::var("PLANNER_COST_PER_STOP")
                .unwrap_or_else(|_| defaults.cost_per_stop.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_COST_PER_STOP")?,

            travel_time_model: env::var("PLANNER_TRAVEL_MODEL")
                .unwrap_or_else(|_| defaults.travel_time_model.to_string())
                .parse()?,

            selection_policy: env::var("PLANNER_SELECTION_POLICY")
                .unwrap_or_else(|_| defaults.selection_policy.to_string())
                .parse()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.walking_speed_mps.is_finite() || self.walking_speed_mps <= 0.0 {
            return Err("PLANNER_WALKING_SPEED_MPS must be a positive number".to_string());
        }
        if !self.average_visit_minutes.is_finite() || self.average_visit_minutes < 0.0 {
            return Err("PLANNER_AVERAGE_VISIT_MINUTES must not be negative".to_string());
        }
        if !self.cost_per_stop.is_finite() || self.cost_per_stop < 0.0 {
            return Err("PLANNER_COST_PER_STOP must not be negative".to_string());
        }
        if self.fixed_travel_minutes > MAX_PLANNING_DURATION_MINUTES {
            return Err(format!(
                "PLANNER_FIXED_TRAVEL_MINUTES must be at most {}",
                MAX_PLANNING_DURATION_MINUTES
            ));
        }
        if self.start_dwell_minutes > MAX_PLANNING_DURATION_MINUTES {
            return Err(format!(
                "PLANNER_START_DWELL_MINUTES must be at most {}",
                MAX_PLANNING_DURATION_MINUTES
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
