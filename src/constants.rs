//! Stable application-wide constants.
//!
//! Values here are algorithm coefficients, display templates, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that benefit from runtime experimentation, see
//! [`PlannerConfig`](crate::config::PlannerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Walking model ---

/// Average walking speed in meters per second (4.5 km/h).
/// Overridden by `PLANNER_WALKING_SPEED_MPS`.
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.25;
/// Coarse per-POI visit time used by the display summary, not by selection.
/// Overridden by `PLANNER_AVERAGE_VISIT_MINUTES`.
pub const DEFAULT_AVERAGE_VISIT_MINUTES: f64 = 15.0;
/// Flat travel time between consecutive stops while selecting.
/// Overridden by `PLANNER_FIXED_TRAVEL_MINUTES`.
pub const DEFAULT_FIXED_TRAVEL_MINUTES: u32 = 10;

// --- Selection ---

/// Dwell time given to the stop seeded from the start location.
/// Overridden by `PLANNER_START_DWELL_MINUTES`.
pub const DEFAULT_START_DWELL_MINUTES: u32 = 15;
/// Score bonus when a POI shares a category with the preferred list.
pub const PREFERRED_CATEGORY_BONUS: f64 = 0.5;
/// Score bonus when a POI has at least one audio guide.
pub const AUDIO_GUIDE_BONUS: f64 = 0.3;
/// Upper bound on a single planning budget (one week).
pub const MAX_PLANNING_DURATION_MINUTES: u32 = 10_080;

// --- Dwell-time estimates (minutes) ---

pub const DWELL_MUSEUM_MINUTES: u32 = 45;
pub const DWELL_ARCHITECTURE_MINUTES: u32 = 30;
pub const DWELL_FOOD_MINUTES: u32 = 60;
pub const DWELL_SOUVENIR_MINUTES: u32 = 15;
pub const DWELL_DEFAULT_MINUTES: u32 = 20;
/// Extra time spent listening when an audio guide is requested and present.
pub const DWELL_AUDIO_GUIDE_EXTRA_MINUTES: u32 = 10;

// --- Cost estimate ---

/// Placeholder price per stop (rubles). Not derived from real POI pricing.
/// Overridden by `PLANNER_COST_PER_STOP`.
pub const DEFAULT_COST_PER_STOP: f64 = 200.0;

// --- Difficulty thresholds ---

pub const EASY_MAX_HOURS: f64 = 2.0;
pub const EASY_MAX_DISTANCE_KM: f64 = 3.0;
pub const MEDIUM_MAX_HOURS: f64 = 4.0;
pub const MEDIUM_MAX_DISTANCE_KM: f64 = 6.0;

// --- Progress checkpoints ---

pub const PROGRESS_FILTERED: f64 = 0.2;
pub const PROGRESS_SELECTED: f64 = 0.6;
pub const PROGRESS_PATH_BUILT: f64 = 0.8;
pub const PROGRESS_ASSEMBLED: f64 = 1.0;

// --- Display text ---

/// Note attached to the stop seeded from the start location.
pub const START_STOP_NOTE: &str = "Старт маршрута";
/// Prefix of generated itinerary ids.
pub const ITINERARY_ID_PREFIX: &str = "custom";

pub const TAG_PERSONALIZED: &str = "personalized";
pub const TAG_AUDIO_GUIDE: &str = "audio-guide";
pub const TAG_FOOD: &str = "food";
pub const TAG_SHOPPING: &str = "shopping";

// --- HTTP limits ---

/// Largest POI catalog accepted in a single planning request.
pub const MAX_CATALOG_SIZE: usize = 5_000;
