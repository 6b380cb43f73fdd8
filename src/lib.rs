// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use services::itinerary_planner::{ItineraryPlanner, PlanOutcome};

/// Shared state for HTTP handlers. The planner is stateless, so no locking.
pub struct AppState {
    pub planner: ItineraryPlanner,
}
