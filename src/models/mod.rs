pub mod coordinates;
pub mod itinerary;
pub mod parameters;
pub mod poi;

pub use coordinates::Coordinates;
pub use itinerary::{Difficulty, Itinerary, PlanningNotice, Stop};
pub use parameters::PlanningParameters;
pub use poi::{CategoryKind, PointOfInterest};
