pub mod itinerary_planner;
