use itinerary_planner::config::PlannerConfig;
use itinerary_planner::models::{Coordinates, PlanningParameters, PointOfInterest};

/// Saransk city centre
#[allow(dead_code)]
pub fn city_centre() -> Coordinates {
    Coordinates::new(54.1838, 45.1749).unwrap()
}

#[allow(dead_code)]
pub fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Create a test POI `meters_north` of the city centre
#[allow(dead_code)]
pub fn create_test_poi(
    id: &str,
    categories: &[&str],
    rating: f64,
    meters_north: f64,
) -> PointOfInterest {
    PointOfInterest::new(
        id,
        format!("Test POI {}", id),
        labels(categories),
        city_centre().offset_north(meters_north),
        rating,
    )
}

/// Mixed catalog spread along a north-south line
#[allow(dead_code)]
pub fn create_test_catalog() -> Vec<PointOfInterest> {
    vec![
        create_test_poi("cathedral", &["архитектура", "история"], 4.8, 0.0),
        create_test_poi("museum", &["музеи", "история"], 4.6, 400.0)
            .with_audio_guides(vec!["museum-tour-ru".to_string()]),
        create_test_poi("gallery", &["музеи", "искусство"], 4.2, 900.0),
        create_test_poi("cafe", &["еда"], 4.4, 1300.0),
        create_test_poi("market", &["сувениры"], 3.9, 1700.0),
        create_test_poi("theatre", &["архитектура", "развлечения"], 4.1, 2200.0),
        create_test_poi("park", &["природа"], 3.5, 2600.0)
            .with_tags(labels(&["семейный"])),
        create_test_poi("fountain", &["развлечения"], 3.7, 3100.0)
            .with_tags(labels(&["семейный", "история"])),
    ]
}

#[allow(dead_code)]
pub fn open_parameters(max_duration_minutes: u32) -> PlanningParameters {
    PlanningParameters {
        max_duration_minutes,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn get_test_config() -> PlannerConfig {
    PlannerConfig::default()
}
