use crate::config::PlannerConfig;
use crate::constants::*;
use crate::models::coordinates::path_length_km;
use crate::models::{Coordinates, Difficulty, Itinerary, PlanningParameters};
use uuid::Uuid;

use super::route_optimizer::OptimizedRoute;

/// Assembles the itinerary value from an optimized route.
pub struct ItineraryBuilder {
    cost_per_stop: f64,
}

impl ItineraryBuilder {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            cost_per_stop: config.cost_per_stop,
        }
    }

    /// Start location (if any) followed by each stop's coordinates
    pub fn build_polyline(start: Option<&Coordinates>, route: &OptimizedRoute) -> Vec<Coordinates> {
        start
            .copied()
            .into_iter()
            .chain(route.stops.iter().map(|s| s.coordinates))
            .collect()
    }

    pub fn build(
        &self,
        route: &OptimizedRoute,
        polyline: Vec<Coordinates>,
        parameters: &PlanningParameters,
    ) -> Itinerary {
        let total_distance_km = path_length_km(&polyline);
        let stop_count = route.stops.len();

        Itinerary {
            id: format!("{}-{}", ITINERARY_ID_PREFIX, Uuid::new_v4()),
            title: route_title(route.total_minutes, &parameters.interests),
            description: route_description(stop_count, &parameters.interests),
            stops: route.stops.iter().map(|s| s.stop.clone()).collect(),
            polyline,
            total_duration_minutes: route.total_minutes,
            total_distance_km,
            interests: parameters.interests.clone(),
            tags: route_tags(parameters),
            estimated_cost: Some(stop_count as f64 * self.cost_per_stop),
            difficulty: Difficulty::classify(route.total_minutes, total_distance_km),
            audio_guides: route
                .stops
                .iter()
                .flat_map(|s| s.poi.audio_guides.iter().cloned())
                .collect(),
        }
    }
}

pub fn route_title(total_duration_minutes: u32, interests: &[String]) -> String {
    format!(
        "Маршрут {}ч: {}",
        total_duration_minutes / 60,
        interests.join(", ")
    )
}

pub fn route_description(stop_count: usize, interests: &[String]) -> String {
    format!(
        "Персонализированный маршрут по {} точкам интереса. Включает {}.",
        stop_count,
        interests.join(", ")
    )
}

/// Always "personalized", then one tag per enabled flag.
pub fn route_tags(parameters: &PlanningParameters) -> Vec<String> {
    let mut tags = vec![TAG_PERSONALIZED.to_string()];

    if parameters.include_audio_guides {
        tags.push(TAG_AUDIO_GUIDE.to_string());
    }
    if parameters.include_restaurants {
        tags.push(TAG_FOOD.to_string());
    }
    if parameters.include_shopping {
        tags.push(TAG_SHOPPING.to_string());
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointOfInterest;
    use crate::services::itinerary_planner::route_optimizer::RouteOptimizer;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn origin() -> Coordinates {
        Coordinates::new(54.1838, 45.1749).unwrap()
    }

    #[test]
    fn test_title_and_description() {
        let interests = labels(&["архитектура", "история"]);
        assert_eq!(route_title(150, &interests), "Маршрут 2ч: архитектура, история");
        assert_eq!(route_title(59, &[]), "Маршрут 0ч: ");
        assert_eq!(
            route_description(4, &interests),
            "Персонализированный маршрут по 4 точкам интереса. Включает архитектура, история."
        );
    }

    #[test]
    fn test_tags_follow_flags() {
        let mut parameters = PlanningParameters::default();
        assert_eq!(route_tags(&parameters), vec!["personalized"]);

        parameters.include_audio_guides = true;
        parameters.include_shopping = true;
        assert_eq!(
            route_tags(&parameters),
            vec!["personalized", "audio-guide", "shopping"]
        );

        parameters.include_restaurants = true;
        assert_eq!(
            route_tags(&parameters),
            vec!["personalized", "audio-guide", "food", "shopping"]
        );
    }

    #[test]
    fn test_build_with_start_location() {
        let catalog = vec![
            PointOfInterest::new(
                "a",
                "A",
                labels(&["музеи"]),
                origin().offset_north(1000.0),
                5.0,
            )
            .with_audio_guides(labels(&["audio/a-1.m4a", "audio/a-2.m4a"])),
            PointOfInterest::new("b", "B", vec![], origin().offset_north(2000.0), 4.0),
        ];
        let candidates: Vec<&PointOfInterest> = catalog.iter().collect();
        let parameters = PlanningParameters {
            interests: labels(&["музеи"]),
            max_duration_minutes: 180,
            start_location: Some(origin()),
            include_audio_guides: true,
            ..Default::default()
        };
        let config = PlannerConfig::default();

        let route = RouteOptimizer::new(&config).optimize(&candidates, &parameters);
        let polyline = ItineraryBuilder::build_polyline(parameters.start_location.as_ref(), &route);
        let itinerary = ItineraryBuilder::new(&config).build(&route, polyline, &parameters);

        assert!(itinerary.id.starts_with("custom-"));
        assert_eq!(itinerary.stops.len(), 2);
        assert_eq!(itinerary.polyline.len(), itinerary.stops.len() + 1);
        assert_eq!(itinerary.polyline[0], origin());
        assert!((itinerary.total_distance_km - 2.0).abs() < 1e-9);
        assert_eq!(itinerary.total_duration_minutes, route.total_minutes);
        assert_eq!(itinerary.estimated_cost, Some(400.0));
        assert_eq!(itinerary.audio_guides, labels(&["audio/a-1.m4a", "audio/a-2.m4a"]));
        assert_eq!(itinerary.tags, vec!["personalized", "audio-guide"]);
        assert_eq!(itinerary.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_build_empty_route() {
        let parameters = PlanningParameters {
            max_duration_minutes: 60,
            ..Default::default()
        };
        let route = OptimizedRoute::default();
        let polyline = ItineraryBuilder::build_polyline(None, &route);
        let itinerary =
            ItineraryBuilder::new(&PlannerConfig::default()).build(&route, polyline, &parameters);

        assert!(itinerary.is_empty());
        assert!(itinerary.polyline.is_empty());
        assert_eq!(itinerary.total_distance_km, 0.0);
        assert_eq!(itinerary.estimated_cost, Some(0.0));
        assert_eq!(itinerary.difficulty, Difficulty::Easy);
    }
}
