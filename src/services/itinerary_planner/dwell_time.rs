use crate::constants::*;
use crate::models::{CategoryKind, PlanningParameters, PointOfInterest};

/// Category kinds in the order they are checked. A POI that is both a museum
/// and a restaurant gets museum time.
const DWELL_PRIORITY: [(CategoryKind, u32); 4] = [
    (CategoryKind::Museum, DWELL_MUSEUM_MINUTES),
    (CategoryKind::Architecture, DWELL_ARCHITECTURE_MINUTES),
    (CategoryKind::Food, DWELL_FOOD_MINUTES),
    (CategoryKind::Souvenir, DWELL_SOUVENIR_MINUTES),
];

/// Expected minutes spent at a POI.
pub fn estimate_dwell_minutes(poi: &PointOfInterest, parameters: &PlanningParameters) -> u32 {
    let base = DWELL_PRIORITY
        .iter()
        .find(|(kind, _)| poi.has_category_kind(*kind))
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DWELL_DEFAULT_MINUTES);

    if parameters.include_audio_guides && poi.has_audio_guide() {
        base + DWELL_AUDIO_GUIDE_EXTRA_MINUTES
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinates;

    fn poi(categories: &[&str]) -> PointOfInterest {
        PointOfInterest::new(
            "p",
            "P",
            categories.iter().map(|c| c.to_string()).collect(),
            Coordinates::new(54.18, 45.17).unwrap(),
            4.0,
        )
    }

    fn params(include_audio_guides: bool) -> PlanningParameters {
        PlanningParameters {
            include_audio_guides,
            max_duration_minutes: 180,
            ..Default::default()
        }
    }

    #[test]
    fn test_base_times_by_category() {
        assert_eq!(estimate_dwell_minutes(&poi(&["музеи"]), &params(false)), 45);
        assert_eq!(
            estimate_dwell_minutes(&poi(&["архитектура"]), &params(false)),
            30
        );
        assert_eq!(estimate_dwell_minutes(&poi(&["еда"]), &params(false)), 60);
        assert_eq!(estimate_dwell_minutes(&poi(&["сувениры"]), &params(false)), 15);
        assert_eq!(estimate_dwell_minutes(&poi(&["history"]), &params(false)), 20);
        assert_eq!(estimate_dwell_minutes(&poi(&[]), &params(false)), 20);
    }

    #[test]
    fn test_priority_order() {
        // Museum beats food even when food is listed first
        assert_eq!(
            estimate_dwell_minutes(&poi(&["еда", "музеи"]), &params(false)),
            45
        );
        assert_eq!(
            estimate_dwell_minutes(&poi(&["сувениры", "architecture"]), &params(false)),
            30
        );
    }

    #[test]
    fn test_museum_with_audio_guide() {
        let guided = poi(&["museum"]).with_audio_guides(vec!["audio/museum.m4a".to_string()]);
        assert_eq!(estimate_dwell_minutes(&guided, &params(true)), 55);
        // Audio time only counts when guides were requested
        assert_eq!(estimate_dwell_minutes(&guided, &params(false)), 45);
        // Requested but unavailable
        assert_eq!(estimate_dwell_minutes(&poi(&["museum"]), &params(true)), 45);
    }
}
