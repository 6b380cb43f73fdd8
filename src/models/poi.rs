use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Coarse category families the planner treats differently.
/// Catalog labels are free-form; anything unrecognised is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Museum,
    Architecture,
    Food,
    Souvenir,
    Other,
}

impl CategoryKind {
    /// Classify a catalog label. Never fails: unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(CategoryKind::Other)
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "музеи" | "музей" | "museum" | "museums" => Ok(CategoryKind::Museum),
            "архитектура" | "architecture" => Ok(CategoryKind::Architecture),
            "еда" | "food" | "restaurant" | "restaurants" | "cafe" => Ok(CategoryKind::Food),
            "сувениры" | "souvenirs" | "souvenir" | "shopping" | "shop" => {
                Ok(CategoryKind::Souvenir)
            }
            "other" => Ok(CategoryKind::Other),
            _ => Err(format!("Unrecognised POI category: {}", s)),
        }
    }
}

/// A visitable place supplied by the content service. Read-only to the planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Missing when the content service has no geocode for the place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Rating from 0-5
    #[serde(default)]
    pub rating: f64,
    /// References to audio-guide tracks
    #[serde(default)]
    pub audio_guides: Vec<String>,
}

impl PointOfInterest {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        categories: Vec<String>,
        coordinates: Coordinates,
        rating: f64,
    ) -> Self {
        PointOfInterest {
            id: id.into(),
            title: title.into(),
            categories,
            tags: Vec::new(),
            coordinates: Some(coordinates),
            rating: rating.clamp(0.0, 5.0),
            audio_guides: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_audio_guides(mut self, audio_guides: Vec<String>) -> Self {
        self.audio_guides = audio_guides;
        self
    }

    pub fn has_audio_guide(&self) -> bool {
        !self.audio_guides.is_empty()
    }

    /// Coordinates that are present and within range
    pub fn usable_coordinates(&self) -> Option<Coordinates> {
        self.coordinates.filter(Coordinates::is_usable)
    }

    pub fn in_any_category(&self, labels: &[String]) -> bool {
        labels.iter().any(|label| self.categories.contains(label))
    }

    /// Interests match either a category or a free-form tag
    pub fn matches_any_interest(&self, interests: &[String]) -> bool {
        interests
            .iter()
            .any(|interest| self.categories.contains(interest) || self.tags.contains(interest))
    }

    pub fn has_category_kind(&self, kind: CategoryKind) -> bool {
        self.categories
            .iter()
            .any(|label| CategoryKind::from_label(label) == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn cathedral() -> PointOfInterest {
        PointOfInterest::new(
            "cathedral",
            "Кафедральный собор",
            labels(&["архитектура", "история"]),
            Coordinates::new(54.1807, 45.1806).unwrap(),
            4.8,
        )
        .with_tags(labels(&["религия"]))
    }

    #[test]
    fn test_category_kind_parsing() {
        assert_eq!("музеи".parse::<CategoryKind>().unwrap(), CategoryKind::Museum);
        assert_eq!("MUSEUM".parse::<CategoryKind>().unwrap(), CategoryKind::Museum);
        assert_eq!("еда".parse::<CategoryKind>().unwrap(), CategoryKind::Food);
        assert_eq!(
            "Shopping".parse::<CategoryKind>().unwrap(),
            CategoryKind::Souvenir
        );
        assert!("история".parse::<CategoryKind>().is_err());
        assert_eq!(CategoryKind::from_label("история"), CategoryKind::Other);
    }

    #[test]
    fn test_category_and_interest_matching() {
        let poi = cathedral();

        assert!(poi.in_any_category(&labels(&["музеи", "архитектура"])));
        assert!(!poi.in_any_category(&labels(&["религия"])));
        assert!(!poi.in_any_category(&[]));

        // Tags count for interests but not for categories
        assert!(poi.matches_any_interest(&labels(&["религия"])));
        assert!(!poi.matches_any_interest(&labels(&["еда"])));

        assert!(poi.has_category_kind(CategoryKind::Architecture));
        assert!(!poi.has_category_kind(CategoryKind::Museum));
    }

    #[test]
    fn test_rating_is_clamped() {
        let poi = PointOfInterest::new(
            "p",
            "P",
            vec![],
            Coordinates::new(54.0, 45.0).unwrap(),
            7.5,
        );
        assert_eq!(poi.rating, 5.0);
    }

    #[test]
    fn test_usable_coordinates() {
        let mut poi = cathedral();
        assert!(poi.usable_coordinates().is_some());

        poi.coordinates = None;
        assert!(poi.usable_coordinates().is_none());

        poi.coordinates = Some(Coordinates {
            lat: f64::NAN,
            lng: 45.0,
        });
        assert!(poi.usable_coordinates().is_none());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let poi: PointOfInterest = serde_json::from_str(
            r#"{"id": "p1", "title": "Парк", "coordinates": {"lat": 54.2, "lng": 45.1}}"#,
        )
        .unwrap();

        assert!(poi.categories.is_empty());
        assert!(poi.tags.is_empty());
        assert!(!poi.has_audio_guide());
        assert_eq!(poi.rating, 0.0);
        assert!(poi.usable_coordinates().is_some());
    }
}
