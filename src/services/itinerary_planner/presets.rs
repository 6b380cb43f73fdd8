use crate::models::PlanningParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ARCHITECTURE: &str = "архитектура";
const HISTORY: &str = "история";
const MUSEUMS: &str = "музеи";
const ENTERTAINMENT: &str = "развлечения";
const FAMILY: &str = "семейный";
const FOOD: &str = "еда";
const SOUVENIRS: &str = "сувениры";

/// Named, pre-filled parameter sets for common trip lengths and themes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PresetBundle {
    #[serde(rename = "3h")]
    ThreeHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "weekend")]
    Weekend,
    #[serde(rename = "family")]
    Family,
    #[serde(rename = "cultural")]
    Cultural,
    #[serde(rename = "food")]
    Food,
    #[serde(rename = "shopping")]
    Shopping,
}

impl PresetBundle {
    pub fn all() -> [PresetBundle; 8] {
        [
            PresetBundle::ThreeHours,
            PresetBundle::SixHours,
            PresetBundle::OneDay,
            PresetBundle::Weekend,
            PresetBundle::Family,
            PresetBundle::Cultural,
            PresetBundle::Food,
            PresetBundle::Shopping,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetBundle::ThreeHours => "3h",
            PresetBundle::SixHours => "6h",
            PresetBundle::OneDay => "1d",
            PresetBundle::Weekend => "weekend",
            PresetBundle::Family => "family",
            PresetBundle::Cultural => "cultural",
            PresetBundle::Food => "food",
            PresetBundle::Shopping => "shopping",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PresetBundle::ThreeHours => "3 часа",
            PresetBundle::SixHours => "6 часов",
            PresetBundle::OneDay => "1 день",
            PresetBundle::Weekend => "Выходные",
            PresetBundle::Family => "Семейный",
            PresetBundle::Cultural => "Культурный",
            PresetBundle::Food => "Гастрономический",
            PresetBundle::Shopping => "Шоппинг",
        }
    }

    pub fn parameters(&self) -> PlanningParameters {
        match self {
            PresetBundle::ThreeHours => preset(
                &[ARCHITECTURE, HISTORY],
                &[ARCHITECTURE, HISTORY],
                &[],
                180,
                5.0,
                (true, false, false),
            ),
            PresetBundle::SixHours => preset(
                &[ARCHITECTURE, HISTORY, MUSEUMS],
                &[ARCHITECTURE, HISTORY, MUSEUMS],
                &[],
                360,
                8.0,
                (true, true, false),
            ),
            PresetBundle::OneDay => preset(
                &[ARCHITECTURE, HISTORY, MUSEUMS, ENTERTAINMENT],
                &[ARCHITECTURE, HISTORY, MUSEUMS],
                &[],
                480,
                12.0,
                (true, true, true),
            ),
            PresetBundle::Weekend => preset(
                &[ARCHITECTURE, HISTORY, MUSEUMS, ENTERTAINMENT, FAMILY],
                &[ARCHITECTURE, HISTORY, MUSEUMS, ENTERTAINMENT],
                &[],
                960,
                15.0,
                (true, true, true),
            ),
            PresetBundle::Family => preset(
                &[FAMILY, ENTERTAINMENT, MUSEUMS],
                &[FAMILY, ENTERTAINMENT],
                &[],
                240,
                6.0,
                (true, true, false),
            ),
            PresetBundle::Cultural => preset(
                &[MUSEUMS, HISTORY, ARCHITECTURE],
                &[MUSEUMS, HISTORY],
                &[FOOD, ENTERTAINMENT],
                300,
                7.0,
                (true, false, false),
            ),
            PresetBundle::Food => preset(
                &[FOOD, ENTERTAINMENT],
                &[FOOD],
                &[],
                180,
                4.0,
                (false, true, false),
            ),
            PresetBundle::Shopping => preset(
                &[SOUVENIRS, ENTERTAINMENT],
                &[SOUVENIRS],
                &[],
                120,
                3.0,
                (false, false, true),
            ),
        }
    }
}

/// `flags` is (audio guides, restaurants, shopping)
fn preset(
    interests: &[&str],
    preferred: &[&str],
    avoid: &[&str],
    max_duration_minutes: u32,
    max_distance_km: f64,
    flags: (bool, bool, bool),
) -> PlanningParameters {
    let owned = |labels: &[&str]| labels.iter().map(|l| l.to_string()).collect::<Vec<_>>();
    let (include_audio_guides, include_restaurants, include_shopping) = flags;

    PlanningParameters {
        interests: owned(interests),
        preferred_categories: owned(preferred),
        avoid_categories: owned(avoid),
        max_duration_minutes,
        start_location: None,
        max_distance_km,
        include_audio_guides,
        include_restaurants,
        include_shopping,
    }
}

impl fmt::Display for PresetBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PresetBundle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "3h" => Ok(PresetBundle::ThreeHours),
            "6h" => Ok(PresetBundle::SixHours),
            "1d" => Ok(PresetBundle::OneDay),
            "weekend" => Ok(PresetBundle::Weekend),
            "family" => Ok(PresetBundle::Family),
            "cultural" => Ok(PresetBundle::Cultural),
            "food" => Ok(PresetBundle::Food),
            "shopping" => Ok(PresetBundle::Shopping),
            _ => Err(format!("Invalid preset: '{}'", s)),
        }
    }
}
